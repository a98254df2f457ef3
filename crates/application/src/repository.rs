use async_trait::async_trait;
use domain::{Card, CardId, RepositoryError, TelegramCard, TelegramUser, User, UserId};

/// 核心卡片仓储端口。`update` 与 `delete` 在记录不存在时返回
/// [`RepositoryError::NotFound`]；查询以 `Option` 表达未命中。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn save(&self, card: Card) -> Result<Card, RepositoryError>;
    async fn find_by_id(&self, id: CardId) -> Result<Option<Card>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Card>, RepositoryError>;
    async fn update(&self, card: Card) -> Result<Card, RepositoryError>;
    async fn delete(&self, id: CardId) -> Result<(), RepositoryError>;
}

/// 核心用户仓储端口。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: User) -> Result<User, RepositoryError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn update(&self, user: User) -> Result<User, RepositoryError>;
    async fn delete(&self, id: UserId) -> Result<(), RepositoryError>;
}

/// Telegram 卡片投影仓储端口，仅支持按核心ID定位。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelegramCardRepository: Send + Sync {
    async fn save(&self, card: TelegramCard) -> Result<TelegramCard, RepositoryError>;
    async fn find_by_core_id(&self, core_id: CardId)
        -> Result<Option<TelegramCard>, RepositoryError>;
    async fn delete_by_core_id(&self, core_id: CardId) -> Result<(), RepositoryError>;
}

/// Telegram 用户投影仓储端口，提供两个二级索引：
/// 按 telegram_id（入站消息解析）与按核心ID（删除级联）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelegramUserRepository: Send + Sync {
    async fn save(&self, user: TelegramUser) -> Result<TelegramUser, RepositoryError>;
    async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<TelegramUser>, RepositoryError>;
    async fn find_by_core_id(&self, core_id: UserId)
        -> Result<Option<TelegramUser>, RepositoryError>;
    async fn delete_by_core_id(&self, core_id: UserId) -> Result<(), RepositoryError>;
}
