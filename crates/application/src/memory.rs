//! 内存仓储实现
//!
//! 读写锁保护的 HashMap 存储，用于演示与测试。实例显式构造、按需注入，
//! 不提供任何全局单例。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{Card, CardId, RepositoryError, TelegramCard, TelegramUser, User, UserId};

use crate::repository::{
    CardRepository, TelegramCardRepository, TelegramUserRepository, UserRepository,
};

/// 内存卡片仓储。`find_all` 的返回顺序不作任何保证。
#[derive(Debug, Default)]
pub struct MemoryCardRepository {
    store: RwLock<HashMap<CardId, Card>>,
}

impl MemoryCardRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardRepository for MemoryCardRepository {
    async fn save(&self, card: Card) -> Result<Card, RepositoryError> {
        let mut store = self.store.write().await;
        store.insert(card.id, card.clone());
        Ok(card)
    }

    async fn find_by_id(&self, id: CardId) -> Result<Option<Card>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Card>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn update(&self, card: Card) -> Result<Card, RepositoryError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&card.id) {
            return Err(RepositoryError::NotFound);
        }
        store.insert(card.id, card.clone());
        Ok(card)
    }

    async fn delete(&self, id: CardId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// 内存用户仓储。
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    store: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let mut store = self.store.write().await;
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User, RepositoryError> {
        let mut store = self.store.write().await;
        if !store.contains_key(&user.id) {
            return Err(RepositoryError::NotFound);
        }
        store.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct TelegramCardStore {
    by_id: HashMap<domain::TelegramCardId, TelegramCard>,
    core_to_id: HashMap<CardId, domain::TelegramCardId>,
}

/// 内存 Telegram 卡片投影仓储，维护核心ID二级索引。
#[derive(Debug, Default)]
pub struct MemoryTelegramCardRepository {
    store: RwLock<TelegramCardStore>,
}

impl MemoryTelegramCardRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TelegramCardRepository for MemoryTelegramCardRepository {
    async fn save(&self, card: TelegramCard) -> Result<TelegramCard, RepositoryError> {
        let mut store = self.store.write().await;
        store.core_to_id.insert(card.core_card_id, card.id);
        store.by_id.insert(card.id, card.clone());
        Ok(card)
    }

    async fn find_by_core_id(
        &self,
        core_id: CardId,
    ) -> Result<Option<TelegramCard>, RepositoryError> {
        let store = self.store.read().await;
        let card = store
            .core_to_id
            .get(&core_id)
            .and_then(|id| store.by_id.get(id))
            .cloned();
        Ok(card)
    }

    async fn delete_by_core_id(&self, core_id: CardId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let id = store
            .core_to_id
            .remove(&core_id)
            .ok_or(RepositoryError::NotFound)?;
        store.by_id.remove(&id);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct TelegramUserStore {
    by_id: HashMap<domain::TelegramUserId, TelegramUser>,
    core_to_id: HashMap<UserId, domain::TelegramUserId>,
    telegram_to_id: HashMap<i64, domain::TelegramUserId>,
}

/// 内存 Telegram 用户投影仓储，维护 telegram_id 与核心ID两个二级索引。
#[derive(Debug, Default)]
pub struct MemoryTelegramUserRepository {
    store: RwLock<TelegramUserStore>,
}

impl MemoryTelegramUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TelegramUserRepository for MemoryTelegramUserRepository {
    async fn save(&self, user: TelegramUser) -> Result<TelegramUser, RepositoryError> {
        let mut store = self.store.write().await;
        store.core_to_id.insert(user.core_user_id, user.id);
        store.telegram_to_id.insert(user.telegram_id, user.id);
        store.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<TelegramUser>, RepositoryError> {
        let store = self.store.read().await;
        let user = store
            .telegram_to_id
            .get(&telegram_id)
            .and_then(|id| store.by_id.get(id))
            .cloned();
        Ok(user)
    }

    async fn find_by_core_id(
        &self,
        core_id: UserId,
    ) -> Result<Option<TelegramUser>, RepositoryError> {
        let store = self.store.read().await;
        let user = store
            .core_to_id
            .get(&core_id)
            .and_then(|id| store.by_id.get(id))
            .cloned();
        Ok(user)
    }

    async fn delete_by_core_id(&self, core_id: UserId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let id = store
            .core_to_id
            .remove(&core_id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(user) = store.by_id.remove(&id) {
            store.telegram_to_id.remove(&user.telegram_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use domain::{TelegramCardId, TelegramUserId};

    use super::*;

    #[tokio::test]
    async fn test_card_repository_crud() {
        let repo = MemoryCardRepository::new();
        let card = Card::new(
            CardId::from(Uuid::new_v4()),
            "front",
            "back",
            None,
            Utc::now(),
        )
        .unwrap();

        repo.save(card.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(card.id).await.unwrap(), Some(card.clone()));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        repo.delete(card.id).await.unwrap();
        assert_eq!(repo.find_by_id(card.id).await.unwrap(), None);
        assert_eq!(
            repo.delete(card.id).await.unwrap_err(),
            RepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_card_update_requires_existing() {
        let repo = MemoryCardRepository::new();
        let card = Card::new(
            CardId::from(Uuid::new_v4()),
            "front",
            "back",
            None,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(
            repo.update(card).await.unwrap_err(),
            RepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_telegram_user_indexes() {
        let repo = MemoryTelegramUserRepository::new();
        let core_id = UserId::from(Uuid::new_v4());
        let user = TelegramUser::new(
            TelegramUserId::from(Uuid::new_v4()),
            core_id,
            42,
            "John",
            "johnny",
        )
        .unwrap();

        repo.save(user.clone()).await.unwrap();
        assert_eq!(
            repo.find_by_telegram_id(42).await.unwrap(),
            Some(user.clone())
        );
        assert_eq!(repo.find_by_core_id(core_id).await.unwrap(), Some(user));

        repo.delete_by_core_id(core_id).await.unwrap();
        // 删除后两个索引都必须清空
        assert_eq!(repo.find_by_telegram_id(42).await.unwrap(), None);
        assert_eq!(repo.find_by_core_id(core_id).await.unwrap(), None);
        assert_eq!(
            repo.delete_by_core_id(core_id).await.unwrap_err(),
            RepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_telegram_card_index() {
        let repo = MemoryTelegramCardRepository::new();
        let core_id = CardId::from(Uuid::new_v4());
        let card =
            TelegramCard::new(TelegramCardId::from(Uuid::new_v4()), core_id, 42, 1234).unwrap();

        repo.save(card.clone()).await.unwrap();
        assert_eq!(repo.find_by_core_id(core_id).await.unwrap(), Some(card));

        repo.delete_by_core_id(core_id).await.unwrap();
        assert_eq!(repo.find_by_core_id(core_id).await.unwrap(), None);
    }
}
