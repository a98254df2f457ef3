use std::sync::Arc;

use uuid::Uuid;

use domain::{DomainError, RepositoryError, TelegramUser, TelegramUserId, User, UserId};

use crate::error::ApplicationError;
use crate::repository::TelegramUserRepository;
use crate::telegram::core_api::CoreUserApi;

pub struct TelegramUserServiceDependencies {
    pub core_users: Arc<dyn CoreUserApi>,
    pub projection_repository: Arc<dyn TelegramUserRepository>,
}

/// Telegram 用户工作流：按外部标识幂等地解析或创建核心用户
pub struct TelegramUserService {
    deps: TelegramUserServiceDependencies,
}

impl TelegramUserService {
    pub fn new(deps: TelegramUserServiceDependencies) -> Self {
        Self { deps }
    }

    /// 幂等的 resolve-or-create：
    /// 同一个 telegram_id 永远对应同一个核心用户与同一个投影；
    /// 显示名称或用户名漂移时就地更新投影（投影ID不变）。
    pub async fn ensure_user(
        &self,
        telegram_id: i64,
        name: &str,
        username: &str,
    ) -> Result<(User, TelegramUser), ApplicationError> {
        if telegram_id == 0 {
            return Err(ApplicationError::Domain(DomainError::EmptyTelegramId));
        }

        if let Some(mut projection) = self
            .deps
            .projection_repository
            .find_by_telegram_id(telegram_id)
            .await?
        {
            let core_user = self.deps.core_users.get_user(projection.core_user_id).await?;
            if projection.sync_identity(name, username) {
                projection = self.deps.projection_repository.save(projection).await?;
            }
            return Ok((core_user, projection));
        }

        // 首次见到该 Telegram 身份：合成昵称并同时建立核心用户与投影
        let nickname = if username.is_empty() {
            format!("tg-{telegram_id}")
        } else {
            username.to_owned()
        };

        let core_user = self.deps.core_users.create_user(nickname).await?;

        let projection = TelegramUser::new(
            TelegramUserId::from(Uuid::new_v4()),
            core_user.id,
            telegram_id,
            name,
            username,
        )?;
        let projection = self.deps.projection_repository.save(projection).await?;

        Ok((core_user, projection))
    }

    /// 先删核心用户，成功后再删投影（与卡片删除相同的孤儿风险）。
    pub async fn delete_user(&self, core_id: UserId) -> Result<(), ApplicationError> {
        self.deps.core_users.delete_user(core_id).await?;

        match self
            .deps
            .projection_repository
            .delete_by_core_id(core_id)
            .await
        {
            Err(RepositoryError::NotFound) => {
                Err(ApplicationError::Domain(DomainError::TelegramUserNotFound))
            }
            other => other.map_err(ApplicationError::from),
        }
    }
}
