use std::sync::Arc;

use uuid::Uuid;

use domain::{Card, CardId, DomainError, RepositoryError, TelegramCard, TelegramCardId, TelegramUser};

use crate::error::ApplicationError;
use crate::repository::TelegramCardRepository;
use crate::services::CreateCardRequest;
use crate::telegram::core_api::CoreCardApi;

pub struct TelegramCardServiceDependencies {
    pub core_cards: Arc<dyn CoreCardApi>,
    pub projection_repository: Arc<dyn TelegramCardRepository>,
    /// 投影写入失败时是否回删刚创建的核心卡片
    pub strict_consistency: bool,
}

/// Telegram 卡片工作流：核心卡片 + 上下文投影
pub struct TelegramCardService {
    deps: TelegramCardServiceDependencies,
}

impl TelegramCardService {
    pub fn new(deps: TelegramCardServiceDependencies) -> Self {
        Self { deps }
    }

    /// 创建核心卡片并写入 Telegram 投影。
    ///
    /// 两次写入不构成事务：默认模式下投影失败时核心卡片已持久化，
    /// 错误原样上抛；strict 模式下额外做一次尽力而为的回删。
    pub async fn create_card(
        &self,
        front: String,
        back: String,
        owner: &TelegramUser,
        chat_id: i64,
    ) -> Result<Card, ApplicationError> {
        let created = self
            .deps
            .core_cards
            .create_card(CreateCardRequest {
                front,
                back,
                owner_id: Some(owner.core_user_id),
            })
            .await?;

        match self.save_projection(&created, owner, chat_id).await {
            Ok(()) => Ok(created),
            Err(err) => {
                if self.deps.strict_consistency {
                    if let Err(rollback_err) = self.deps.core_cards.delete_card(created.id).await {
                        tracing::warn!(
                            card_id = %created.id,
                            error = %rollback_err,
                            "core card rollback failed after projection write failure"
                        );
                    }
                }
                Err(err)
            }
        }
    }

    async fn save_projection(
        &self,
        card: &Card,
        owner: &TelegramUser,
        chat_id: i64,
    ) -> Result<(), ApplicationError> {
        let projection = TelegramCard::new(
            TelegramCardId::from(Uuid::new_v4()),
            card.id,
            owner.telegram_id,
            chat_id,
        )?;

        self.deps.projection_repository.save(projection).await?;
        Ok(())
    }

    pub async fn get_card(&self, id: CardId) -> Result<Card, ApplicationError> {
        self.deps.core_cards.get_card(id).await
    }

    /// 先删核心卡片，成功后再删投影。核心删除成功而投影删除失败时
    /// 会留下孤儿投影，错误上抛、不做重试。
    pub async fn delete_card(&self, id: CardId) -> Result<(), ApplicationError> {
        self.deps.core_cards.delete_card(id).await?;

        match self.deps.projection_repository.delete_by_core_id(id).await {
            Err(RepositoryError::NotFound) => {
                Err(ApplicationError::Domain(DomainError::TelegramCardNotFound))
            }
            other => other.map_err(ApplicationError::from),
        }
    }
}
