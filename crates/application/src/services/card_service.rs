use std::sync::Arc;

use uuid::Uuid;

use domain::{Card, CardId, DomainError, RepositoryError, UserId};

use crate::{clock::Clock, error::ApplicationError, repository::CardRepository};

#[derive(Debug, Clone)]
pub struct CreateCardRequest {
    pub front: String,
    pub back: String,
    pub owner_id: Option<UserId>,
}

#[derive(Debug, Clone)]
pub struct UpdateCardRequest {
    pub id: CardId,
    pub front: String,
    pub back: String,
}

pub struct CardServiceDependencies {
    pub card_repository: Arc<dyn CardRepository>,
    pub clock: Arc<dyn Clock>,
}

/// 核心卡片用例编排
pub struct CardService {
    deps: CardServiceDependencies,
}

impl CardService {
    pub fn new(deps: CardServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn create_card(&self, request: CreateCardRequest) -> Result<Card, ApplicationError> {
        let now = self.deps.clock.now();
        let card = Card::new(
            CardId::from(Uuid::new_v4()),
            request.front,
            request.back,
            request.owner_id,
            now,
        )?;

        let stored = self.deps.card_repository.save(card).await?;
        Ok(stored)
    }

    pub async fn get_card(&self, id: CardId) -> Result<Card, ApplicationError> {
        self.deps
            .card_repository
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::Domain(DomainError::CardNotFound))
    }

    /// 列出全部卡片；顺序由仓储实现决定
    pub async fn list_cards(&self) -> Result<Vec<Card>, ApplicationError> {
        let cards = self.deps.card_repository.find_all().await?;
        Ok(cards)
    }

    pub async fn update_card(&self, request: UpdateCardRequest) -> Result<Card, ApplicationError> {
        let mut existing = self.get_card(request.id).await?;
        existing.update_content(request.front, request.back, self.deps.clock.now())?;

        let stored = self.deps.card_repository.update(existing).await?;
        Ok(stored)
    }

    pub async fn delete_card(&self, id: CardId) -> Result<(), ApplicationError> {
        match self.deps.card_repository.delete(id).await {
            Err(RepositoryError::NotFound) => {
                Err(ApplicationError::Domain(DomainError::CardNotFound))
            }
            other => other.map_err(ApplicationError::from),
        }
    }
}
