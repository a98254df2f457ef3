use async_trait::async_trait;

use domain::{Card, CardId, User, UserId};

use crate::error::ApplicationError;
use crate::services::{CardService, CreateCardRequest, UserService};

/// Telegram 层消费的核心卡片能力集
#[async_trait]
pub trait CoreCardApi: Send + Sync {
    async fn create_card(&self, request: CreateCardRequest) -> Result<Card, ApplicationError>;
    async fn get_card(&self, id: CardId) -> Result<Card, ApplicationError>;
    async fn delete_card(&self, id: CardId) -> Result<(), ApplicationError>;
}

#[async_trait]
impl CoreCardApi for CardService {
    async fn create_card(&self, request: CreateCardRequest) -> Result<Card, ApplicationError> {
        CardService::create_card(self, request).await
    }

    async fn get_card(&self, id: CardId) -> Result<Card, ApplicationError> {
        CardService::get_card(self, id).await
    }

    async fn delete_card(&self, id: CardId) -> Result<(), ApplicationError> {
        CardService::delete_card(self, id).await
    }
}

/// Telegram 层消费的核心用户能力集
#[async_trait]
pub trait CoreUserApi: Send + Sync {
    async fn create_user(&self, nickname: String) -> Result<User, ApplicationError>;
    async fn get_user(&self, id: UserId) -> Result<User, ApplicationError>;
    async fn delete_user(&self, id: UserId) -> Result<(), ApplicationError>;
}

#[async_trait]
impl CoreUserApi for UserService {
    async fn create_user(&self, nickname: String) -> Result<User, ApplicationError> {
        UserService::create_user(self, nickname).await
    }

    async fn get_user(&self, id: UserId) -> Result<User, ApplicationError> {
        UserService::get_user(self, id).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApplicationError> {
        UserService::delete_user(self, id).await
    }
}
