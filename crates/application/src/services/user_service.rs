use std::sync::Arc;

use uuid::Uuid;

use domain::{DomainError, RepositoryError, User, UserId};

use crate::{error::ApplicationError, repository::UserRepository};

pub struct UserServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
}

/// 核心用户用例编排
pub struct UserService {
    deps: UserServiceDependencies,
}

impl UserService {
    pub fn new(deps: UserServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn create_user(&self, nickname: String) -> Result<User, ApplicationError> {
        let user = User::new(UserId::from(Uuid::new_v4()), nickname)?;

        let stored = self.deps.user_repository.save(user).await?;
        Ok(stored)
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, ApplicationError> {
        self.deps
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::Domain(DomainError::UserNotFound))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApplicationError> {
        let users = self.deps.user_repository.find_all().await?;
        Ok(users)
    }

    pub async fn update_user(
        &self,
        id: UserId,
        nickname: String,
    ) -> Result<User, ApplicationError> {
        let mut existing = self.get_user(id).await?;
        existing.rename(nickname)?;

        let stored = self.deps.user_repository.update(existing).await?;
        Ok(stored)
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), ApplicationError> {
        match self.deps.user_repository.delete(id).await {
            Err(RepositoryError::NotFound) => {
                Err(ApplicationError::Domain(DomainError::UserNotFound))
            }
            other => other.map_err(ApplicationError::from),
        }
    }
}
