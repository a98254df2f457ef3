use domain::{DomainError, RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// 是否为"未找到"类错误
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::Domain(
                DomainError::CardNotFound
                    | DomainError::UserNotFound
                    | DomainError::TelegramCardNotFound
                    | DomainError::TelegramUserNotFound
            ) | ApplicationError::Repository(RepositoryError::NotFound)
        )
    }
}
