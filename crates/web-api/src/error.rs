use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }

}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        use application::ApplicationError as AppErr;
        use domain::DomainError;

        match error {
            AppErr::Domain(DomainError::EmptyFront) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "EMPTY_FRONT",
                "card front cannot be empty",
            ),
            AppErr::Domain(DomainError::EmptyNickname) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "EMPTY_NICKNAME",
                "user nickname cannot be empty",
            ),
            AppErr::Domain(DomainError::EmptyTelegramId) => ApiError::new(
                StatusCode::BAD_REQUEST,
                "EMPTY_TELEGRAM_ID",
                "telegram id cannot be zero",
            ),
            AppErr::Domain(DomainError::CardNotFound) => {
                ApiError::new(StatusCode::NOT_FOUND, "CARD_NOT_FOUND", "card not found")
            }
            AppErr::Domain(DomainError::UserNotFound) => {
                ApiError::new(StatusCode::NOT_FOUND, "USER_NOT_FOUND", "user not found")
            }
            AppErr::Domain(DomainError::TelegramCardNotFound) => ApiError::new(
                StatusCode::NOT_FOUND,
                "TELEGRAM_CARD_NOT_FOUND",
                "telegram card not found",
            ),
            AppErr::Domain(DomainError::TelegramUserNotFound) => ApiError::new(
                StatusCode::NOT_FOUND,
                "TELEGRAM_USER_NOT_FOUND",
                "telegram user not found",
            ),
            AppErr::Repository(repo_err) => match repo_err {
                domain::RepositoryError::NotFound => ApiError::new(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "requested resource not found",
                ),
                domain::RepositoryError::Conflict => {
                    ApiError::new(StatusCode::CONFLICT, "CONFLICT", "resource already exists")
                }
                domain::RepositoryError::Storage { message } => ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    format!("database error: {}", message),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
