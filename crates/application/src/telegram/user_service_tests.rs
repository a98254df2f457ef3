//! Telegram 用户工作流单元测试

use std::sync::Arc;

use uuid::Uuid;

use domain::{DomainError, RepositoryError};

use crate::error::ApplicationError;
use crate::memory::{MemoryTelegramUserRepository, MemoryUserRepository};
use crate::repository::{MockTelegramUserRepository, TelegramUserRepository};
use crate::services::{UserService, UserServiceDependencies};
use crate::telegram::{TelegramUserService, TelegramUserServiceDependencies};

fn core_service() -> Arc<UserService> {
    Arc::new(UserService::new(UserServiceDependencies {
        user_repository: Arc::new(MemoryUserRepository::new()),
    }))
}

fn service() -> (Arc<UserService>, Arc<MemoryTelegramUserRepository>, TelegramUserService) {
    let core = core_service();
    let projections = Arc::new(MemoryTelegramUserRepository::new());
    let service = TelegramUserService::new(TelegramUserServiceDependencies {
        core_users: core.clone(),
        projection_repository: projections.clone(),
    });
    (core, projections, service)
}

#[tokio::test]
async fn test_ensure_user_creates_linked_pair() {
    let (core, _, service) = service();

    let (user, projection) = service.ensure_user(42, "Alice", "alice").await.unwrap();

    assert_eq!(user.nickname, "alice");
    assert_eq!(projection.core_user_id, user.id);
    assert_eq!(projection.telegram_id, 42);
    assert_eq!(projection.name, "Alice");
    assert_eq!(projection.username, "alice");
    assert_ne!(Uuid::from(projection.id), Uuid::nil());
    assert_eq!(core.get_user(user.id).await.unwrap().id, user.id);
}

#[tokio::test]
async fn test_ensure_user_nickname_fallback() {
    let (_, _, service) = service();

    let (user, _) = service.ensure_user(42, "Alice", "").await.unwrap();
    assert_eq!(user.nickname, "tg-42");
}

#[tokio::test]
async fn test_ensure_user_is_idempotent() {
    let (_, _, service) = service();

    let (first_user, first_projection) = service.ensure_user(42, "Alice", "alice").await.unwrap();
    let (second_user, second_projection) = service.ensure_user(42, "Alice", "alice").await.unwrap();

    assert_eq!(second_user.id, first_user.id);
    assert_eq!(second_projection.id, first_projection.id);
}

#[tokio::test]
async fn test_ensure_user_syncs_identity_drift() {
    let (_, projections, service) = service();

    let (user, projection) = service.ensure_user(42, "Alice", "alice").await.unwrap();

    let (same_user, updated) = service
        .ensure_user(42, "Alice Smith", "alice_smith")
        .await
        .unwrap();

    // 同一身份：核心用户与投影ID不变，显示信息就地更新
    assert_eq!(same_user.id, user.id);
    assert_eq!(updated.id, projection.id);
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.username, "alice_smith");

    let stored = projections.find_by_telegram_id(42).await.unwrap().unwrap();
    assert_eq!(stored.name, "Alice Smith");
    assert_eq!(stored.username, "alice_smith");
}

#[tokio::test]
async fn test_ensure_user_rejects_zero_telegram_id() {
    let (_, _, service) = service();

    let result = service.ensure_user(0, "Alice", "alice").await;
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Domain(DomainError::EmptyTelegramId)
    ));
}

#[tokio::test]
async fn test_delete_user_removes_both() {
    let (core, projections, service) = service();

    let (user, _) = service.ensure_user(42, "Alice", "alice").await.unwrap();

    service.delete_user(user.id).await.unwrap();

    let result = core.get_user(user.id).await;
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Domain(DomainError::UserNotFound)
    ));
    assert!(projections.find_by_telegram_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_storage_error_propagates() {
    let mut projections = MockTelegramUserRepository::new();
    projections
        .expect_find_by_telegram_id()
        .returning(|_| Err(RepositoryError::storage("connection reset")));

    let service = TelegramUserService::new(TelegramUserServiceDependencies {
        core_users: core_service(),
        projection_repository: Arc::new(projections),
    });

    let result = service.ensure_user(42, "Alice", "alice").await;
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Repository(RepositoryError::Storage { .. })
    ));
}
