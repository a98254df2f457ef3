use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use application::services::{CreateCardRequest, UpdateCardRequest};
use domain::{Card, User};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardDto {
    id: Uuid,
    front: String,
    back: String,
    owner_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Card> for CardDto {
    fn from(card: Card) -> Self {
        Self {
            id: card.id.into(),
            front: card.front,
            back: card.back,
            owner_id: card.owner_id.map(Into::into),
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct UserDto {
    id: Uuid,
    nickname: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            nickname: user.nickname,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardPayload {
    front: String,
    #[serde(default)]
    back: String,
    owner_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
struct UpdateCardPayload {
    front: String,
    #[serde(default)]
    back: String,
}

#[derive(Debug, Deserialize)]
struct CreateUserPayload {
    nickname: String,
}

#[derive(Debug, Deserialize)]
struct UpdateUserPayload {
    nickname: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route(
            "/cards/{card_id}",
            get(get_card).put(update_card).delete(delete_card),
        )
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn create_card(
    State(state): State<AppState>,
    Json(payload): Json<CreateCardPayload>,
) -> Result<(StatusCode, Json<CardDto>), ApiError> {
    let card = state
        .card_service
        .create_card(CreateCardRequest {
            front: payload.front,
            back: payload.back,
            owner_id: payload.owner_id.map(Into::into),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(card.into())))
}

async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<CardDto>>, ApiError> {
    let cards = state.card_service.list_cards().await?;
    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<CardDto>, ApiError> {
    let card = state.card_service.get_card(card_id.into()).await?;
    Ok(Json(card.into()))
}

async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(payload): Json<UpdateCardPayload>,
) -> Result<Json<CardDto>, ApiError> {
    let card = state
        .card_service
        .update_card(UpdateCardRequest {
            id: card_id.into(),
            front: payload.front,
            back: payload.back,
        })
        .await?;

    Ok(Json(card.into()))
}

async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.card_service.delete_card(card_id.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state.user_service.create_user(payload.nickname).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.get_user(user_id.into()).await?;
    Ok(Json(user.into()))
}

async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .user_service
        .update_user(user_id.into(), payload.nickname)
        .await?;

    Ok(Json(user.into()))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_user(user_id.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use application::{
        CardService, CardServiceDependencies, MemoryCardRepository, MemoryUserRepository,
        SystemClock, UserService, UserServiceDependencies,
    };

    use super::*;

    fn test_router() -> Router {
        let card_service = Arc::new(CardService::new(CardServiceDependencies {
            card_repository: Arc::new(MemoryCardRepository::new()),
            clock: Arc::new(SystemClock),
        }));
        let user_service = Arc::new(UserService::new(UserServiceDependencies {
            user_repository: Arc::new(MemoryUserRepository::new()),
        }));
        router(AppState::new(card_service, user_service))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router();
        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_card() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/cards",
                json!({"front": "What is Go?", "back": "A programming language"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["front"], "What is Go?");
        assert_eq!(body["back"], "A programming language");
        assert!(body["id"].is_string());
        assert_eq!(body["createdAt"], body["updatedAt"]);
        assert!(body["ownerId"].is_null());
    }

    #[tokio::test]
    async fn test_create_card_empty_front() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/cards",
                json!({"front": "   "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "EMPTY_FRONT");
    }

    #[tokio::test]
    async fn test_get_card_not_found() {
        let app = test_router();

        let response = app
            .oneshot(empty_request(
                "GET",
                &format!("/api/v1/cards/{}", Uuid::new_v4()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "CARD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_card_lifecycle() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/cards",
                json!({"front": "front", "back": "back"}),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/cards/{id}"),
                json!({"front": "new front", "back": "new back"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["front"], "new front");
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/v1/cards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request("GET", &format!("/api/v1/cards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_cards() {
        let app = test_router();

        for front in ["one", "two"] {
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/v1/cards",
                    json!({"front": front}),
                ))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(empty_request("GET", "/api/v1/cards"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/users",
                json!({"nickname": "alice"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["nickname"], "alice");
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/users/{id}"),
                json!({"nickname": "bob"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["nickname"], "bob");

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/v1/users/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request("GET", &format!("/api/v1/users/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_user_empty_nickname() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/users",
                json!({"nickname": ""}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "EMPTY_NICKNAME");
    }
}
