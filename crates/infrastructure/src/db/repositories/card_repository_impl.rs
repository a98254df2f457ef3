//! 卡片Repository实现

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Card, CardId, RepositoryError};
use sqlx::{query, query_as, FromRow};
use uuid::Uuid;

use application::CardRepository;

use crate::db::{map_sqlx_err, DbPool};

/// 数据库卡片模型
#[derive(Debug, Clone, FromRow)]
struct DbCard {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbCard> for Card {
    fn from(db_card: DbCard) -> Self {
        Card {
            id: db_card.id.into(),
            front: db_card.front,
            back: db_card.back,
            owner_id: db_card.owner_id.map(Into::into),
            created_at: db_card.created_at,
            updated_at: db_card.updated_at,
        }
    }
}

/// 卡片Repository实现
pub struct PostgresCardRepository {
    pool: Arc<DbPool>,
}

impl PostgresCardRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PostgresCardRepository {
    async fn save(&self, card: Card) -> Result<Card, RepositoryError> {
        let result = query_as::<_, DbCard>(
            r#"
            INSERT INTO cards (id, front, back, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, front, back, owner_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::from(card.id))
        .bind(&card.front)
        .bind(&card.back)
        .bind(card.owner_id.map(Uuid::from))
        .bind(card.created_at)
        .bind(card.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: CardId) -> Result<Option<Card>, RepositoryError> {
        let result = query_as::<_, DbCard>(
            r#"
            SELECT id, front, back, owner_id, created_at, updated_at
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(Uuid::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Card>, RepositoryError> {
        let cards: Vec<DbCard> = query_as(
            r#"
            SELECT id, front, back, owner_id, created_at, updated_at
            FROM cards
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(cards.into_iter().map(Into::into).collect())
    }

    async fn update(&self, card: Card) -> Result<Card, RepositoryError> {
        let result = query_as::<_, DbCard>(
            r#"
            UPDATE cards
            SET front = $2, back = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, front, back, owner_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::from(card.id))
        .bind(&card.front)
        .bind(&card.back)
        .bind(card.updated_at)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        result.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: CardId) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM cards WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
