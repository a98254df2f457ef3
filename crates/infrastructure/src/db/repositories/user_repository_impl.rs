//! 用户Repository实现

use std::sync::Arc;

use async_trait::async_trait;
use domain::{RepositoryError, User, UserId};
use sqlx::{query, query_as, FromRow};
use uuid::Uuid;

use application::UserRepository;

use crate::db::{map_sqlx_err, DbPool};

#[derive(Debug, Clone, FromRow)]
struct DbUser {
    pub id: Uuid,
    pub nickname: String,
}

impl From<DbUser> for User {
    fn from(db_user: DbUser) -> Self {
        User {
            id: db_user.id.into(),
            nickname: db_user.nickname,
        }
    }
}

/// 用户Repository实现
pub struct PostgresUserRepository {
    pool: Arc<DbPool>,
}

impl PostgresUserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let result = query_as::<_, DbUser>(
            r#"
            INSERT INTO users (id, nickname)
            VALUES ($1, $2)
            RETURNING id, nickname
            "#,
        )
        .bind(Uuid::from(user.id))
        .bind(&user.nickname)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let result = query_as::<_, DbUser>("SELECT id, nickname FROM users WHERE id = $1")
            .bind(Uuid::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users: Vec<DbUser> =
            query_as("SELECT id, nickname FROM users ORDER BY nickname ASC")
                .fetch_all(&*self.pool)
                .await
                .map_err(map_sqlx_err)?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn update(&self, user: User) -> Result<User, RepositoryError> {
        let result = query_as::<_, DbUser>(
            r#"
            UPDATE users
            SET nickname = $2
            WHERE id = $1
            RETURNING id, nickname
            "#,
        )
        .bind(Uuid::from(user.id))
        .bind(&user.nickname)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        result.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM users WHERE id = $1")
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
