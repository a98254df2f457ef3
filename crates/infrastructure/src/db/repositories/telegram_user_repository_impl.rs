//! Telegram 用户投影Repository实现

use std::sync::Arc;

use async_trait::async_trait;
use domain::{RepositoryError, TelegramUser, UserId};
use sqlx::{query, query_as, FromRow};
use uuid::Uuid;

use application::TelegramUserRepository;

use crate::db::{map_sqlx_err, DbPool};

#[derive(Debug, Clone, FromRow)]
struct DbTelegramUser {
    pub id: Uuid,
    pub core_user_id: Uuid,
    pub telegram_id: i64,
    pub name: String,
    pub username: String,
}

impl From<DbTelegramUser> for TelegramUser {
    fn from(row: DbTelegramUser) -> Self {
        TelegramUser {
            id: row.id.into(),
            core_user_id: row.core_user_id.into(),
            telegram_id: row.telegram_id,
            name: row.name,
            username: row.username,
        }
    }
}

/// Telegram 用户投影Repository实现
pub struct PostgresTelegramUserRepository {
    pool: Arc<DbPool>,
}

impl PostgresTelegramUserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TelegramUserRepository for PostgresTelegramUserRepository {
    /// 身份信息漂移时按主键覆盖写入，telegram_id 的唯一约束由表定义保证。
    async fn save(&self, user: TelegramUser) -> Result<TelegramUser, RepositoryError> {
        let result = query_as::<_, DbTelegramUser>(
            r#"
            INSERT INTO telegram_users (id, core_user_id, telegram_id, name, username)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
                SET name = EXCLUDED.name,
                    username = EXCLUDED.username
            RETURNING id, core_user_id, telegram_id, name, username
            "#,
        )
        .bind(Uuid::from(user.id))
        .bind(Uuid::from(user.core_user_id))
        .bind(user.telegram_id)
        .bind(&user.name)
        .bind(&user.username)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.into())
    }

    async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<TelegramUser>, RepositoryError> {
        let result = query_as::<_, DbTelegramUser>(
            r#"
            SELECT id, core_user_id, telegram_id, name, username
            FROM telegram_users
            WHERE telegram_id = $1
            "#,
        )
        .bind(telegram_id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_core_id(
        &self,
        core_id: UserId,
    ) -> Result<Option<TelegramUser>, RepositoryError> {
        let result = query_as::<_, DbTelegramUser>(
            r#"
            SELECT id, core_user_id, telegram_id, name, username
            FROM telegram_users
            WHERE core_user_id = $1
            "#,
        )
        .bind(Uuid::from(core_id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.map(Into::into))
    }

    async fn delete_by_core_id(&self, core_id: UserId) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM telegram_users WHERE core_user_id = $1")
            .bind(Uuid::from(core_id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
