//! Telegram 卡片投影Repository实现

use std::sync::Arc;

use async_trait::async_trait;
use domain::{CardId, RepositoryError, TelegramCard};
use sqlx::{query, query_as, FromRow};
use uuid::Uuid;

use application::TelegramCardRepository;

use crate::db::{map_sqlx_err, DbPool};

#[derive(Debug, Clone, FromRow)]
struct DbTelegramCard {
    pub id: Uuid,
    pub core_card_id: Uuid,
    pub owner_telegram_id: i64,
    pub chat_id: i64,
}

impl From<DbTelegramCard> for TelegramCard {
    fn from(row: DbTelegramCard) -> Self {
        TelegramCard {
            id: row.id.into(),
            core_card_id: row.core_card_id.into(),
            owner_telegram_id: row.owner_telegram_id,
            chat_id: row.chat_id,
        }
    }
}

/// Telegram 卡片投影Repository实现
pub struct PostgresTelegramCardRepository {
    pool: Arc<DbPool>,
}

impl PostgresTelegramCardRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TelegramCardRepository for PostgresTelegramCardRepository {
    async fn save(&self, card: TelegramCard) -> Result<TelegramCard, RepositoryError> {
        let result = query_as::<_, DbTelegramCard>(
            r#"
            INSERT INTO telegram_cards (id, core_card_id, owner_telegram_id, chat_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
                SET owner_telegram_id = EXCLUDED.owner_telegram_id,
                    chat_id = EXCLUDED.chat_id
            RETURNING id, core_card_id, owner_telegram_id, chat_id
            "#,
        )
        .bind(Uuid::from(card.id))
        .bind(Uuid::from(card.core_card_id))
        .bind(card.owner_telegram_id)
        .bind(card.chat_id)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.into())
    }

    async fn find_by_core_id(
        &self,
        core_id: CardId,
    ) -> Result<Option<TelegramCard>, RepositoryError> {
        let result = query_as::<_, DbTelegramCard>(
            r#"
            SELECT id, core_card_id, owner_telegram_id, chat_id
            FROM telegram_cards
            WHERE core_card_id = $1
            "#,
        )
        .bind(Uuid::from(core_id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.map(Into::into))
    }

    async fn delete_by_core_id(&self, core_id: CardId) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM telegram_cards WHERE core_card_id = $1")
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
