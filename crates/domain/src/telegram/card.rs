//! Telegram 卡片投影

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CardId, TelegramCardId};

/// 核心卡片在 Telegram 上下文中的投影，记录创建者与来源会话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramCard {
    /// 投影自身ID
    pub id: TelegramCardId,
    /// 对应的核心卡片ID（一对一）
    pub core_card_id: CardId,
    /// 创建该卡片的 Telegram 用户（非零）
    pub owner_telegram_id: i64,
    /// 来源会话
    pub chat_id: i64,
}

impl TelegramCard {
    pub fn new(
        id: TelegramCardId,
        core_card_id: CardId,
        owner_telegram_id: i64,
        chat_id: i64,
    ) -> DomainResult<Self> {
        let card = Self {
            id,
            core_card_id,
            owner_telegram_id,
            chat_id,
        };
        card.validate()?;
        Ok(card)
    }

    /// 校验必填字段
    pub fn validate(&self) -> DomainResult<()> {
        if self.owner_telegram_id == 0 {
            return Err(DomainError::EmptyTelegramId);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_projection_requires_owner() {
        let result = TelegramCard::new(
            TelegramCardId::from(Uuid::new_v4()),
            CardId::from(Uuid::new_v4()),
            0,
            1234,
        );
        assert_eq!(result.unwrap_err(), DomainError::EmptyTelegramId);
    }

    #[test]
    fn test_projection_valid() {
        let projection = TelegramCard::new(
            TelegramCardId::from(Uuid::new_v4()),
            CardId::from(Uuid::new_v4()),
            42,
            1234,
        )
        .unwrap();
        assert_eq!(projection.owner_telegram_id, 42);
        assert_eq!(projection.chat_id, 1234);
    }
}
