//! 卡片实体定义
//!
//! 闪卡的核心信息与必填字段校验。

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CardId, Timestamp, UserId};

/// 闪卡实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// 卡片唯一ID
    pub id: CardId,
    /// 正面内容（必填）
    pub front: String,
    /// 背面内容（可以为空）
    pub back: String,
    /// 归属用户（可选）
    pub owner_id: Option<UserId>,
    /// 创建时间
    pub created_at: Timestamp,
    /// 更新时间
    pub updated_at: Timestamp,
}

impl Card {
    /// 创建新卡片，创建时间与更新时间一致
    pub fn new(
        id: CardId,
        front: impl Into<String>,
        back: impl Into<String>,
        owner_id: Option<UserId>,
        now: Timestamp,
    ) -> DomainResult<Self> {
        let card = Self {
            id,
            front: front.into(),
            back: back.into(),
            owner_id,
            created_at: now,
            updated_at: now,
        };
        card.validate()?;
        Ok(card)
    }

    /// 重写正反面内容并刷新更新时间；归属与创建时间保持不变
    pub fn update_content(
        &mut self,
        front: impl Into<String>,
        back: impl Into<String>,
        now: Timestamp,
    ) -> DomainResult<()> {
        let front = front.into();
        let back = back.into();
        if front.trim().is_empty() {
            return Err(DomainError::EmptyFront);
        }
        self.front = front;
        self.back = back;
        self.updated_at = now;
        Ok(())
    }

    /// 校验必填字段
    pub fn validate(&self) -> DomainResult<()> {
        if self.front.trim().is_empty() {
            return Err(DomainError::EmptyFront);
        }
        Ok(())
    }
}
