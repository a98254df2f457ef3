//! Telegram 用户投影

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{TelegramUserId, UserId};

/// 核心用户在 Telegram 上下文中的投影，按外部数字标识唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramUser {
    /// 投影自身ID
    pub id: TelegramUserId,
    /// 对应的核心用户ID
    pub core_user_id: UserId,
    /// Telegram 数字标识（非零，外部提供，唯一）
    pub telegram_id: i64,
    /// 显示名称
    pub name: String,
    /// Telegram 用户名（可以为空）
    pub username: String,
}

impl TelegramUser {
    pub fn new(
        id: TelegramUserId,
        core_user_id: UserId,
        telegram_id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
    ) -> DomainResult<Self> {
        let user = Self {
            id,
            core_user_id,
            telegram_id,
            name: name.into(),
            username: username.into(),
        };
        user.validate()?;
        Ok(user)
    }

    /// 校验必填字段
    pub fn validate(&self) -> DomainResult<()> {
        if self.telegram_id == 0 {
            return Err(DomainError::EmptyTelegramId);
        }
        Ok(())
    }

    /// 同步显示名称与用户名；返回是否发生了变化
    pub fn sync_identity(&mut self, name: &str, username: &str) -> bool {
        if self.name == name && self.username == username {
            return false;
        }
        self.name = name.to_owned();
        self.username = username.to_owned();
        true
    }
}
