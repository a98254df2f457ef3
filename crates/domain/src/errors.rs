//! 领域模型错误定义
//!
//! 校验错误与未找到错误属于业务可预期的错误；存储错误携带底层上下文。

use thiserror::Error;

/// 领域错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 卡片正面内容为空
    #[error("card front must not be empty")]
    EmptyFront,

    /// 用户昵称为空
    #[error("user nickname must not be empty")]
    EmptyNickname,

    /// Telegram 数字标识缺失
    #[error("telegram id must not be zero")]
    EmptyTelegramId,

    /// 卡片不存在
    #[error("card not found")]
    CardNotFound,

    /// 用户不存在
    #[error("user not found")]
    UserNotFound,

    /// Telegram 卡片投影不存在
    #[error("telegram card projection not found")]
    TelegramCardNotFound,

    /// Telegram 用户投影不存在
    #[error("telegram user projection not found")]
    TelegramUserNotFound,
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 记录不存在
    #[error("record not found")]
    NotFound,

    /// 记录已存在
    #[error("record already exists")]
    Conflict,

    /// 存储层故障
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    /// 创建存储错误
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// 仓储层结果类型
pub type RepositoryResult<T> = Result<T, RepositoryError>;
