//! 用户实体定义

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::UserId;

/// 应用用户实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一ID
    pub id: UserId,
    /// 昵称（必填，去除首尾空白）
    pub nickname: String,
}

impl User {
    /// 创建新用户，昵称去除首尾空白后不能为空
    pub fn new(id: UserId, nickname: impl Into<String>) -> DomainResult<Self> {
        let nickname = nickname.into().trim().to_owned();
        if nickname.is_empty() {
            return Err(DomainError::EmptyNickname);
        }
        Ok(Self { id, nickname })
    }

    /// 更新昵称
    pub fn rename(&mut self, nickname: impl Into<String>) -> DomainResult<()> {
        let nickname = nickname.into().trim().to_owned();
        if nickname.is_empty() {
            return Err(DomainError::EmptyNickname);
        }
        self.nickname = nickname;
        Ok(())
    }
}
