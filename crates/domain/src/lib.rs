//! 闪卡系统核心领域模型
//!
//! 包含核心上下文（卡片、用户）与 Telegram 上下文（投影实体），
//! 以及相关的校验规则和错误类型。核心模块不依赖 Telegram 模块。

pub mod entities;
pub mod errors;
pub mod telegram;
pub mod value_objects;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use telegram::*;
pub use value_objects::*;
