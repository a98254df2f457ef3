//! Telegram 上下文实体
//!
//! 投影实体通过核心ID引用核心实体，并携带 Telegram 特有的元数据。

mod card;
mod user;

pub use card::TelegramCard;
pub use user::TelegramUser;
