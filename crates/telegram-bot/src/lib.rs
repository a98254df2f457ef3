//! Telegram 机器人适配层。
//!
//! 把入站消息翻译成应用层调用：任意文本创建一张卡片，
//! 命令只支持 /start 与 /help。

mod dispatch;
pub mod messages;
mod runner;

pub use dispatch::{Sender, UpdateHandler};
pub use runner::run_polling;
