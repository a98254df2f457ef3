//! Telegram 上下文服务
//!
//! 通过窄接口消费核心服务，保证核心模块对 Telegram 模块零依赖。

mod card_service;
mod core_api;
mod user_service;

#[cfg(test)]
mod user_service_tests;

pub use card_service::{TelegramCardService, TelegramCardServiceDependencies};
pub use core_api::{CoreCardApi, CoreUserApi};
pub use user_service::{TelegramUserService, TelegramUserServiceDependencies};
