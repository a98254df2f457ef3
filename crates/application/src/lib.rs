//! 应用层：用例编排
//!
//! 核心服务（卡片、用户）与 Telegram 上下文服务，以及仓储端口定义。

pub mod clock;
pub mod error;
pub mod memory;
pub mod repository;
pub mod services;
pub mod telegram;

pub use clock::{Clock, SystemClock};
pub use error::ApplicationError;
pub use memory::{
    MemoryCardRepository, MemoryTelegramCardRepository, MemoryTelegramUserRepository,
    MemoryUserRepository,
};
pub use repository::{
    CardRepository, TelegramCardRepository, TelegramUserRepository, UserRepository,
};
pub use services::{
    CardService, CardServiceDependencies, CreateCardRequest, UpdateCardRequest, UserService,
    UserServiceDependencies,
};
pub use telegram::{
    TelegramCardService, TelegramCardServiceDependencies, TelegramUserService,
    TelegramUserServiceDependencies,
};
