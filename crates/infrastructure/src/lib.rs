//! 基础设施层：PostgreSQL 仓储实现与连接池管理

pub mod db;

pub use db::repositories::{
    PostgresCardRepository, PostgresTelegramCardRepository, PostgresTelegramUserRepository,
    PostgresUserRepository,
};
pub use db::{Db, DbPool};
