//! 数据库工具与仓储实现

use domain::RepositoryError;
use sqlx::{Pool, Postgres};

pub mod repositories;

pub type DbPool = Pool<Postgres>;

pub struct Db;

impl Db {
    pub async fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, sqlx::Error> {
        sqlx::postgres::PgPoolOptions::new()
            .max_connections(max_size)
            .connect(database_url)
            .await
    }
}

/// sqlx 错误到仓储错误的统一映射：唯一约束冲突归为 `Conflict`，
/// 其余记录日志后归为 `Storage`。
pub(crate) fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => RepositoryError::Conflict,
        _ => {
            tracing::warn!(error = %err, "database operation failed");
            RepositoryError::storage(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_sqlx_err_wraps_storage_failures() {
        let mapped = map_sqlx_err(sqlx::Error::RowNotFound);
        match mapped {
            RepositoryError::Storage { message } => assert!(!message.is_empty()),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_map_sqlx_err_pool_timeout_is_storage() {
        assert!(matches!(
            map_sqlx_err(sqlx::Error::PoolTimedOut),
            RepositoryError::Storage { .. }
        ));
    }
}
