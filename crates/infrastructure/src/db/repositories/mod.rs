//! PostgreSQL 仓储实现

mod card_repository_impl;
mod telegram_card_repository_impl;
mod telegram_user_repository_impl;
mod user_repository_impl;

pub use card_repository_impl::PostgresCardRepository;
pub use telegram_card_repository_impl::PostgresTelegramCardRepository;
pub use telegram_user_repository_impl::PostgresTelegramUserRepository;
pub use user_repository_impl::PostgresUserRepository;
