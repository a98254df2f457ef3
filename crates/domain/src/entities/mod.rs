mod card;
mod user;

pub use card::Card;
pub use user::User;
