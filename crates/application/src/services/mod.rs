mod card_service;
mod user_service;


pub use card_service::{
    CardService, CardServiceDependencies, CreateCardRequest, UpdateCardRequest,
};
pub use user_service::{UserService, UserServiceDependencies};
