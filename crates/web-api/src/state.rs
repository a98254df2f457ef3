use std::sync::Arc;

use application::{CardService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub card_service: Arc<CardService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(card_service: Arc<CardService>, user_service: Arc<UserService>) -> Self {
        Self {
            card_service,
            user_service,
        }
    }
}
