use std::sync::Arc;

use application::{TelegramCardService, TelegramUserService};

use crate::messages;

/// 入站消息的发送者身份
#[derive(Debug, Clone)]
pub struct Sender {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// 与传输无关的消息分发器：输入文本，输出待回复文案。
pub struct UpdateHandler {
    cards: Arc<TelegramCardService>,
    users: Arc<TelegramUserService>,
}

impl UpdateHandler {
    pub fn new(cards: Arc<TelegramCardService>, users: Arc<TelegramUserService>) -> Self {
        Self { cards, users }
    }

    /// 处理一条文本消息，返回要回复的文案；`None` 表示不回复。
    pub async fn handle_text(
        &self,
        chat_id: i64,
        sender: Option<&Sender>,
        text: &str,
    ) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        let trimmed = text.trim();
        if trimmed.starts_with('/') {
            return Some(self.handle_command(trimmed));
        }

        Some(self.handle_create_card(chat_id, sender, trimmed).await)
    }

    fn handle_command(&self, text: &str) -> String {
        match split_command(text) {
            "/start" | "/help" => messages::USAGE.to_string(),
            _ => messages::UNKNOWN_COMMAND.to_string(),
        }
    }

    async fn handle_create_card(
        &self,
        chat_id: i64,
        sender: Option<&Sender>,
        front: &str,
    ) -> String {
        if front.is_empty() {
            return messages::EMPTY_IGNORED.to_string();
        }

        let Some(sender) = sender else {
            return messages::UNKNOWN_COMMAND.to_string();
        };

        let name = format!("{} {}", sender.first_name, sender.last_name)
            .trim()
            .to_string();

        let (_, context_user) = match self
            .users
            .ensure_user(sender.id, &name, &sender.username)
            .await
        {
            Ok(pair) => pair,
            Err(err) => return messages::create_fail(err),
        };

        match self
            .cards
            .create_card(front.to_string(), String::new(), &context_user, chat_id)
            .await
        {
            Ok(card) => messages::create_ok(&card),
            Err(err) => messages::create_fail(err),
        }
    }
}

/// 提取命令词：截到第一个空白符，并剥离 `@botname` 后缀。
fn split_command(text: &str) -> &str {
    let command = text
        .split_whitespace()
        .next()
        .unwrap_or_default();
    match command.find('@') {
        Some(i) => &command[..i],
        None => command,
    }
}
