use std::sync::Arc;

use teloxide::prelude::*;

use crate::dispatch::{Sender, UpdateHandler};

/// 以长轮询方式运行机器人，直到进程收到 Ctrl-C。
pub async fn run_polling(token: &str, handler: Arc<UpdateHandler>) {
    let bot = Bot::new(token);

    let tree = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![handler])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_message(
    bot: Bot,
    handler: Arc<UpdateHandler>,
    msg: Message,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let sender = msg.from.as_ref().map(|user| Sender {
        id: user.id.0 as i64,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone().unwrap_or_default(),
        username: user.username.clone().unwrap_or_default(),
    });

    if let Some(reply) = handler.handle_text(msg.chat.id.0, sender.as_ref(), text).await {
        if let Err(err) = bot.send_message(msg.chat.id, reply).await {
            tracing::warn!(error = %err, "failed sending telegram reply");
        }
    }

    Ok(())
}
