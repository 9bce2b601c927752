//! Chat transport.
//!
//! The dispatcher replies through the [`ChatTransport`] trait; [`BotApiClient`]
//! implements it over the Telegram Bot API, along with [`UpdateSource`] for
//! long polling and the `getMe` identity call used at startup.

mod client;
mod types;

use async_trait::async_trait;

use crate::error_handling::TelegramError;
use crate::models::{InlineArticle, MessageReply};

pub use client::BotApiClient;
pub use types::{Chat, InlineQuery, Message, ParseMode, Update, User};

/// Inbound half of the chat transport.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Waits up to `timeout_secs` for updates with ids at or above `offset`.
    async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError>;
}

/// Outbound half of the chat transport.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends `reply` to `chat_id`.
    async fn send_message(&self, chat_id: i64, reply: &MessageReply) -> Result<(), TelegramError>;

    /// Answers inline query `query_id` with `articles`.
    async fn answer_inline_query(
        &self,
        query_id: &str,
        articles: &[InlineArticle],
    ) -> Result<(), TelegramError>;
}
