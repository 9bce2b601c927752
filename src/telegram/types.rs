//! Bot API wire types.
//!
//! Only the fields the bot reads or writes are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

use crate::models::{InlineArticle, MessageReply};

/// Envelope around every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub inline_query: Option<InlineQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// "private", "group", "supergroup" or "channel".
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.kind == "private"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub query: String,
}

/// Text markup mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    Markdown,
}

#[derive(Debug, Serialize)]
pub struct GetUpdatesParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: &'a [&'a str],
}

#[derive(Debug, Serialize)]
pub struct SendMessageParams<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: bool,
}

impl<'a> SendMessageParams<'a> {
    pub fn new(chat_id: i64, reply: &'a MessageReply) -> Self {
        Self {
            chat_id,
            text: &reply.text,
            parse_mode: reply.parse_mode,
            disable_web_page_preview: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InputTextMessageContent<'a> {
    pub message_text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct InlineQueryResultArticle<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub input_message_content: InputTextMessageContent<'a>,
}

impl<'a> From<&'a InlineArticle> for InlineQueryResultArticle<'a> {
    fn from(article: &'a InlineArticle) -> Self {
        Self {
            kind: "article",
            id: &article.id,
            title: &article.title,
            description: &article.description,
            input_message_content: InputTextMessageContent {
                message_text: &article.message_text,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerInlineQueryParams<'a> {
    pub inline_query_id: &'a str,
    pub results: Vec<InlineQueryResultArticle<'a>>,
    pub cache_time: u32,
}
