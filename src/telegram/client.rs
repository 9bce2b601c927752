//! Bot API client.
//!
//! A thin JSON-over-HTTPS client for the handful of methods the bot needs.
//! Every call is a POST to `{api_url}/bot{token}/{method}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{
    AnswerInlineQueryParams, ApiResponse, GetUpdatesParams, InlineQueryResultArticle,
    SendMessageParams, Update, User,
};
use super::{ChatTransport, UpdateSource};
use crate::config::{API_REQUEST_TIMEOUT_SECS, INLINE_CACHE_TIME_SECS, POLL_HTTP_GRACE_SECS};
use crate::error_handling::TelegramError;
use crate::models::{InlineArticle, MessageReply};

/// Update kinds requested from `getUpdates`.
const ALLOWED_UPDATES: &[&str] = &["message", "inline_query"];

pub struct BotApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BotApiClient {
    pub fn new(client: reqwest::Client, api_url: &str, token: &str) -> Self {
        Self {
            client,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        }
    }

    async fn call<P, R>(&self, method: &str, params: &P, timeout: Duration) -> Result<R, TelegramError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        // The API answers with a JSON envelope on 4xx too, so the status is
        // not checked separately.
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .timeout(timeout)
            .json(params)
            .send()
            .await?;
        let body: ApiResponse<R> = response.json().await?;
        into_result(body)
    }

    /// Returns the bot's own user. Fails on an invalid token.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call(
            "getMe",
            &serde_json::Map::new(),
            Duration::from_secs(API_REQUEST_TIMEOUT_SECS),
        )
        .await
    }
}

/// Unwraps the response envelope.
fn into_result<R>(body: ApiResponse<R>) -> Result<R, TelegramError> {
    match (body.ok, body.result) {
        (true, Some(result)) => Ok(result),
        (true, None) => Err(TelegramError::Api {
            code: 0,
            description: "response has no result".to_string(),
        }),
        (false, _) => Err(TelegramError::Api {
            code: body.error_code.unwrap_or(0),
            description: body.description.unwrap_or_default(),
        }),
    }
}

#[async_trait]
impl UpdateSource for BotApiClient {
    async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout_secs,
            allowed_updates: ALLOWED_UPDATES,
        };
        self.call(
            "getUpdates",
            &params,
            Duration::from_secs(timeout_secs + POLL_HTTP_GRACE_SECS),
        )
        .await
    }
}

#[async_trait]
impl ChatTransport for BotApiClient {
    async fn send_message(&self, chat_id: i64, reply: &MessageReply) -> Result<(), TelegramError> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &SendMessageParams::new(chat_id, reply),
                Duration::from_secs(API_REQUEST_TIMEOUT_SECS),
            )
            .await?;
        Ok(())
    }

    async fn answer_inline_query(
        &self,
        query_id: &str,
        articles: &[InlineArticle],
    ) -> Result<(), TelegramError> {
        let params = AnswerInlineQueryParams {
            inline_query_id: query_id,
            results: articles.iter().map(InlineQueryResultArticle::from).collect(),
            cache_time: INLINE_CACHE_TIME_SECS,
        };
        let _: bool = self
            .call(
                "answerInlineQuery",
                &params,
                Duration::from_secs(API_REQUEST_TIMEOUT_SECS),
            )
            .await?;
        Ok(())
    }
}
