// Shared test helpers: in-memory DNS and chat transport fakes, update builders.
//
// Used by the dispatch and polling tests so no test touches the network.

use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dns_lookup_bot::dns::DnsLookup;
use dns_lookup_bot::error_handling::{BotStats, DnsError, TelegramError};
use dns_lookup_bot::models::{InlineArticle, MessageReply};
use dns_lookup_bot::telegram::{ChatTransport, Update};
use dns_lookup_bot::{Dispatcher, ResolverDirectory};

/// A DNS call observed by [`FakeDns`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // Matched on by other test files
pub enum DnsCall {
    Forward(String, IpAddr),
    Reverse(IpAddr),
}

/// DNS fake with canned answers that records every call.
pub struct FakeDns {
    calls: Mutex<Vec<DnsCall>>,
    forward: Result<Vec<String>, DnsError>,
    reverse: Result<Vec<String>, DnsError>,
}

#[allow(dead_code)] // Used by other test files
impl FakeDns {
    pub fn answering(forward: &[&str], reverse: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            forward: Ok(forward.iter().map(|s| s.to_string()).collect()),
            reverse: Ok(reverse.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn failing(error: DnsError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            forward: Err(error.clone()),
            reverse: Err(error),
        }
    }

    pub fn calls(&self) -> Vec<DnsCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl DnsLookup for FakeDns {
    async fn resolve_domain(
        &self,
        domain: &str,
        resolver_address: IpAddr,
    ) -> Result<Vec<String>, DnsError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(DnsCall::Forward(domain.to_string(), resolver_address));
        self.forward.clone()
    }

    async fn resolve_ptr(&self, ip: IpAddr) -> Result<Vec<String>, DnsError> {
        self.calls.lock().expect("calls lock").push(DnsCall::Reverse(ip));
        self.reverse.clone()
    }
}

/// An outbound call observed by [`RecordingTransport`].
#[derive(Debug, Clone)]
#[allow(dead_code)] // Matched on by other test files
pub enum Sent {
    Message { chat_id: i64, reply: MessageReply },
    Inline { query_id: String, articles: Vec<InlineArticle> },
}

/// Chat transport fake that records outbound calls.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
}

#[allow(dead_code)] // Used by other test files
impl RecordingTransport {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().expect("sent lock").clone()
    }

    /// Texts of all sent chat messages, in order.
    pub fn message_texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Message { reply, .. } => Some(reply.text),
                Sent::Inline { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_message(&self, chat_id: i64, reply: &MessageReply) -> Result<(), TelegramError> {
        self.sent.lock().expect("sent lock").push(Sent::Message {
            chat_id,
            reply: reply.clone(),
        });
        Ok(())
    }

    async fn answer_inline_query(
        &self,
        query_id: &str,
        articles: &[InlineArticle],
    ) -> Result<(), TelegramError> {
        self.sent.lock().expect("sent lock").push(Sent::Inline {
            query_id: query_id.to_string(),
            articles: articles.to_vec(),
        });
        Ok(())
    }
}

/// Builds a dispatcher over the built-in directory.
#[allow(dead_code)] // Used by other test files
pub fn dispatcher_with(dns: Arc<FakeDns>) -> Dispatcher {
    Dispatcher::new(
        Arc::new(ResolverDirectory::builtin()),
        dns,
        Arc::new(BotStats::new()),
    )
    .with_bot_username(Some("DnsLookupBot".to_string()))
}

/// A text message update from a chat of `chat_type`.
#[allow(dead_code)] // Used by other test files
pub fn text_update(update_id: i64, chat_id: i64, chat_type: &str, text: &str) -> Update {
    serde_json::from_value(serde_json::json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "chat": { "id": chat_id, "type": chat_type },
            "from": { "id": 42, "is_bot": false, "first_name": "Test" },
            "text": text,
        }
    }))
    .expect("valid message update")
}

/// An inline query update.
#[allow(dead_code)] // Used by other test files
pub fn inline_update(update_id: i64, query_id: &str, query: &str) -> Update {
    serde_json::from_value(serde_json::json!({
        "update_id": update_id,
        "inline_query": {
            "id": query_id,
            "from": { "id": 42, "is_bot": false, "first_name": "Test" },
            "query": query,
            "offset": "",
        }
    }))
    .expect("valid inline update")
}
