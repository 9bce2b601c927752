//! Transient values passed between the dispatcher and the reply formatter.

use std::net::IpAddr;

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// Domain resolved to addresses through a named resolver.
    Forward {
        target: String,
        resolver_name: String,
        resolver_address: IpAddr,
        addresses: Vec<String>,
    },
    /// IP literal resolved to hostnames.
    Reverse {
        target: IpAddr,
        hostnames: Vec<String>,
    },
}

/// A reply to a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReply {
    pub text: String,
    /// Markup mode. `None` sends plain text, which is the only mode used for
    /// content that echoes user input or resolver output.
    pub parse_mode: Option<crate::telegram::ParseMode>,
}

impl MessageReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(crate::telegram::ParseMode::Markdown),
        }
    }
}

/// A single inline-query result article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Text posted to the chat when the user picks the article.
    pub message_text: String,
}

/// Both renderings of the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub message: MessageReply,
    pub article: InlineArticle,
}
