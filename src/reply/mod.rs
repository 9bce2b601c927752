//! Reply formatting.
//!
//! Renders lookup results and errors in the two shapes the chat transport
//! needs: a chat message and an inline-query article (title, one-line
//! description, full text). Dynamic content is always plain text; only the
//! static `/start` and `/help` texts use Markdown.

mod texts;

use std::net::IpAddr;

use crate::error_handling::LookupError;
use crate::models::{InlineArticle, LookupResult, MessageReply, Rendered};
use crate::resolvers::ResolverDirectory;
use crate::utils::sanitize_and_truncate_error_message;

pub use texts::*;

/// Id of the single article in an inline answer.
const ARTICLE_ID: &str = "dns-result";

pub fn start_message() -> MessageReply {
    MessageReply::markdown(START_TEXT)
}

pub fn help_message() -> MessageReply {
    MessageReply::markdown(HELP_TEXT)
}

pub fn unknown_command_message() -> MessageReply {
    MessageReply::plain(UNKNOWN_COMMAND_TEXT)
}

/// Lists resolver names in directory order, one per line.
pub fn resolver_list_message(directory: &ResolverDirectory) -> MessageReply {
    let mut text = String::from("Available resolvers:\n");
    for name in directory.names() {
        text.push_str("- ");
        text.push_str(name);
        text.push('\n');
    }
    MessageReply::plain(text)
}

fn article(title: String, description: String, message_text: String) -> InlineArticle {
    InlineArticle {
        id: ARTICLE_ID.to_string(),
        title,
        description,
        message_text,
    }
}

fn join(items: &[String]) -> String {
    items.join(", ")
}

/// Renders a successful lookup.
pub fn format_success(result: &LookupResult) -> Rendered {
    match result {
        LookupResult::Forward {
            target,
            resolver_name,
            resolver_address,
            addresses,
        } => {
            let ips = join(addresses);
            let message = format!(
                "Domain: {target}\nResolver: {resolver_name} ({resolver_address})\nIP Addresses: {ips}"
            );
            let article = article(
                format!("DNS Lookup for {target}"),
                format!("Resolver: {resolver_name} ({resolver_address})\nIPs: {ips}"),
                format!("Domain: {target}\nResolver: {resolver_name} ({resolver_address})\nIPs: {ips}"),
            );
            Rendered {
                message: MessageReply::plain(message),
                article,
            }
        }
        LookupResult::Reverse { target, hostnames } => format_reverse(target, hostnames),
    }
}

fn format_reverse(target: &IpAddr, hostnames: &[String]) -> Rendered {
    let names = hostnames.join(", ");
    let text = format!("IP: {target}\nHostnames: {names}");
    Rendered {
        message: MessageReply::plain(text.clone()),
        article: article(
            format!("Reverse Lookup for {target}"),
            format!("Hostnames: {names}"),
            text,
        ),
    }
}

/// Renders a lookup error. The directory supplies the resolver names listed
/// in the inline unknown-resolver article.
pub fn format_error(error: &LookupError, directory: &ResolverDirectory) -> Rendered {
    match error {
        LookupError::Usage => Rendered {
            message: MessageReply::plain(USAGE_TEXT),
            article: article(
                "Usage".to_string(),
                INLINE_USAGE_DESCRIPTION.to_string(),
                USAGE_TEXT.to_string(),
            ),
        },
        LookupError::InvalidFormat { .. } => Rendered {
            message: MessageReply::plain(INVALID_FORMAT_TEXT),
            article: article(
                "Invalid Domain".to_string(),
                INLINE_INVALID_FORMAT_DESCRIPTION.to_string(),
                INLINE_INVALID_FORMAT_TEXT.to_string(),
            ),
        },
        LookupError::UnknownResolver { .. } => {
            let names: Vec<&str> = directory.names().collect();
            Rendered {
                message: MessageReply::plain(UNKNOWN_RESOLVER_TEXT),
                article: article(
                    "Unknown Resolver".to_string(),
                    format!("Available resolvers: {}", names.join(", ")),
                    INLINE_UNKNOWN_RESOLVER_TEXT.to_string(),
                ),
            }
        }
        LookupError::Dns { target, source } => {
            let cause = sanitize_and_truncate_error_message(&source.to_string());
            let text = format!("Failed to resolve {target}: {cause}");
            Rendered {
                message: MessageReply::plain(text.clone()),
                article: article(
                    "DNS Lookup Failed".to_string(),
                    format!("Failed to resolve {target}"),
                    text,
                ),
            }
        }
    }
}
