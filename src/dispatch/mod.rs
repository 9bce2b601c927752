//! Command and inline-query dispatch.
//!
//! Each inbound update is handled on its own, with no state carried between
//! events. Message commands map to handlers through [`Command`]; inline queries
//! share the lookup path but render as articles. All [`LookupError`]s are
//! recovered here and turned into replies. A failed reply delivery is logged
//! and counted, never propagated.

mod command;

use std::net::IpAddr;
use std::sync::Arc;

use log::{debug, error, warn};

use crate::dns::DnsLookup;
use crate::error_handling::{BotStats, EventType, LookupError, LookupType};
use crate::input::{self, InlineRequest, ParsedInput, Target};
use crate::models::{InlineArticle, LookupResult, MessageReply};
use crate::reply;
use crate::resolvers::{ResolverDirectory, ResolverEntry};
use crate::telegram::{ChatTransport, InlineQuery, Message, Update};

pub use command::{parse_command, Command, CommandText};

/// Routes inbound events to handlers and performs lookups.
pub struct Dispatcher {
    directory: Arc<ResolverDirectory>,
    dns: Arc<dyn DnsLookup>,
    stats: Arc<BotStats>,
    bot_username: Option<String>,
}

impl Dispatcher {
    pub fn new(
        directory: Arc<ResolverDirectory>,
        dns: Arc<dyn DnsLookup>,
        stats: Arc<BotStats>,
    ) -> Self {
        Self {
            directory,
            dns,
            stats,
            bot_username: None,
        }
    }

    /// Sets the bot's own username, used to accept `/command@username`.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn directory(&self) -> &ResolverDirectory {
        &self.directory
    }

    pub fn stats(&self) -> &BotStats {
        &self.stats
    }

    /// Handles one update and delivers the reply through `transport`.
    pub async fn handle_update(&self, update: Update, transport: &dyn ChatTransport) {
        if let Some(message) = update.message {
            self.handle_message(&message, transport).await;
        } else if let Some(query) = update.inline_query {
            self.handle_inline_query(&query, transport).await;
        } else {
            debug!("Ignoring update {} with no message or inline query", update.update_id);
        }
    }

    async fn handle_message(&self, message: &Message, transport: &dyn ChatTransport) {
        let Some(text) = message.text.as_deref() else {
            return;
        };
        let Some(reply) = self.reply_for_text(text, message.chat.is_private()).await else {
            return;
        };
        if let Err(e) = transport.send_message(message.chat.id, &reply).await {
            self.stats.increment_delivery_failure();
            error!("Failed to send reply to chat {}: {}", message.chat.id, e);
        }
    }

    async fn handle_inline_query(&self, query: &InlineQuery, transport: &dyn ChatTransport) {
        let articles = self.answer_for_inline(&query.query).await;
        if let Err(e) = transport.answer_inline_query(&query.id, &articles).await {
            self.stats.increment_delivery_failure();
            error!("Failed to answer inline query {}: {}", query.id, e);
        }
    }

    /// Computes the reply to a chat message, or `None` if the bot should stay
    /// silent (plain text, commands for other bots, unknown commands in groups).
    pub async fn reply_for_text(&self, text: &str, private_chat: bool) -> Option<MessageReply> {
        let parsed = parse_command(text, self.bot_username.as_deref())?;
        match parsed.command {
            Some(command) => Some(self.handle_command(command, parsed.payload).await),
            None if private_chat || parsed.mentioned => {
                self.stats.increment_event(EventType::UnknownCommand);
                Some(reply::unknown_command_message())
            }
            None => None,
        }
    }

    /// Command table: every command maps to exactly one handler.
    pub async fn handle_command(&self, command: Command, payload: &str) -> MessageReply {
        self.stats.increment_event(command.event_type());
        debug!("Handling /{} {:?}", command.as_ref(), payload);
        match command {
            Command::Start => reply::start_message(),
            Command::Help => reply::help_message(),
            Command::Resolver => reply::resolver_list_message(&self.directory),
            Command::Lookup => {
                let outcome = self.lookup(payload).await;
                self.render(outcome).message
            }
        }
    }

    /// Computes the inline answer for `query`. Always returns one article.
    pub async fn answer_for_inline(&self, query: &str) -> Vec<InlineArticle> {
        self.stats.increment_event(EventType::InlineQuery);
        debug!("Handling inline query {:?}", query);
        let outcome = self.inline_lookup(query).await;
        vec![self.render(outcome).article]
    }

    fn render(&self, outcome: Result<LookupResult, LookupError>) -> crate::models::Rendered {
        match outcome {
            Ok(result) => reply::format_success(&result),
            Err(e) => {
                self.stats.increment_error(e.kind());
                reply::format_error(&e, &self.directory)
            }
        }
    }

    /// Runs `/lookup` arguments: IP literals take the reverse path, domains
    /// the forward path through the named resolver.
    pub async fn lookup(&self, payload: &str) -> Result<LookupResult, LookupError> {
        let parsed = input::parse(payload)?;
        self.lookup_parsed(&parsed).await
    }

    /// Runs an inline query. `lookup <ip>` selects the reverse path
    /// explicitly; otherwise the query behaves like `/lookup`.
    pub async fn inline_lookup(&self, query: &str) -> Result<LookupResult, LookupError> {
        match input::parse_inline(query)? {
            InlineRequest::Reverse { target } => match Target::parse(&target)? {
                Target::IpLiteral(ip) => self.reverse(ip).await,
                Target::Domain(_) => Err(LookupError::InvalidFormat { target }),
            },
            InlineRequest::Lookup(parsed) => self.lookup_parsed(&parsed).await,
        }
    }

    async fn lookup_parsed(&self, parsed: &ParsedInput) -> Result<LookupResult, LookupError> {
        let target = parsed.classify_target()?;
        let entry = self.resolver(&parsed.resolver_name)?;
        match target {
            Target::IpLiteral(ip) => self.reverse(ip).await,
            Target::Domain(domain) => self.forward(domain, entry).await,
        }
    }

    fn resolver(&self, name: &str) -> Result<&ResolverEntry, LookupError> {
        self.directory
            .get(name)
            .ok_or_else(|| LookupError::UnknownResolver {
                name: name.to_string(),
            })
    }

    async fn forward(
        &self,
        domain: String,
        entry: &ResolverEntry,
    ) -> Result<LookupResult, LookupError> {
        match self.dns.resolve_domain(&domain, entry.address).await {
            Ok(addresses) => {
                self.stats.increment_lookup(LookupType::Forward);
                Ok(LookupResult::Forward {
                    target: domain,
                    resolver_name: entry.name.clone(),
                    resolver_address: entry.address,
                    addresses,
                })
            }
            Err(source) => {
                warn!(
                    "Failed to resolve {} via {} ({}): {}",
                    domain, entry.name, entry.address, source
                );
                Err(LookupError::Dns {
                    target: domain,
                    source,
                })
            }
        }
    }

    async fn reverse(&self, ip: IpAddr) -> Result<LookupResult, LookupError> {
        match self.dns.resolve_ptr(ip).await {
            Ok(hostnames) => {
                self.stats.increment_lookup(LookupType::Reverse);
                Ok(LookupResult::Reverse {
                    target: ip,
                    hostnames,
                })
            }
            Err(source) => {
                warn!("Failed reverse lookup for {}: {}", ip, source);
                Err(LookupError::Dns {
                    target: ip.to_string(),
                    source,
                })
            }
        }
    }
}
