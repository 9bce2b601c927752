//! Lookup input parsing and target classification.
//!
//! Turns the free text after `/lookup` (or an inline query) into a resolver
//! name and a target, then classifies the target exactly once:
//!
//! - an IP literal (IPv4 or IPv6, strict parse), or
//! - a domain name: one or more dot-separated `[A-Za-z0-9-]+` labels followed
//!   by a final alphabetic label of at least two characters, or
//! - invalid.
//!
//! The domain grammar deliberately rejects single-label hostnames and most
//! internationalized names.

use std::fmt;
use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_RESOLVER_NAME;
use crate::error_handling::LookupError;

const DOMAIN_PATTERN: &str = r"^(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$";

/// Inline-query prefix that selects the reverse-lookup path.
pub const INLINE_REVERSE_KEYWORD: &str = "lookup";

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DOMAIN_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in DOMAIN_RE: {}. This is a programming error.",
            DOMAIN_PATTERN, e
        )
    })
});

/// Resolver name and raw target extracted from user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub resolver_name: String,
    pub target: String,
}

impl ParsedInput {
    /// Classifies the target. See [`Target::parse`].
    pub fn classify_target(&self) -> Result<Target, LookupError> {
        Target::parse(&self.target)
    }
}

/// What an inline query asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineRequest {
    /// `lookup <target>`: reverse lookup requested explicitly.
    Reverse { target: String },
    /// `[resolver] target`: resolved like a `/lookup` message.
    Lookup(ParsedInput),
}

/// Classification of a target without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Domain,
    IpLiteral,
    Invalid,
}

/// A classified lookup target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Domain(String),
    IpLiteral(IpAddr),
}

impl Target {
    /// Classifies `raw`, trying a strict IP parse first.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidFormat` when `raw` is neither an IP literal
    /// nor a domain name.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        if let Ok(ip) = raw.parse::<IpAddr>() {
            return Ok(Target::IpLiteral(ip));
        }
        if DOMAIN_RE.is_match(raw) {
            return Ok(Target::Domain(raw.to_string()));
        }
        Err(LookupError::InvalidFormat {
            target: raw.to_string(),
        })
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Domain(_) => TargetKind::Domain,
            Target::IpLiteral(_) => TargetKind::IpLiteral,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Domain(d) => f.write_str(d),
            Target::IpLiteral(ip) => write!(f, "{ip}"),
        }
    }
}

/// Classifies a target string.
pub fn classify(target: &str) -> TargetKind {
    match Target::parse(target) {
        Ok(t) => t.kind(),
        Err(_) => TargetKind::Invalid,
    }
}

/// Returns true if `target` matches the domain grammar.
pub fn is_valid_domain(target: &str) -> bool {
    DOMAIN_RE.is_match(target)
}

/// Splits `/lookup` arguments on whitespace.
///
/// One token selects the `Default` resolver. With two or more, the first is the
/// resolver name and the second the target; further tokens are ignored.
///
/// # Errors
///
/// Returns `LookupError::Usage` when `raw` holds no tokens.
pub fn parse(raw: &str) -> Result<ParsedInput, LookupError> {
    let mut tokens = raw.split_whitespace();
    let first = tokens.next().ok_or(LookupError::Usage)?;
    let parsed = match tokens.next() {
        None => ParsedInput {
            resolver_name: DEFAULT_RESOLVER_NAME.to_string(),
            target: first.to_string(),
        },
        Some(second) => ParsedInput {
            resolver_name: first.to_string(),
            target: second.to_string(),
        },
    };
    Ok(parsed)
}

/// Splits inline query text into at most two parts on the first space.
///
/// The remainder after the first space is kept whole (trimmed), so a target
/// containing spaces is later rejected as invalid rather than truncated.
///
/// # Errors
///
/// Returns `LookupError::Usage` for blank queries and for a bare `lookup`.
pub fn parse_inline(raw: &str) -> Result<InlineRequest, LookupError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(LookupError::Usage);
    }
    let (head, rest) = match query.split_once(' ') {
        Some((head, rest)) => (head, Some(rest.trim())),
        None => (query, None),
    };
    if head == INLINE_REVERSE_KEYWORD {
        return match rest {
            Some(target) if !target.is_empty() => Ok(InlineRequest::Reverse {
                target: target.to_string(),
            }),
            _ => Err(LookupError::Usage),
        };
    }
    let parsed = match rest {
        None => ParsedInput {
            resolver_name: DEFAULT_RESOLVER_NAME.to_string(),
            target: head.to_string(),
        },
        Some(target) => ParsedInput {
            resolver_name: head.to_string(),
            target: target.to_string(),
        },
    };
    Ok(InlineRequest::Lookup(parsed))
}
