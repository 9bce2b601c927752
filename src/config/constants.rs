//! Configuration constants.
//!
//! Timeouts, limits and other operational parameters shared by the bot.

use std::time::Duration;

/// Name of the resolver used when a request names none.
pub const DEFAULT_RESOLVER_NAME: &str = "Default";

/// Standard DNS port. Forward lookups are sent here over UDP.
pub const DNS_PORT: u16 = 53;

// Network operation timeouts
/// DNS query timeout in seconds.
/// Reference value of the original deployment's dial timeout. A single attempt is
/// made per lookup, so this is also the upper bound on how long a user waits.
pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 5;
/// Long-poll window passed to `getUpdates`, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 10;
/// Extra time granted to the HTTP request on top of the long-poll window
/// before reqwest gives up on a `getUpdates` call.
pub const POLL_HTTP_GRACE_SECS: u64 = 10;
/// Timeout for ordinary Bot API calls (`sendMessage`, `answerInlineQuery`, `getMe`).
pub const API_REQUEST_TIMEOUT_SECS: u64 = 15;
/// Pause after a failed `getUpdates` call before polling again.
pub const POLL_ERROR_BACKOFF: Duration = Duration::from_secs(3);
/// Time in-flight handlers get to deliver replies after shutdown is requested.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Base URL of the Bot API.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Seconds Telegram may cache inline results. Zero: answers are live lookups.
pub const INLINE_CACHE_TIME_SECS: u32 = 0;

// Error message size limits
/// Maximum error cause length in characters shown to users.
/// Resolver errors can embed whole response dumps; anything longer is truncated.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;
