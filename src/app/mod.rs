//! Main application modules.
//!
//! This module provides the long-poll loop, shutdown handling, and statistics
//! printing used by [`run_bot`](crate::run_bot).

pub mod poll;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use poll::{poll_updates, PollContext};
pub use shutdown::{cancel_on_ctrl_c, shutdown_gracefully};
pub use statistics::print_bot_statistics;
