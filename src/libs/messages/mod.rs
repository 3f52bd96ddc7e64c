//! User-facing message catalogue and output macros.
//!
//! All text shown on the terminal or written to logs by the command-line
//! front end is defined once in [`Message`] and rendered through its
//! `Display` implementation. The `msg_*` macros route that text either to
//! `tracing` or to plain stdout/stderr, see [`macros::is_debug_mode`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
