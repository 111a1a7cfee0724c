//! Rendering and delivery of the ranked article list.
//!
//! # Submodules
//!
//! - [`digest`]: Renders the ranking into the plain-text briefing message
//! - [`telegram`]: Sends the message through the Telegram Bot API
//!
//! Delivery failures are reported to the caller; the digest text itself is
//! never altered by them.

pub mod digest;
pub mod telegram;
