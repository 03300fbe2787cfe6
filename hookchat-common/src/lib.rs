//! Hookchat Common - Shared types and logic for the hookchat webhook relay.
//!
//! This crate provides:
//! - The message relay (URL validation, webhook POST, response extraction)
//! - Session types for the rolling conversation history
//! - Configuration types and loading
//! - Error types and the error-to-string boundary mapping
//! - Logging setup

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod relay;
pub mod session;

pub use config::Config;
pub use error::{RelayError, ValidationError};
pub use relay::{test_connection, validate_url, Relay, HISTORY_WINDOW};
pub use session::{ConversationTurn, Session};
