//! # HookRelay Bot
//!
//! Discord slash-command relay for n8n webhooks.
//!
//! This crate owns the process lifecycle: the gateway client that serves
//! commands, and the one-shot registrar that publishes them to a guild.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod registrar;

pub use bot::*;
pub use error::*;
pub use registrar::*;
