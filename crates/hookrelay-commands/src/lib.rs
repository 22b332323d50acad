//! # HookRelay Commands
//!
//! Discord slash commands using the Poise framework for HookRelay.
//!
//! Every command in the route table is served by the same handler: defer,
//! call the command's webhook, edit the deferred reply with the result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod framework;
pub mod relay;
pub mod reply;
pub mod webhook;

pub use framework::*;
pub use relay::*;
pub use reply::*;
