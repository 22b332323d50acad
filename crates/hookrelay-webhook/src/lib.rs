//! # HookRelay Webhook
//!
//! Everything between a command name and a display string: the route table,
//! URL derivation from the configured base URL, the HTTP transport, and
//! normalization of the loosely-typed JSON the n8n workflows return.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod response;
pub mod routes;
pub mod transport;

pub use response::*;
pub use routes::*;
pub use transport::*;
