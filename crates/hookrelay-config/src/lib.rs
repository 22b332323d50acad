//! # HookRelay Config
//!
//! Type-safe configuration management for HookRelay.
//!
//! Configuration is layered: built-in defaults, an optional TOML file, a
//! `.env` file, and finally process environment variables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
