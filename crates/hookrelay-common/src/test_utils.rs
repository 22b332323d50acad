//! Test utilities and shared test helpers for HookRelay.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::io;
use std::sync::{Arc, Mutex, Once};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Collects formatted log output so tests can assert on what was logged.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a subscriber writing into this capture for the current thread.
    /// Events are captured until the returned guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let sink = self.clone();
        let subscriber = fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Everything logged so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|buffer| String::from_utf8_lossy(&buffer).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Discord-related test fixtures.
pub mod discord_fixtures {
    use crate::{ApplicationId, GuildId};

    /// A syntactically plausible bot token.
    pub const TEST_TOKEN: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4.GabcDe.test-token-signature";

    /// Create a test application ID.
    pub fn test_application_id() -> ApplicationId {
        ApplicationId(112233445566778899)
    }

    /// Create a test guild ID.
    pub fn test_guild_id() -> GuildId {
        GuildId(998877665544332211)
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid bot configuration as TOML.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[discord]
token = "MTIzNDU2Nzg5MDEyMzQ1Njc4.GabcDe.test-token-signature"

[webhook]
base_url = "https://example.com/webhook"
"#
    }

    /// A full configuration as TOML, including registration ids and logging.
    pub fn full_config_toml() -> &'static str {
        concat!(
            "[discord]\n",
            "token = \"MTIzNDU2Nzg5MDEyMzQ1Njc4.GabcDe.test-token-signature\"\n",
            "application_id = 112233445566778899\n",
            "guild_id = 998877665544332211\n",
            "\n",
            "[webhook]\n",
            "base_url = \"https://n8n.example.com/webhook/verify-data\"\n",
            "\n",
            "[logging]\n",
            "level = \"debug\"\n",
            "format = \"json\"\n",
            "include_targets = false\n"
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating lowercase, hyphenated route segments.
    pub fn route_segment_strategy() -> impl Strategy<Value = String> {
        r"[a-z][a-z0-9-]{0,30}".prop_map(|s| s.to_string())
    }

    /// Strategy for generating webhook host names.
    pub fn host_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{1,12}(\.[a-z]{2,8}){1,2}".prop_map(|s| s.to_string())
    }
}
