//! Route table mapping slash commands to webhook URLs.

use hookrelay_common::{RelayError, Result, Visibility};
use url::Url;

/// Path segment that marks the start of an n8n production webhook path.
const WEBHOOK_SEGMENT: &str = "/webhook";

/// Reply shown when no usable webhook base URL is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Error: N8N_WEBHOOK_URL not configured";

/// Where a command's request goes, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// The configured base URL itself.
    Base,
    /// `<webhook root>/<segment>`.
    Path(&'static str),
}

/// One slash command and the webhook it relays to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRoute {
    /// Command name as registered with Discord.
    pub name: &'static str,
    /// Command description as registered with Discord.
    pub description: &'static str,
    /// Webhook the command calls.
    pub target: RouteTarget,
    /// Visibility of the deferred reply.
    pub visibility: Visibility,
    /// Reply when the webhook answers with a non-success status.
    pub status_failure: &'static str,
    /// Reply when the webhook cannot be reached or returns invalid JSON.
    pub transport_failure: &'static str,
}

/// `/verify-data`: the default webhook.
pub const VERIFY_DATA: CommandRoute = CommandRoute {
    name: "verify-data",
    description: "Verify ETL data counts via n8n webhook",
    target: RouteTarget::Base,
    visibility: Visibility::Ephemeral,
    status_failure: "Failed to fetch data from webhook",
    transport_failure: "Error connecting to webhook",
};

/// `/insurance-report`.
pub const INSURANCE_REPORT: CommandRoute = CommandRoute {
    name: "insurance-report",
    description: "Fetch the insurance report via n8n webhook",
    target: RouteTarget::Path("insurance-report"),
    visibility: Visibility::Public,
    status_failure: "Failed to fetch insurance report",
    transport_failure: "Error fetching insurance report",
};

/// `/top-insurers`.
pub const TOP_INSURERS: CommandRoute = CommandRoute {
    name: "top-insurers",
    description: "Show the top insurers via n8n webhook",
    target: RouteTarget::Path("top-insurers"),
    visibility: Visibility::Public,
    status_failure: "Failed to fetch top insurers",
    transport_failure: "Error fetching top insurers",
};

/// Every command the bot serves.
pub const ROUTES: &[CommandRoute] = &[VERIFY_DATA, INSURANCE_REPORT, TOP_INSURERS];

/// Looks up the route for a command name.
pub fn find_route(name: &str) -> Option<&'static CommandRoute> {
    ROUTES.iter().find(|route| route.name == name)
}

impl CommandRoute {
    /// Resolves the webhook URL for this route.
    ///
    /// An absent, blank or unparseable base URL is a configuration error.
    pub fn resolve(&self, base_url: Option<&str>) -> Result<Url> {
        let base = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| RelayError::config("N8N_WEBHOOK_URL is not set"))?;

        let raw = match self.target {
            RouteTarget::Base => base.to_string(),
            RouteTarget::Path(segment) => format!("{}/{segment}", webhook_root(base)),
        };

        let url = Url::parse(&raw)
            .map_err(|e| RelayError::config(format!("Invalid webhook URL {raw:?}: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(RelayError::config(format!(
                "Webhook URL must use http or https, got {scheme:?}"
            ))),
        }
    }
}

/// Strips the workflow-specific tail from a webhook URL.
///
/// Everything from the first `/webhook/` onwards is replaced by `/webhook`;
/// URLs without such a segment are used as-is, minus a trailing slash.
pub fn webhook_root(base: &str) -> &str {
    let marker = format!("{WEBHOOK_SEGMENT}/");
    match base.find(&marker) {
        Some(index) => &base[..index + WEBHOOK_SEGMENT.len()],
        None => base.trim_end_matches('/'),
    }
}
