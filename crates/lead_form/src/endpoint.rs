//! Lead-intake endpoint resolution.
//!
//! The base URL is read from the build environment once and exposed as an immutable value.

use std::{fmt, sync::OnceLock};

/// Path of the lead-intake route, appended to the configured base URL.
pub const LEAD_INTAKE_PATH: &str = "/api/leads/";
/// Build-time environment variable carrying the API base URL.
pub const API_BASE_URL_ENV: &str = "LEAD_API_BASE_URL";

static CONFIGURED_ENDPOINT: OnceLock<LeadEndpoint> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved URL that leads are posted to.
pub struct LeadEndpoint(String);

impl LeadEndpoint {
    /// Resolves the endpoint from an optional base URL.
    ///
    /// The base is trimmed and one trailing `/` is removed. An absent or blank base yields the
    /// relative [`LEAD_INTAKE_PATH`].
    pub fn from_base(base: Option<&str>) -> Self {
        let base = base.map(str::trim).unwrap_or_default();
        let base = base.strip_suffix('/').unwrap_or(base);
        if base.is_empty() {
            Self(LEAD_INTAKE_PATH.to_string())
        } else {
            Self(format!("{base}{LEAD_INTAKE_PATH}"))
        }
    }

    /// Returns the endpoint configured at build time through [`API_BASE_URL_ENV`].
    pub fn configured() -> &'static LeadEndpoint {
        CONFIGURED_ENDPOINT.get_or_init(|| Self::from_base(option_env!("LEAD_API_BASE_URL")))
    }

    /// Returns the endpoint URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
