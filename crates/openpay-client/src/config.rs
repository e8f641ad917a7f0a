//! Client configuration.

/// Sandbox API base URL.
pub const SANDBOX_API_URL: &str = "https://sandbox-api.openpay.mx/";

/// Production API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.openpay.mx/";

/// Target environment of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Test environment, no real money moves.
    Sandbox,
    /// Live environment.
    Production,
}

impl Environment {
    /// Base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_API_URL,
            Self::Production => PRODUCTION_API_URL,
        }
    }
}

/// Client options. Unset options fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per-call timeout in seconds (default: 30). Must be non-zero.
    pub timeout_seconds: u64,

    /// How long idle connections stay pooled, in seconds (default: 600).
    /// Must be non-zero.
    pub keep_alive_seconds: u64,

    /// Ceiling of pooled connections per host (default: 100).
    pub max_connections: usize,

    /// API version path segment (default: "v1").
    pub api_version: String,

    /// User agent reported to the service. Omitted when empty (default).
    pub user_agent: String,

    /// Use the production environment instead of the sandbox (default: false).
    pub use_production: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            keep_alive_seconds: 600,
            max_connections: 100,
            api_version: "v1".to_string(),
            user_agent: String::new(),
            use_production: false,
        }
    }
}

impl ClientOptions {
    /// Load options from environment variables, using the default for each
    /// variable that is unset or unparsable. A zero timeout or keep-alive
    /// also falls back to the default.
    ///
    /// Recognized variables: `OPENPAY_TIMEOUT_SECONDS`,
    /// `OPENPAY_KEEP_ALIVE_SECONDS`, `OPENPAY_MAX_CONNECTIONS`,
    /// `OPENPAY_API_VERSION`, `OPENPAY_USER_AGENT`, `OPENPAY_PRODUCTION`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            timeout_seconds: std::env::var("OPENPAY_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.timeout_seconds),
            keep_alive_seconds: std::env::var("OPENPAY_KEEP_ALIVE_SECONDS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.keep_alive_seconds),
            max_connections: std::env::var("OPENPAY_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections),
            api_version: std::env::var("OPENPAY_API_VERSION")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.api_version),
            user_agent: std::env::var("OPENPAY_USER_AGENT").unwrap_or(defaults.user_agent),
            use_production: std::env::var("OPENPAY_PRODUCTION")
                .ok()
                .map_or(defaults.use_production, |s| {
                    matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
                }),
        }
    }

    /// Environment selected by [`Self::use_production`].
    #[must_use]
    pub const fn environment(&self) -> Environment {
        if self.use_production {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }

    /// Options with a user agent.
    #[must_use]
    pub fn with_user_agent(name: impl Into<String>) -> Self {
        Self {
            user_agent: name.into(),
            ..Self::default()
        }
    }
}
