//! Transport configuration
//!
//! Holds the static settings every call shares: base URL, API version
//! segment, timeout, credential forwarding, and the two independent
//! observability gates (request/response logging vs. response metrics
//! attachment). Construction never fails; bad values surface per call.

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "api/v1";

/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Static configuration for the shared HTTP client
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Backend origin, e.g. `https://admin.example.ec`
    pub base_url: String,
    /// Version segment appended to the base URL, e.g. `api/v1`
    pub api_version: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Forward cookies on cross-origin calls (session is cookie-based)
    pub forward_credentials: bool,
    /// Emit request/response log lines
    pub debug_logging: bool,
    /// Attach a timing-metrics record to successful responses
    pub attach_debug_metrics: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            forward_credentials: true,
            debug_logging: false,
            attach_debug_metrics: false,
        }
    }
}

impl TransportConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `CATASTRO_API_URL`, `CATASTRO_API_VERSION`,
    /// `CATASTRO_TIMEOUT_MS`, `CATASTRO_DEBUG_HTTP`, `CATASTRO_DEBUG_METRICS`.
    /// A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        Self {
            base_url: std::env::var("CATASTRO_API_URL").unwrap_or(defaults.base_url),
            api_version: std::env::var("CATASTRO_API_VERSION").unwrap_or(defaults.api_version),
            timeout_ms: std::env::var("CATASTRO_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
            forward_credentials: defaults.forward_credentials,
            debug_logging: env_flag("CATASTRO_DEBUG_HTTP"),
            attach_debug_metrics: env_flag("CATASTRO_DEBUG_METRICS"),
        }
    }

    /// Set the backend base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version path segment
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the per-request timeout in milliseconds
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Toggle cookie forwarding
    pub fn with_credentials(mut self, forward: bool) -> Self {
        self.forward_credentials = forward;
        self
    }

    /// Toggle request/response logging
    pub fn with_debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }

    /// Toggle metrics attachment on successful responses
    pub fn with_debug_metrics(mut self, enabled: bool) -> Self {
        self.attach_debug_metrics = enabled;
        self
    }

    /// Success predicate shared by the whole pipeline: status in `[200, 300)`
    pub fn is_success(status: u16) -> bool {
        (200..300).contains(&status)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false)
}
