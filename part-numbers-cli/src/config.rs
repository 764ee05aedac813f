//! Connection and readiness configuration
//!
//! Defaults reproduce the fixed values the tools have always used: the
//! service on `http://localhost:3000`, a 30 second bound on the bulk upload,
//! and the `Modelos.xlsx` sheet in the working directory.

use std::time::Duration;

/// Environment variable that overrides the default service URL
pub const BASE_URL_ENV: &str = "PART_NUMBERS_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SPREADSHEET: &str = "Modelos.xlsx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_TARGET_PART: &str = "EBR80757417";

pub const BULK_PATH: &str = "/api/part-numbers/bulk";
pub const LIST_PATH: &str = "/api/part-numbers";
pub const HEALTH_PATH: &str = "/api/health";

/// Where the part-numbers service lives and how long to wait on it
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout, `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Resolve the base URL: explicit value, then environment, then default
    pub fn resolve(explicit: Option<String>) -> Self {
        let base_url = explicit
            .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Join an API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// How long to wait for the service to report healthy before uploading
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl ReadinessConfig {
    pub fn builder() -> ReadinessConfigBuilder {
        ReadinessConfigBuilder::new()
    }

    /// For services that take a while to come up (cold database, containers)
    pub fn patient() -> Self {
        Self {
            max_attempts: 30,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 1.5,
        }
    }

    /// Fail fast, mostly for tests and scripted runs
    pub fn quick() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(50),
            backoff_multiplier: 2.0,
        }
    }

    /// Delay to sleep after a failed attempt (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let millis = self.base_delay.as_millis() as f64 * self.backoff_multiplier.powi(exponent);
        let delay = Duration::from_millis(millis.min(u64::MAX as f64) as u64);
        delay.min(self.max_delay)
    }
}

/// Builder for ReadinessConfig
#[derive(Debug)]
pub struct ReadinessConfigBuilder {
    config: ReadinessConfig,
}

impl ReadinessConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ReadinessConfig::default(),
        }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts.max(1);
        self
    }

    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.config.base_delay = delay;
        self
    }

    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.config.max_delay = delay;
        self
    }

    pub fn backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.config.backoff_multiplier = multiplier;
        self
    }

    pub fn build(self) -> ReadinessConfig {
        self.config
    }
}

impl Default for ReadinessConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
