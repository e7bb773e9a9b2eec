use std::time::Duration;

/// Fixed remote host the client talks to unless overridden.
pub const DEFAULT_API_BASE: &str = "https://chatbot.dev.az.konfigai.com";

/// Per-request timeout; requests abort when it elapses.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_fixed_host() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn timeout_override() {
        let config = ApiConfig::new("http://localhost:8080").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
