//! Configuration for the webhook notifier

use crate::SystemInfo;
use std::time::Duration;

/// Configuration for the webhook notifier.
///
/// Created once at process start and never mutated after the notifier is
/// constructed.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Destination endpoint URLs, attempted in order
    pub endpoints: Vec<String>,

    /// Shared secret used to sign outgoing requests
    pub secret: String,

    /// Deployment descriptor attached to payloads that lack one
    pub system: Option<SystemInfo>,

    /// Ceiling on a single delivery attempt
    pub timeout: Duration,

    /// User-Agent header for outgoing requests
    pub user_agent: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            secret: String::new(),
            system: None,
            timeout: Duration::from_secs(60),
            user_agent: format!("hookline/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl NotifierConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> NotifierConfigBuilder {
        NotifierConfigBuilder::new()
    }
}

/// Builder for NotifierConfig
#[derive(Debug, Clone, Default)]
pub struct NotifierConfigBuilder {
    config: NotifierConfig,
}

impl NotifierConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: NotifierConfig::default(),
        }
    }

    /// Add a destination endpoint
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoints.push(url.into());
        self
    }

    /// Replace the endpoint list
    pub fn endpoints(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.endpoints = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set the signing secret
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.config.secret = secret.into();
        self
    }

    /// Set the deployment descriptor
    pub fn system(mut self, system: SystemInfo) -> Self {
        self.config.system = Some(system);
        self
    }

    /// Set the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the per-attempt timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> NotifierConfig {
        self.config
    }
}
