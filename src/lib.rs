//! Signed Webhook Delivery
//!
//! This crate delivers JSON-encoded event payloads to a configured set of
//! HTTP endpoints, authenticated with an HTTP Signatures header.
//!
//! # Features
//!
//! - **Signed Requests**: HMAC-SHA256 over the `Date` and `Digest` headers
//! - **Content Integrity**: SHA-256 body digest in the `Digest` header
//! - **Fan-out**: Sequential delivery to every configured endpoint
//! - **Fail-fast**: The first endpoint error aborts remaining deliveries
//! - **Payload Enrichment**: Attach a deployment descriptor to every event
//!
//! # Example
//!
//! ```rust,no_run
//! use hookline::{EventPayload, Notifier, NotifierConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NotifierConfig::builder()
//!         .endpoint("https://example.com/hooks")
//!         .secret("correct-horse-battery-staple")
//!         .build();
//!
//!     let notifier = Notifier::new(config);
//!
//!     let payload = EventPayload::new("build.created")
//!         .with_field("repo", serde_json::json!("octo/demo"));
//!
//!     notifier.send(&payload).await?;
//!     Ok(())
//! }
//! ```
//!
//! Delivery is a single attempt per endpoint per call. There is no retry or
//! backoff, and a received HTTP response of any status counts as delivered;
//! callers that need stronger guarantees layer them on top.

mod config;
mod error;
mod payload;
mod sender;
mod signature;

pub use config::{NotifierConfig, NotifierConfigBuilder};
pub use error::WebhookError;
pub use payload::{EventPayload, SystemInfo};
pub use sender::{Notifier, WebhookSender};
pub use signature::{RequestSigner, body_digest};

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
