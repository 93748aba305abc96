//! Webhook notifier: signed delivery to every configured endpoint

use crate::{EventPayload, NotifierConfig, RequestSigner, Result, signature};
use async_trait::async_trait;
use reqwest::Client;
use std::time::SystemTime;
use tracing::debug;
use url::Url;

/// Key id presented in the `Signature` header
const KEY_ID: &str = "hmac-key";

/// Sends event payloads as signed webhooks.
///
/// Seam for callers that want to inject a fake sender in tests.
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// Deliver the payload to every configured endpoint
    async fn send(&self, payload: &EventPayload) -> Result<()>;
}

/// Delivers signed webhooks to the configured endpoints.
///
/// Holds no mutable state: the configuration is read-only after
/// construction and the pooled HTTP client is safe for concurrent reuse,
/// so concurrent `send` calls are independent.
#[derive(Debug, Clone)]
pub struct Notifier {
    config: NotifierConfig,
    signer: RequestSigner,
    http_client: Client,
}

impl Notifier {
    /// Create a notifier from the given configuration
    pub fn new(config: NotifierConfig) -> Self {
        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        let signer = RequestSigner::new(KEY_ID, &config.secret);

        Self {
            config,
            signer,
            http_client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Deliver the payload to every configured endpoint, in order.
    ///
    /// The payload is serialized once and the same bytes are posted to each
    /// endpoint, so the digest and signature are identical across the
    /// fan-out. Delivery is fail-fast: the first endpoint error is returned
    /// and remaining endpoints are not attempted. An empty endpoint list is
    /// a no-op success. Dropping the returned future aborts the in-flight
    /// request; completed deliveries are not undone.
    pub async fn send(&self, payload: &EventPayload) -> Result<()> {
        if self.config.endpoints.is_empty() {
            return Ok(());
        }

        let body = payload.to_wire_bytes(self.config.system.as_ref())?;

        for endpoint in &self.config.endpoints {
            self.deliver(endpoint, &payload.event, &body).await?;
        }

        Ok(())
    }

    /// Send one signed POST to a single endpoint
    async fn deliver(&self, endpoint: &str, event: &str, body: &[u8]) -> Result<()> {
        let url = Url::parse(endpoint)?;
        let digest = signature::body_digest(body);
        let date = httpdate::fmt_http_date(SystemTime::now());
        let signature = self.signer.signature_header(&date, &digest);

        debug!("delivering {} webhook to {}", event, endpoint);

        let response = self
            .http_client
            .post(url)
            .timeout(self.config.timeout)
            .header("Content-Type", "application/json")
            .header("X-Drone-Event", event)
            .header("Digest", digest)
            .header("Date", date)
            .header("Signature", signature)
            .body(body.to_vec())
            .send()
            .await?;

        // A received response of any status counts as delivered; the status
        // is deliberately not inspected. The body is dropped unread.
        debug!("endpoint {} responded {}", endpoint, response.status());

        Ok(())
    }
}

#[async_trait]
impl WebhookSender for Notifier {
    async fn send(&self, payload: &EventPayload) -> Result<()> {
        Notifier::send(self, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebhookError;

    #[tokio::test]
    async fn test_empty_endpoints_is_noop() {
        let notifier = Notifier::new(NotifierConfig::default());
        let payload = EventPayload::new("build.created");

        assert!(notifier.send(&payload).await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_endpoint_url() {
        let config = NotifierConfig::builder()
            .endpoint("not a url")
            .secret("s3cr3t")
            .build();
        let notifier = Notifier::new(config);
        let payload = EventPayload::new("build.created");

        let err = notifier.send(&payload).await.unwrap_err();
        assert!(matches!(err, WebhookError::InvalidUrl(_)));
    }

    #[test]
    fn test_notifier_exposes_config() {
        let config = NotifierConfig::builder().secret("s3cr3t").build();
        let notifier = Notifier::new(config);

        assert_eq!(notifier.config().secret, "s3cr3t");
    }
}
