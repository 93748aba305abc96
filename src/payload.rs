//! Webhook payload types

use serde::{Deserialize, Serialize};

/// Describes the deployment that emitted an event.
///
/// Attached under the `system` key of the outgoing JSON body so receivers
/// can tell installations apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Scheme of the public address (e.g. "https")
    pub proto: String,

    /// Public hostname of the deployment
    pub host: String,

    /// Public base URL of the deployment
    pub link: String,

    /// Version tag of the deployment
    pub version: String,
}

/// An event to be delivered as a webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    /// Event classifier (e.g. "build.created"), also sent as the
    /// `X-Drone-Event` header so receivers can route without parsing
    pub event: String,

    /// Deployment descriptor; filled from the notifier configuration
    /// when the payload does not set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemInfo>,

    /// Event-specific fields, flattened into the JSON object
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl EventPayload {
    /// Create a new payload with the given event classifier
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            system: None,
            data: serde_json::Map::new(),
        }
    }

    /// Add an event-specific field
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Set the deployment descriptor
    pub fn with_system(mut self, system: SystemInfo) -> Self {
        self.system = Some(system);
        self
    }

    /// Serialize for the wire, attaching `fallback` under the `system` key
    /// only when the payload does not already carry one.
    pub(crate) fn to_wire_bytes(
        &self,
        fallback: Option<&SystemInfo>,
    ) -> Result<Vec<u8>, serde_json::Error> {
        let wrapper = WirePayload {
            inner: self,
            system: if self.system.is_none() { fallback } else { None },
        };
        serde_json::to_vec(&wrapper)
    }
}

/// Outgoing wire shape: the payload itself plus the configured system
/// descriptor when the payload has none. The `system` key appears at most
/// once because the inner payload skips it when unset.
#[derive(Serialize)]
struct WirePayload<'a> {
    #[serde(flatten)]
    inner: &'a EventPayload,

    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a SystemInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> SystemInfo {
        SystemInfo {
            proto: "https".to_string(),
            host: "ci.example.com".to_string(),
            link: "https://ci.example.com".to_string(),
            version: "1.2.3".to_string(),
        }
    }

    #[test]
    fn test_fields_flattened() {
        let payload = EventPayload::new("build.created")
            .with_field("repo", serde_json::json!("octo/demo"));

        let bytes = payload.to_wire_bytes(None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["event"], "build.created");
        assert_eq!(value["repo"], "octo/demo");
    }

    #[test]
    fn test_system_absent_when_unset() {
        let payload = EventPayload::new("build.created");
        let bytes = payload.to_wire_bytes(None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(value.get("system").is_none());
    }

    #[test]
    fn test_fallback_system_attached() {
        let payload = EventPayload::new("build.created");
        let bytes = payload.to_wire_bytes(Some(&system())).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["system"]["host"], "ci.example.com");
        assert_eq!(value["system"]["version"], "1.2.3");
    }

    #[test]
    fn test_payload_system_wins_over_fallback() {
        let mut own = system();
        own.host = "other.example.com".to_string();

        let payload = EventPayload::new("build.created").with_system(own);
        let bytes = payload.to_wire_bytes(Some(&system())).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["system"]["host"], "other.example.com");
    }

    #[test]
    fn test_serialization_deterministic_within_call() {
        let payload = EventPayload::new("build.created")
            .with_field("repo", serde_json::json!("octo/demo"))
            .with_field("number", serde_json::json!(42));

        let a = payload.to_wire_bytes(Some(&system())).unwrap();
        let b = payload.to_wire_bytes(Some(&system())).unwrap();
        assert_eq!(a, b);
    }
}
