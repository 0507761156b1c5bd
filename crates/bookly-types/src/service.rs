use serde::{Deserialize, Serialize};

/// A bookable service as defined by the backend.
///
/// Services are created and owned server-side; the client only ever reads
/// them. Identifiers are opaque backend strings, not UUIDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in whole currency units. Absent for services without a
    /// published price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// One provider's offering of a service.
///
/// A join row between a provider and a [`Service`]; created and removed by
/// explicit user action, never mutated in place. The embedded service is
/// denormalized by the backend so listings render without a second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderService {
    pub id: String,
    pub provider_id: String,
    pub service: Service,
}
