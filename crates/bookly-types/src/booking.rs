use serde::{Deserialize, Serialize};

/// A booking as seen by either dashboard.
///
/// The backend denormalizes the service name and the counterparty name into
/// each row: a client's booking carries `provider_name`, a provider's
/// carries `client_name`. Status is a freeform backend string displayed
/// as-is; the client never drives status transitions.
///
/// `scheduled_time` stays a string on the wire. Listing responses use
/// RFC 3339 while the booking form submits the HTML `datetime-local` shape
/// (`2025-01-01T10:00`); parsing happens at the view layer, and a value the
/// view cannot parse still renders verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    pub scheduled_time: String,
    pub status: String,
}

impl Booking {
    /// The name of the other party, whichever role is viewing.
    pub fn counterparty(&self) -> Option<&str> {
        self.client_name
            .as_deref()
            .or(self.provider_name.as_deref())
    }
}
