//! Wire DTOs for the booking backend.
//!
//! Request bodies serialize exactly as the backend expects them; list
//! responses arrive wrapped under a named field, and a missing field
//! deserializes as an empty collection rather than an error.

use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::service::{ProviderService, Service};
use crate::user::{Role, User};

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response from login and register: a bearer token plus the identity it
/// authenticates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A signed-in session, persisted by the CLI and handed to the API client
/// at construction. There is no ambient token lookup anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for AuthSession {
    fn from(resp: AuthResponse) -> Self {
        Self {
            token: resp.token,
            user: resp.user,
        }
    }
}

/// Body for `POST /api/bookings`.
///
/// `scheduled_time` is passed through exactly as entered in the booking
/// form (`datetime-local` shape, e.g. `2025-01-01T10:00`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: String,
    pub scheduled_time: String,
}

/// Body for `POST /api/provider-services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProviderServiceRequest {
    pub provider_id: String,
    pub service_id: String,
}

/// Body for `PATCH /api/users/<id>/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    pub is_available: bool,
}

/// Envelope for `GET /api/services`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceListResponse {
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Envelope for `GET /api/provider-services`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderServiceListResponse {
    #[serde(default)]
    pub provider_services: Vec<ProviderService>,
}

/// Envelope for `GET /bookings/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingListResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}
