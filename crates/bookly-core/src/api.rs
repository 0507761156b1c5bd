//! BookingApi trait definition.
//!
//! The core abstraction over the booking backend. Uses native async fn in
//! traits (RPITIT, Rust 2024 edition); the concrete implementation lives
//! in bookly-client, and controller tests substitute an in-memory fake.
//!
//! Login and register are not part of this trait: the dashboards only run
//! with an established session, so authentication stays an inherent
//! concern of the concrete client.

use bookly_types::api::CreateBookingRequest;
use bookly_types::booking::Booking;
use bookly_types::error::ApiError;
use bookly_types::service::{ProviderService, Service};

/// Backend operations the dashboards depend on.
///
/// Every call is single-attempt and fire-and-forget: no retry, no timeout,
/// no backoff. Failures collapse into [`ApiError`].
pub trait BookingApi: Send + Sync {
    /// `GET /api/services` -- the full service catalog.
    fn list_services(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Service>, ApiError>> + Send;

    /// `GET /bookings/me` -- bookings for the signed-in user.
    fn my_bookings(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, ApiError>> + Send;

    /// `POST /api/bookings` -- create a booking for the signed-in client.
    fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// `GET /api/provider-services?provider_id=<id>` -- one provider's
    /// offerings.
    fn provider_services(
        &self,
        provider_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ProviderService>, ApiError>> + Send;

    /// `POST /api/provider-services` -- add an offering.
    fn add_provider_service(
        &self,
        provider_id: &str,
        service_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /api/provider-services/<id>` -- remove an offering by its
    /// own id (not the service id).
    fn remove_provider_service(
        &self,
        offering_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// `PATCH /api/users/<user_id>/availability` -- set the provider
    /// availability flag.
    fn set_availability(
        &self,
        user_id: &str,
        is_available: bool,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;
}
