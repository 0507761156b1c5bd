//! Provider dashboard controller.
//!
//! Owns the availability flag, the provider's offerings, and the booking
//! list. The displayed availability always matches the last
//! server-confirmed value: the flag only flips after the PATCH succeeds.
//! Offering mutations re-fetch the full collection afterwards instead of
//! patching it locally, so the view stays consistent with the backend's
//! source of truth.

use chrono::{DateTime, Utc};

use bookly_types::booking::Booking;
use bookly_types::error::DashboardError;
use bookly_types::service::{ProviderService, Service};
use bookly_types::user::User;

use crate::api::BookingApi;
use crate::view::{self, BookingPartition};

/// Per-view state for the provider dashboard.
pub struct ProviderDashboard {
    provider_id: String,
    is_available: bool,
    services: Vec<Service>,
    offerings: Vec<ProviderService>,
    bookings: Vec<Booking>,
}

impl ProviderDashboard {
    /// Seed the view from the signed-in provider identity.
    pub fn new(user: &User) -> Self {
        Self {
            provider_id: user.id.clone(),
            is_available: user.is_available.unwrap_or(false),
            services: Vec::new(),
            offerings: Vec::new(),
            bookings: Vec::new(),
        }
    }

    /// The mount-time fetches: catalog, offerings, bookings.
    ///
    /// Each fetch fails independently; a failure leaves that collection
    /// empty and the rest of the dashboard usable.
    pub async fn load<A: BookingApi>(&mut self, api: &A) {
        self.services = match api.list_services().await {
            Ok(services) => services,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch services");
                Vec::new()
            }
        };
        self.offerings = match api.provider_services(&self.provider_id).await {
            Ok(offerings) => offerings,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch offerings");
                Vec::new()
            }
        };
        self.bookings = match api.my_bookings().await {
            Ok(bookings) => bookings,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch bookings");
                Vec::new()
            }
        };
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn offerings(&self) -> &[ProviderService] {
        &self.offerings
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Catalog services this provider has not added yet.
    pub fn available_to_add(&self) -> Vec<Service> {
        view::available_services(&self.services, &self.offerings)
    }

    /// Bookings split into upcoming and past relative to `now`.
    pub fn partition(&self, now: DateTime<Utc>) -> BookingPartition {
        view::partition_bookings(&self.bookings, now)
    }

    /// Flip availability on the server, then mirror it locally.
    ///
    /// Returns the new flag value. On failure the displayed flag keeps the
    /// last server-confirmed value.
    pub async fn toggle_availability<A: BookingApi>(
        &mut self,
        api: &A,
    ) -> Result<bool, DashboardError> {
        let target = !self.is_available;
        api.set_availability(&self.provider_id, target).await?;
        self.is_available = target;
        Ok(target)
    }

    /// Add a catalog service to this provider's offerings.
    pub async fn add_offering<A: BookingApi>(
        &mut self,
        api: &A,
        service_id: &str,
    ) -> Result<(), DashboardError> {
        if !self.services.iter().any(|s| s.id == service_id) {
            return Err(DashboardError::UnknownService(service_id.to_string()));
        }
        if self.offerings.iter().any(|ps| ps.service.id == service_id) {
            return Err(DashboardError::AlreadyOffered(service_id.to_string()));
        }
        api.add_provider_service(&self.provider_id, service_id)
            .await?;
        self.refresh_offerings(api).await;
        Ok(())
    }

    /// Remove one of this provider's offerings by offering id.
    pub async fn remove_offering<A: BookingApi>(
        &mut self,
        api: &A,
        offering_id: &str,
    ) -> Result<(), DashboardError> {
        if !self.offerings.iter().any(|ps| ps.id == offering_id) {
            return Err(DashboardError::UnknownOffering(offering_id.to_string()));
        }
        api.remove_provider_service(offering_id).await?;
        self.refresh_offerings(api).await;
        Ok(())
    }

    /// Re-fetch the offerings collection, keeping the current one if the
    /// fetch fails.
    async fn refresh_offerings<A: BookingApi>(&mut self, api: &A) {
        match api.provider_services(&self.provider_id).await {
            Ok(offerings) => self.offerings = offerings,
            Err(err) => tracing::warn!(error = %err, "failed to refresh offerings"),
        }
    }
}
