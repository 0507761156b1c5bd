//! Client dashboard controller.
//!
//! Drives the booking flow: browse the service catalog, select a service,
//! pick a time, submit. The selection is a tagged phase rather than a pair
//! of nullable fields, so "submitting with no selection" is unrepresentable.

use chrono::{DateTime, Utc};

use bookly_types::api::CreateBookingRequest;
use bookly_types::booking::Booking;
use bookly_types::error::DashboardError;
use bookly_types::service::Service;

use crate::api::BookingApi;
use crate::view::{self, BookingPartition};

/// Where the booking form currently stands.
///
/// Idle -> (select service) -> Selected -> (submit) -> Submitting ->
/// Idle on success, back to Selected with the form retained on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingPhase {
    Idle,
    Selected {
        service: Service,
        scheduled_time: String,
    },
    Submitting {
        service: Service,
        scheduled_time: String,
    },
}

/// Per-view state for the client dashboard.
pub struct ClientDashboard {
    services: Vec<Service>,
    bookings: Vec<Booking>,
    phase: BookingPhase,
}

impl ClientDashboard {
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            bookings: Vec::new(),
            phase: BookingPhase::Idle,
        }
    }

    /// The mount-time fetches: service catalog and booking list.
    ///
    /// A failed fetch leaves the corresponding collection empty so the
    /// rest of the dashboard still renders.
    pub async fn load<A: BookingApi>(&mut self, api: &A) {
        self.services = match api.list_services().await {
            Ok(services) => services,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch services");
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

    /// Re-fetch the booking list, keeping the current one if the fetch
    /// fails.
    pub async fn refresh_bookings<A: BookingApi>(&mut self, api: &A) {
        match api.my_bookings().await {
            Ok(bookings) => self.bookings = bookings,
            Err(err) => tracing::warn!(error = %err, "failed to refresh bookings"),
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    /// The currently selected service, in either form phase.
    pub fn selected_service(&self) -> Option<&Service> {
        match &self.phase {
            BookingPhase::Idle => None,
            BookingPhase::Selected { service, .. } | BookingPhase::Submitting { service, .. } => {
                Some(service)
            }
        }
    }

    /// Bookings split into upcoming and past relative to `now`.
    pub fn partition(&self, now: DateTime<Utc>) -> BookingPartition {
        view::partition_bookings(&self.bookings, now)
    }

    /// Select a catalog service for booking.
    ///
    /// Re-selecting replaces the previous selection and clears the time
    /// field.
    pub fn select_service(&mut self, service_id: &str) -> Result<(), DashboardError> {
        if matches!(self.phase, BookingPhase::Submitting { .. }) {
            return Err(DashboardError::Busy);
        }
        let service = self
            .services
            .iter()
            .find(|s| s.id == service_id)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownService(service_id.to_string()))?;
        self.phase = BookingPhase::Selected {
            service,
            scheduled_time: String::new(),
        };
        Ok(())
    }

    /// Fill in the form's scheduled-time field.
    pub fn set_scheduled_time(&mut self, time: &str) -> Result<(), DashboardError> {
        match &mut self.phase {
            BookingPhase::Idle => Err(DashboardError::NoSelection),
            BookingPhase::Submitting { .. } => Err(DashboardError::Busy),
            BookingPhase::Selected { scheduled_time, .. } => {
                *scheduled_time = time.to_string();
                Ok(())
            }
        }
    }

    /// Cancel the booking form and return to the idle phase.
    pub fn cancel_selection(&mut self) -> Result<(), DashboardError> {
        if matches!(self.phase, BookingPhase::Submitting { .. }) {
            return Err(DashboardError::Busy);
        }
        self.phase = BookingPhase::Idle;
        Ok(())
    }

    /// Submit the booking form.
    ///
    /// On success the form resets to idle and the booking list is
    /// refreshed; on failure the selection and time field are retained so
    /// the user can retry or correct them.
    pub async fn submit_booking<A: BookingApi>(&mut self, api: &A) -> Result<(), DashboardError> {
        let (service, scheduled_time) =
            match std::mem::replace(&mut self.phase, BookingPhase::Idle) {
                BookingPhase::Idle => return Err(DashboardError::NoSelection),
                BookingPhase::Submitting { service, scheduled_time } => {
                    self.phase = BookingPhase::Submitting { service, scheduled_time };
                    return Err(DashboardError::Busy);
                }
                BookingPhase::Selected { service, scheduled_time } => (service, scheduled_time),
            };

        if scheduled_time.trim().is_empty() {
            self.phase = BookingPhase::Selected { service, scheduled_time };
            return Err(DashboardError::MissingTime);
        }

        let request = CreateBookingRequest {
            service_id: service.id.clone(),
            scheduled_time: scheduled_time.clone(),
        };
        self.phase = BookingPhase::Submitting { service, scheduled_time };

        match api.create_booking(&request).await {
            Ok(()) => {
                self.phase = BookingPhase::Idle;
                self.refresh_bookings(api).await;
                Ok(())
            }
            Err(err) => {
                // Back to the filled-in form.
                if let BookingPhase::Submitting { service, scheduled_time } =
                    std::mem::replace(&mut self.phase, BookingPhase::Idle)
                {
                    self.phase = BookingPhase::Selected { service, scheduled_time };
                }
                Err(err.into())
            }
        }
    }
}

impl Default for ClientDashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::testing::FakeApi;
    use chrono::TimeZone;

    fn seeded_api() -> FakeApi {
        FakeApi {
            services: vec![
                FakeApi::service("svc-1", "Haircut"),
                FakeApi::service("svc-2", "Massage"),
            ],
            ..FakeApi::default()
        }
    }

    async fn loaded_dashboard(api: &FakeApi) -> ClientDashboard {
        let mut dashboard = ClientDashboard::new();
        dashboard.load(api).await;
        dashboard
    }

    #[tokio::test]
    async fn test_load_fetches_services_and_bookings() {
        let api = seeded_api();
        api.bookings
            .lock()
            .unwrap()
            .push(FakeApi::booking("bk-1", "2025-06-01T10:00:00Z"));

        let dashboard = loaded_dashboard(&api).await;
        assert_eq!(dashboard.services().len(), 2);
        assert_eq!(dashboard.bookings().len(), 1);
        assert_eq!(*dashboard.phase(), BookingPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_collection_empty() {
        let api = FakeApi {
            fail_services: true,
            ..seeded_api()
        };
        api.bookings
            .lock()
            .unwrap()
            .push(FakeApi::booking("bk-1", "2025-06-01T10:00:00Z"));

        let dashboard = loaded_dashboard(&api).await;
        assert!(dashboard.services().is_empty());
        // The other fetch still went through.
        assert_eq!(dashboard.bookings().len(), 1);
    }

    #[tokio::test]
    async fn test_select_unknown_service() {
        let api = seeded_api();
        let mut dashboard = loaded_dashboard(&api).await;
        let err = dashboard.select_service("svc-404").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownService(_)));
        assert_eq!(*dashboard.phase(), BookingPhase::Idle);
    }

    #[tokio::test]
    async fn test_submit_without_selection() {
        let api = seeded_api();
        let mut dashboard = loaded_dashboard(&api).await;
        let err = dashboard.submit_booking(&api).await.unwrap_err();
        assert!(matches!(err, DashboardError::NoSelection));
    }

    #[tokio::test]
    async fn test_submit_without_time_retains_selection() {
        let api = seeded_api();
        let mut dashboard = loaded_dashboard(&api).await;
        dashboard.select_service("svc-1").unwrap();

        let err = dashboard.submit_booking(&api).await.unwrap_err();
        assert!(matches!(err, DashboardError::MissingTime));
        assert_eq!(dashboard.selected_service().unwrap().id, "svc-1");
        assert!(api.create_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_resets_form_and_refreshes() {
        let api = seeded_api();
        let mut dashboard = loaded_dashboard(&api).await;
        dashboard.select_service("svc-1").unwrap();
        dashboard.set_scheduled_time("2025-01-01T10:00").unwrap();

        dashboard.submit_booking(&api).await.unwrap();

        let calls = api.create_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].service_id, "svc-1");
        assert_eq!(calls[0].scheduled_time, "2025-01-01T10:00");
        drop(calls);

        assert_eq!(*dashboard.phase(), BookingPhase::Idle);
        assert_eq!(dashboard.bookings().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_retains_form_state() {
        let api = FakeApi {
            fail_create: true,
            ..seeded_api()
        };
        let mut dashboard = loaded_dashboard(&api).await;
        dashboard.select_service("svc-2").unwrap();
        dashboard.set_scheduled_time("2025-01-01T10:00").unwrap();

        let err = dashboard.submit_booking(&api).await.unwrap_err();
        assert!(matches!(err, DashboardError::Api(_)));
        assert_eq!(
            *dashboard.phase(),
            BookingPhase::Selected {
                service: FakeApi::service("svc-2", "Massage"),
                scheduled_time: "2025-01-01T10:00".to_string(),
            }
        );
        assert!(dashboard.bookings().is_empty());
    }

    #[tokio::test]
    async fn test_reselect_clears_time_field() {
        let api = seeded_api();
        let mut dashboard = loaded_dashboard(&api).await;
        dashboard.select_service("svc-1").unwrap();
        dashboard.set_scheduled_time("2025-01-01T10:00").unwrap();
        dashboard.select_service("svc-2").unwrap();

        assert_eq!(
            *dashboard.phase(),
            BookingPhase::Selected {
                service: FakeApi::service("svc-2", "Massage"),
                scheduled_time: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn test_cancel_returns_to_idle() {
        let api = seeded_api();
        let mut dashboard = loaded_dashboard(&api).await;
        dashboard.select_service("svc-1").unwrap();
        dashboard.cancel_selection().unwrap();
        assert_eq!(*dashboard.phase(), BookingPhase::Idle);
        assert!(dashboard.selected_service().is_none());
    }

    #[tokio::test]
    async fn test_partition_uses_current_bookings() {
        let api = seeded_api();
        api.bookings.lock().unwrap().extend([
            FakeApi::booking("bk-1", "2025-06-01T13:00:00Z"),
            FakeApi::booking("bk-2", "2025-06-01T11:00:00Z"),
        ]);
        let dashboard = loaded_dashboard(&api).await;

        let now = chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let partition = dashboard.partition(now);
        assert_eq!(partition.upcoming.len(), 1);
        assert_eq!(partition.past.len(), 1);
    }
}
