//! Dashboard controllers.
//!
//! One controller per role-specific view. Each owns the per-view state
//! (fetched collections, selection phase, availability flag) and
//! orchestrates [`BookingApi`](crate::api::BookingApi) calls in response
//! to user actions. Derived collections (upcoming/past, available-to-add)
//! are recomputed from current inputs on every call via [`crate::view`].
//!
//! No fetch failure is fatal: a failed load leaves the affected collection
//! empty, a failed action leaves the view in its previous valid state, and
//! the error is returned to the caller for display.

pub mod client;
pub mod provider;

pub use client::{BookingPhase, ClientDashboard};
pub use provider::ProviderDashboard;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory [`BookingApi`] fake for controller tests.

    use std::sync::Mutex;

    use bookly_types::api::CreateBookingRequest;
    use bookly_types::booking::Booking;
    use bookly_types::error::ApiError;
    use bookly_types::service::{ProviderService, Service};

    use crate::api::BookingApi;

    /// Scriptable backend: seed collections up front, flip `fail_*` to make
    /// an operation reject, inspect the `*_calls` records afterwards.
    #[derive(Default)]
    pub struct FakeApi {
        pub services: Vec<Service>,
        pub bookings: Mutex<Vec<Booking>>,
        pub offerings: Mutex<Vec<ProviderService>>,

        pub fail_services: bool,
        pub fail_bookings: bool,
        pub fail_create: bool,
        pub fail_offerings: bool,
        pub fail_add: bool,
        pub fail_remove: bool,
        pub fail_availability: bool,

        pub create_calls: Mutex<Vec<CreateBookingRequest>>,
        pub availability_calls: Mutex<Vec<(String, bool)>>,
        pub offering_fetches: Mutex<u32>,
    }

    impl FakeApi {
        pub fn service(id: &str, name: &str) -> Service {
            Service {
                id: id.to_string(),
                name: name.to_string(),
                description: String::new(),
                price: None,
            }
        }

        pub fn booking(id: &str, scheduled_time: &str) -> Booking {
            Booking {
                id: id.to_string(),
                service_name: "Haircut".to_string(),
                client_name: None,
                provider_name: None,
                scheduled_time: scheduled_time.to_string(),
                status: "confirmed".to_string(),
            }
        }

        pub fn offering(id: &str, provider_id: &str, service: Service) -> ProviderService {
            ProviderService {
                id: id.to_string(),
                provider_id: provider_id.to_string(),
                service,
            }
        }

        fn reject() -> ApiError {
            ApiError::Status { status: 500 }
        }
    }

    impl BookingApi for FakeApi {
        async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
            if self.fail_services {
                return Err(Self::reject());
            }
            Ok(self.services.clone())
        }

        async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
            if self.fail_bookings {
                return Err(Self::reject());
            }
            Ok(self.bookings.lock().unwrap().clone())
        }

        async fn create_booking(&self, request: &CreateBookingRequest) -> Result<(), ApiError> {
            self.create_calls.lock().unwrap().push(request.clone());
            if self.fail_create {
                return Err(Self::reject());
            }
            let mut bookings = self.bookings.lock().unwrap();
            let id = format!("bk-{}", bookings.len() + 1);
            bookings.push(Self::booking(&id, &request.scheduled_time));
            Ok(())
        }

        async fn provider_services(
            &self,
            provider_id: &str,
        ) -> Result<Vec<ProviderService>, ApiError> {
            *self.offering_fetches.lock().unwrap() += 1;
            if self.fail_offerings {
                return Err(Self::reject());
            }
            Ok(self
                .offerings
                .lock()
                .unwrap()
                .iter()
                .filter(|ps| ps.provider_id == provider_id)
                .cloned()
                .collect())
        }

        async fn add_provider_service(
            &self,
            provider_id: &str,
            service_id: &str,
        ) -> Result<(), ApiError> {
            if self.fail_add {
                return Err(Self::reject());
            }
            let service = self
                .services
                .iter()
                .find(|s| s.id == service_id)
                .cloned()
                .ok_or(ApiError::Status { status: 404 })?;
            let mut offerings = self.offerings.lock().unwrap();
            let id = format!("ps-{}", offerings.len() + 1);
            offerings.push(Self::offering(&id, provider_id, service));
            Ok(())
        }

        async fn remove_provider_service(&self, offering_id: &str) -> Result<(), ApiError> {
            if self.fail_remove {
                return Err(Self::reject());
            }
            let mut offerings = self.offerings.lock().unwrap();
            let before = offerings.len();
            offerings.retain(|ps| ps.id != offering_id);
            if offerings.len() == before {
                return Err(ApiError::Status { status: 404 });
            }
            Ok(())
        }

        async fn set_availability(&self, user_id: &str, is_available: bool) -> Result<(), ApiError> {
            self.availability_calls
                .lock()
                .unwrap()
                .push((user_id.to_string(), is_available));
            if self.fail_availability {
                return Err(Self::reject());
            }
            Ok(())
        }
    }
}
