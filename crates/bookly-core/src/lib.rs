//! Dashboard logic for Bookly.
//!
//! Three pieces, leaves first:
//!
//! - [`api::BookingApi`]: the trait every backend transport implements.
//!   The concrete `reqwest` client lives in `bookly-client`; tests drive
//!   the controllers with an in-memory fake.
//! - [`view`]: pure, side-effect-free derivation over fetched collections
//!   (upcoming/past partitioning, services-available-to-add).
//! - [`dashboard`]: the client and provider controllers, holding per-view
//!   state and orchestrating backend calls in response to user actions.

pub mod api;
pub mod dashboard;
pub mod view;
