//! HTTP transport for the Bookly booking backend.
//!
//! [`ApiClient`] is a thin REST wrapper: one low-level request path that
//! handles the base URL, JSON content negotiation, and bearer-token
//! attachment, plus typed bindings that fix the method and path for each
//! backend operation. It implements [`bookly_core::api::BookingApi`] so
//! the dashboard controllers can be driven by it directly.

mod client;

pub use client::ApiClient;
