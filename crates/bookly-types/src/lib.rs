//! Shared domain types for Bookly.
//!
//! Everything that crosses a crate boundary lives here: the domain model
//! (services, bookings, users), the wire DTOs exchanged with the booking
//! backend, the error taxonomy, and client configuration. This crate has no
//! I/O and no async code.

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod service;
pub mod user;
