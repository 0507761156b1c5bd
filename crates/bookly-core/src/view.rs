//! Pure view-state derivation.
//!
//! Both computations here are deterministic functions of their inputs and
//! the caller-supplied "now". They allocate fresh output on every call;
//! there is no caching and nothing here performs I/O.

use chrono::{DateTime, NaiveDateTime, Utc};

use bookly_types::booking::Booking;
use bookly_types::service::{ProviderService, Service};

/// Bookings split by scheduled time relative to a reference instant.
#[derive(Debug, Clone, Default)]
pub struct BookingPartition {
    /// Scheduled strictly after `now`, in input order.
    pub upcoming: Vec<Booking>,
    /// Scheduled at or before `now` (or unparseable), in input order.
    pub past: Vec<Booking>,
}

/// Parse a backend scheduled-time string.
///
/// Accepts RFC 3339 as well as the naive `datetime-local` shapes the
/// booking form submits (`2025-01-01T10:00` and with seconds). Naive
/// values are read as UTC.
pub fn parse_scheduled_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Split bookings into upcoming and past relative to `now`.
///
/// A booking is upcoming only when its scheduled time parses and is
/// strictly after `now`; everything else is past. Relative order within
/// each partition matches the input.
pub fn partition_bookings(bookings: &[Booking], now: DateTime<Utc>) -> BookingPartition {
    let mut partition = BookingPartition::default();
    for booking in bookings {
        let upcoming = parse_scheduled_time(&booking.scheduled_time)
            .is_some_and(|scheduled| scheduled > now);
        if upcoming {
            partition.upcoming.push(booking.clone());
        } else {
            partition.past.push(booking.clone());
        }
    }
    partition
}

/// Services a provider has not yet added to their offerings.
///
/// Set difference keyed by service id, preserving the order of the full
/// catalog.
pub fn available_services(all: &[Service], offered: &[ProviderService]) -> Vec<Service> {
    all.iter()
        .filter(|service| !offered.iter().any(|ps| ps.service.id == service.id))
        .cloned()
        .collect()
}
