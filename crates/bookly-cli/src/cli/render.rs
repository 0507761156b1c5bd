//! Shared terminal rendering helpers for the dashboard commands.

use std::time::Duration;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use indicatif::{ProgressBar, ProgressStyle};

use bookly_core::view::parse_scheduled_time;
use bookly_types::booking::Booking;
use bookly_types::service::{ProviderService, Service};

/// Spinner shown while a request is in flight. The interactive loops
/// accept no input until it is cleared, so each action issues at most one
/// outstanding request.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("  {spinner} {msg}").expect("static spinner template"),
    );
    bar.enable_steady_tick(Duration::from_millis(80));
    bar.set_message(message.to_string());
    bar
}

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render a scheduled time for display, falling back to the raw string
/// when it does not parse.
pub fn format_time(raw: &str) -> String {
    match parse_scheduled_time(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${price:.2}"),
        None => "-".to_string(),
    }
}

pub fn services_table(services: &[Service]) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Service").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Price").fg(Color::White),
    ]);
    for service in services {
        table.add_row(vec![
            Cell::new(&service.name).fg(Color::Cyan),
            Cell::new(&service.description).fg(Color::DarkGrey),
            Cell::new(format_price(service.price)).fg(Color::Green),
        ]);
    }
    table
}

pub fn bookings_table(bookings: &[Booking]) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Service").fg(Color::White),
        Cell::new("With").fg(Color::White),
        Cell::new("When").fg(Color::White),
        Cell::new("Status").fg(Color::White),
    ]);
    for booking in bookings {
        let status_cell = match booking.status.as_str() {
            "confirmed" => Cell::new("confirmed").fg(Color::Green),
            "cancelled" => Cell::new("cancelled").fg(Color::Red),
            other => Cell::new(other).fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&booking.service_name).fg(Color::Cyan),
            Cell::new(booking.counterparty().unwrap_or("-")).fg(Color::White),
            Cell::new(format_time(&booking.scheduled_time)).fg(Color::White),
            status_cell,
        ]);
    }
    table
}

pub fn offerings_table(offerings: &[ProviderService]) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Service").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Price").fg(Color::White),
    ]);
    for offering in offerings {
        table.add_row(vec![
            Cell::new(&offering.service.name).fg(Color::Cyan),
            Cell::new(&offering.service.description).fg(Color::DarkGrey),
            Cell::new(format_price(offering.service.price)).fg(Color::Green),
        ]);
    }
    table
}
