//! Client dashboard: browse services, book one, review bookings.
//!
//! An interactive loop over [`ClientDashboard`]. Rendering re-derives the
//! upcoming/past partition from the current booking list on every pass;
//! a spinner blocks input while a request is outstanding.

use anyhow::Result;
use chrono::Utc;
use console::style;
use dialoguer::{Confirm, Input, Select};

use bookly_client::ApiClient;
use bookly_core::dashboard::ClientDashboard;
use bookly_types::user::{Role, User};

use crate::cli::render::{bookings_table, services_table, spinner};
use crate::state::AppState;

/// Run the client dashboard.
pub async fn run(state: &AppState, json: bool) -> Result<()> {
    let session = state.require_role(Role::Client)?;
    let api = state.api();

    let mut dashboard = ClientDashboard::new();
    let bar = spinner("Loading dashboard...");
    dashboard.load(&api).await;
    bar.finish_and_clear();

    if json {
        let partition = dashboard.partition(Utc::now());
        let snapshot = serde_json::json!({
            "user": session.user,
            "services": dashboard.services(),
            "bookings": {
                "upcoming": partition.upcoming,
                "past": partition.past,
            },
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    loop {
        render(&dashboard, &session.user);

        let actions = ["Book a service", "Refresh", "Quit"];
        let choice = Select::new()
            .with_prompt("  Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => book_service(&mut dashboard, &api).await?,
            1 => {
                let bar = spinner("Refreshing...");
                dashboard.load(&api).await;
                bar.finish_and_clear();
            }
            _ => break,
        }
    }

    Ok(())
}

/// Render the full dashboard view.
fn render(dashboard: &ClientDashboard, user: &User) {
    let partition = dashboard.partition(Utc::now());

    println!();
    println!(
        "  {}",
        style(format!("Welcome back, {}!", user.name)).bold()
    );
    println!();

    if dashboard.services().is_empty() {
        println!("  {}", style("No services available right now.").dim());
    } else {
        println!("  {}", style("Available Services").bold());
        println!("{}", services_table(dashboard.services()));
    }
    println!();

    if dashboard.bookings().is_empty() {
        println!(
            "  {}",
            style("No bookings yet. Book your first service!").dim()
        );
    } else {
        println!(
            "  {} ({})",
            style("Upcoming Bookings").bold(),
            partition.upcoming.len()
        );
        if partition.upcoming.is_empty() {
            println!("  {}", style("No upcoming bookings.").dim());
        } else {
            println!("{}", bookings_table(&partition.upcoming));
        }
        if !partition.past.is_empty() {
            println!();
            println!(
                "  {} ({})",
                style("Past Bookings").bold(),
                partition.past.len()
            );
            println!("{}", bookings_table(&partition.past));
        }
    }
    println!();
}

/// The booking flow: select a service, pick a time, submit.
///
/// On failure the form state survives inside the controller, so a retry
/// reuses the same selection and time.
async fn book_service(dashboard: &mut ClientDashboard, api: &ApiClient) -> Result<()> {
    if dashboard.services().is_empty() {
        println!();
        println!("  {} No services available to book.", style("i").blue().bold());
        return Ok(());
    }

    let labels: Vec<String> = dashboard
        .services()
        .iter()
        .map(|s| match s.price {
            Some(price) => format!("{} (${price:.2})", s.name),
            None => s.name.clone(),
        })
        .collect();
    let choice = Select::new()
        .with_prompt("  Service")
        .items(&labels)
        .default(0)
        .interact()?;
    let service_id = dashboard.services()[choice].id.clone();
    dashboard.select_service(&service_id)?;

    let time: String = Input::new()
        .with_prompt("  Preferred date & time (YYYY-MM-DDTHH:MM)")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("a date and time is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    dashboard.set_scheduled_time(&time)?;

    let service_name = dashboard
        .selected_service()
        .map(|s| s.name.clone())
        .unwrap_or_default();

    loop {
        let bar = spinner(&format!("Booking {service_name}..."));
        let result = dashboard.submit_booking(api).await;
        bar.finish_and_clear();

        match result {
            Ok(()) => {
                println!();
                println!(
                    "  {} Booking confirmed! Your {} has been booked.",
                    style("+").green().bold(),
                    style(&service_name).cyan()
                );
                break;
            }
            Err(err) => {
                tracing::debug!(error = %err, "booking failed");
                println!();
                println!(
                    "  {} Booking failed. Please try again or contact support.",
                    style("!").red().bold()
                );
                let retry = Confirm::new()
                    .with_prompt("  Try again with the same details?")
                    .default(false)
                    .interact()?;
                if !retry {
                    dashboard.cancel_selection()?;
                    break;
                }
            }
        }
    }

    Ok(())
}
