//! Provider dashboard: availability, service offerings, appointments.
//!
//! An interactive loop over [`ProviderDashboard`]. The availability line
//! always shows the last server-confirmed value; offering changes
//! re-fetch the collection from the backend before the next render.

use anyhow::Result;
use chrono::Utc;
use console::style;
use dialoguer::Select;

use bookly_client::ApiClient;
use bookly_core::dashboard::ProviderDashboard;
use bookly_types::user::Role;

use crate::cli::render::{bookings_table, offerings_table, spinner};
use crate::state::AppState;

/// Run the provider dashboard.
pub async fn run(state: &AppState, json: bool) -> Result<()> {
    let session = state.require_role(Role::Provider)?;
    let api = state.api();

    let mut dashboard = ProviderDashboard::new(&session.user);
    let bar = spinner("Loading dashboard...");
    dashboard.load(&api).await;
    bar.finish_and_clear();

    if json {
        let partition = dashboard.partition(Utc::now());
        let snapshot = serde_json::json!({
            "user": session.user,
            "is_available": dashboard.is_available(),
            "offerings": dashboard.offerings(),
            "available_to_add": dashboard.available_to_add(),
            "bookings": {
                "upcoming": partition.upcoming,
                "past": partition.past,
            },
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    loop {
        render(&dashboard);

        let toggle_label = if dashboard.is_available() {
            "Stop accepting bookings"
        } else {
            "Start accepting bookings"
        };
        let actions = [
            toggle_label,
            "Add a service",
            "Remove a service",
            "Refresh",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("  Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => toggle_availability(&mut dashboard, &api).await,
            1 => add_service(&mut dashboard, &api).await?,
            2 => remove_service(&mut dashboard, &api).await?,
            3 => {
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
fn render(dashboard: &ProviderDashboard) {
    let partition = dashboard.partition(Utc::now());

    println!();
    println!("  {}", style("Provider Dashboard").bold());
    println!();

    if dashboard.is_available() {
        println!(
            "  {} {}",
            style("●").green(),
            style("Available for new bookings").green()
        );
    } else {
        println!(
            "  {} {}",
            style("●").red(),
            style("Not accepting new bookings").red()
        );
    }
    println!();

    if dashboard.offerings().is_empty() {
        println!(
            "  {}",
            style("No services offered yet. Add one to receive bookings.").dim()
        );
    } else {
        println!("  {}", style("Your Services").bold());
        println!("{}", offerings_table(dashboard.offerings()));
    }
    println!();

    println!(
        "  {} ({})",
        style("Upcoming Appointments").bold(),
        partition.upcoming.len()
    );
    if partition.upcoming.is_empty() {
        println!("  {}", style("No upcoming appointments.").dim());
    } else {
        println!("{}", bookings_table(&partition.upcoming));
    }
    println!();

    println!(
        "  {} ({})",
        style("Completed Services").bold(),
        partition.past.len()
    );
    if partition.past.is_empty() {
        println!("  {}", style("No completed services yet.").dim());
    } else {
        println!("{}", bookings_table(&partition.past));
    }
    println!();
}

/// Flip availability; the flag only changes after the server confirms.
async fn toggle_availability(dashboard: &mut ProviderDashboard, api: &ApiClient) {
    let bar = spinner("Updating availability...");
    let result = dashboard.toggle_availability(api).await;
    bar.finish_and_clear();

    match result {
        Ok(now_available) => {
            println!();
            println!(
                "  {} You are now {} for new bookings.",
                style("+").green().bold(),
                if now_available {
                    style("available").green()
                } else {
                    style("unavailable").yellow()
                }
            );
        }
        Err(err) => {
            tracing::debug!(error = %err, "availability update failed");
            println!();
            println!(
                "  {} Could not update availability. Please try again.",
                style("!").red().bold()
            );
        }
    }
}

/// Add a catalog service to the provider's offerings.
async fn add_service(dashboard: &mut ProviderDashboard, api: &ApiClient) -> Result<()> {
    let available = dashboard.available_to_add();
    if available.is_empty() {
        println!();
        println!(
            "  {} You already offer every service in the catalog.",
            style("i").blue().bold()
        );
        return Ok(());
    }

    let labels: Vec<&str> = available.iter().map(|s| s.name.as_str()).collect();
    let choice = Select::new()
        .with_prompt("  Service to add")
        .items(&labels)
        .default(0)
        .interact()?;
    let service = &available[choice];

    let bar = spinner(&format!("Adding {}...", service.name));
    let result = dashboard.add_offering(api, &service.id).await;
    bar.finish_and_clear();

    match result {
        Ok(()) => {
            println!();
            println!(
                "  {} Now offering {}.",
                style("+").green().bold(),
                style(&service.name).cyan()
            );
        }
        Err(err) => {
            tracing::debug!(error = %err, "add offering failed");
            println!();
            println!(
                "  {} Could not add the service. Please try again.",
                style("!").red().bold()
            );
        }
    }
    Ok(())
}

/// Remove one of the provider's offerings.
async fn remove_service(dashboard: &mut ProviderDashboard, api: &ApiClient) -> Result<()> {
    if dashboard.offerings().is_empty() {
        println!();
        println!("  {} Nothing to remove.", style("i").blue().bold());
        return Ok(());
    }

    let labels: Vec<String> = dashboard
        .offerings()
        .iter()
        .map(|ps| ps.service.name.clone())
        .collect();
    let choice = Select::new()
        .with_prompt("  Service to remove")
        .items(&labels)
        .default(0)
        .interact()?;
    let offering_id = dashboard.offerings()[choice].id.clone();
    let name = labels[choice].clone();

    let bar = spinner(&format!("Removing {name}..."));
    let result = dashboard.remove_offering(api, &offering_id).await;
    bar.finish_and_clear();

    match result {
        Ok(()) => {
            println!();
            println!(
                "  {} No longer offering {}.",
                style("x").red().bold(),
                style(&name).cyan()
            );
        }
        Err(err) => {
            tracing::debug!(error = %err, "remove offering failed");
            println!();
            println!(
                "  {} Could not remove the service. Please try again.",
                style("!").red().bold()
            );
        }
    }
    Ok(())
}
