//! Authentication commands: login, register, logout.
//!
//! Login and register call the auth endpoints unauthenticated, then
//! persist the returned `{token, user}` pair as the session every other
//! command hands to the API client.

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password, Select};

use bookly_client::ApiClient;
use bookly_types::api::AuthSession;
use bookly_types::user::Role;

use crate::cli::render::spinner;
use crate::state::AppState;

/// Sign in and save the session.
pub async fn login(
    state: &mut AppState,
    email: Option<String>,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("  Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("  Password").interact()?,
    };

    let api = ApiClient::from_config(&state.config, None);
    let bar = spinner("Signing in...");
    let response = api.login(&email, &password).await;
    bar.finish_and_clear();

    let response = response.context("Login failed")?;
    let session = AuthSession::from(response);
    state.save_session(session.clone()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.user)?);
    } else {
        println!();
        println!(
            "  {} Signed in as {} ({}).",
            style("+").green().bold(),
            style(&session.user.name).cyan(),
            session.user.role
        );
        println!();
    }
    Ok(())
}

/// Create an account and sign in.
pub async fn register(
    state: &mut AppState,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
    json: bool,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("  Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("  Password")
            .with_confirmation("  Confirm password", "  Passwords do not match")
            .interact()?,
    };
    let role = match role {
        Some(role) => role
            .parse::<Role>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => {
            let choice = Select::new()
                .with_prompt("  Account type")
                .items(&["client -- book services", "provider -- offer services"])
                .default(0)
                .interact()?;
            if choice == 0 { Role::Client } else { Role::Provider }
        }
    };

    let api = ApiClient::from_config(&state.config, None);
    let bar = spinner("Creating account...");
    let response = api.register(&name, &email, &password, role).await;
    bar.finish_and_clear();

    let response = response.context("Registration failed")?;
    let session = AuthSession::from(response);
    state.save_session(session.clone()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.user)?);
    } else {
        println!();
        println!(
            "  {} Account created. Signed in as {} ({}).",
            style("+").green().bold(),
            style(&session.user.name).cyan(),
            session.user.role
        );
        println!();
    }
    Ok(())
}

/// Sign out and remove the saved session.
pub async fn logout(state: &mut AppState, json: bool) -> Result<()> {
    let existed = state.clear_session().await?;

    if json {
        println!("{}", serde_json::json!({ "signed_out": existed }));
    } else if existed {
        println!();
        println!("  {} Signed out.", style("x").red().bold());
        println!();
    } else {
        println!();
        println!("  {} No session to sign out of.", style("i").blue().bold());
        println!();
    }
    Ok(())
}
