//! Application state: configuration plus the saved session.
//!
//! The data directory (default `~/.bookly`, override `BOOKLY_DATA_DIR`)
//! holds `config.toml` and `session.json`. The session file is the only
//! persistent token storage; it is read here once and handed to the API
//! client explicitly, never looked up ambiently.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use bookly_client::ApiClient;
use bookly_types::api::AuthSession;
use bookly_types::config::ClientConfig;
use bookly_types::user::Role;

/// Loaded configuration and session shared by all commands.
pub struct AppState {
    pub config: ClientConfig,
    pub session: Option<AuthSession>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load config and session from the data directory.
    pub async fn init() -> Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;

        let mut config = load_config(&data_dir).await?;
        if let Ok(url) = std::env::var("BOOKLY_API_URL") {
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }

        let session = load_session(&data_dir).await;

        Ok(Self {
            config,
            session,
            data_dir,
        })
    }

    /// An API client carrying the current session, if any.
    pub fn api(&self) -> ApiClient {
        ApiClient::from_config(&self.config, self.session.as_ref())
    }

    /// The saved session, or an error telling the user to sign in.
    pub fn require_session(&self) -> Result<&AuthSession> {
        self.session
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Not signed in. Run `bookly login` first."))
    }

    /// The saved session, checked against the role a dashboard needs.
    pub fn require_role(&self, role: Role) -> Result<&AuthSession> {
        let session = self.require_session()?;
        if session.user.role != role {
            bail!(
                "This dashboard is for {role} accounts; you are signed in as a {} account.",
                session.user.role
            );
        }
        Ok(session)
    }

    /// Persist a new session and keep it in memory.
    pub async fn save_session(&mut self, session: AuthSession) -> Result<()> {
        let path = session_path(&self.data_dir);
        let content = serde_json::to_string_pretty(&session)?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.session = Some(session);
        Ok(())
    }

    /// Remove the saved session. Returns whether one existed.
    pub async fn clear_session(&mut self) -> Result<bool> {
        let existed = self.session.take().is_some();
        let path = session_path(&self.data_dir);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(existed),
            Err(err) => Err(err).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

/// Data directory: `$BOOKLY_DATA_DIR`, or `~/.bookly`.
fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BOOKLY_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookly")
}

fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join("session.json")
}

/// Load `config.toml`, defaulting when the file does not exist.
async fn load_config(data_dir: &Path) -> Result<ClientConfig> {
    let path = config_path(data_dir);
    if !path.exists() {
        return Ok(ClientConfig::default());
    }
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ClientConfig =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load `session.json`. An unreadable or malformed file is treated as
/// signed out rather than a fatal error.
async fn load_session(data_dir: &Path) -> Option<AuthSession> {
    let path = session_path(data_dir);
    let content = tokio::fs::read_to_string(&path).await.ok()?;
    match serde_json::from_str(&content) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "ignoring malformed session file");
            None
        }
    }
}
