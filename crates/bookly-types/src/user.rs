use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Account role, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Provider,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Provider => write!(f, "provider"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Role::Client),
            "provider" => Ok(Role::Provider),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// The authenticated identity, owned by the auth backend and read-only here.
///
/// `is_available` is the provider-only availability flag; the backend omits
/// it for client accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::Client, Role::Provider] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_client_user_has_no_availability() {
        let raw = r#"{"id": "7", "name": "Ola", "email": "ola@example.com", "role": "client"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.role, Role::Client);
        assert!(user.is_available.is_none());
    }

    #[test]
    fn test_provider_user_availability() {
        let raw = r#"{
            "id": "42",
            "name": "Dana",
            "email": "dana@example.com",
            "role": "provider",
            "is_available": true
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.role, Role::Provider);
        assert_eq!(user.is_available, Some(true));
    }
}
