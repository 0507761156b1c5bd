use thiserror::Error;

/// Failure of a backend call, collapsed at the API client boundary.
///
/// Transport failures, non-2xx statuses, and malformed bodies all surface
/// as this one signal; the dashboards never classify further and never
/// retry.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Numeric HTTP status, when the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by the dashboard controllers.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no service selected")]
    NoSelection,

    #[error("scheduled time is required")]
    MissingTime,

    #[error("unknown service: '{0}'")]
    UnknownService(String),

    #[error("service already offered: '{0}'")]
    AlreadyOffered(String),

    #[error("unknown offering: '{0}'")]
    UnknownOffering(String),

    #[error("a request is already in flight")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        let err = ApiError::Status { status: 503 };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "server returned HTTP 503");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_dashboard_error_wraps_api_error() {
        let err = DashboardError::from(ApiError::Status { status: 500 });
        assert_eq!(err.to_string(), "server returned HTTP 500");
    }
}
