//! ApiClient -- the concrete [`BookingApi`] implementation over `reqwest`.
//!
//! Every request carries `Content-Type: application/json`; the
//! `Authorization: Bearer <token>` header is attached only when the client
//! was constructed with a session. Requests are single-attempt with no
//! retry, no timeout, and no backoff. Any non-2xx status fails the call
//! with the numeric status; transport and decode failures collapse into
//! the same [`ApiError`] signal.
//!
//! The bearer token is wrapped in [`secrecy::SecretString`] and is only
//! exposed while building request headers.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;

use bookly_core::api::BookingApi;
use bookly_types::api::{
    AddProviderServiceRequest, AuthResponse, AuthSession, AvailabilityUpdate,
    BookingListResponse, CreateBookingRequest, LoginRequest, ProviderServiceListResponse,
    RegisterRequest, ServiceListResponse,
};
use bookly_types::booking::Booking;
use bookly_types::config::ClientConfig;
use bookly_types::error::ApiError;
use bookly_types::service::{ProviderService, Service};
use bookly_types::user::Role;

/// Thin REST client for the booking backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

// ApiClient intentionally does not derive Debug; the SecretString field
// keeps the token out of formatted output, and omitting Debug entirely
// keeps it out of everything else.

impl ApiClient {
    /// Create an unauthenticated client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Create a client from configuration, attaching the session token
    /// when one is present. The session is explicit: the client never
    /// looks tokens up from ambient storage.
    pub fn from_config(config: &ClientConfig, session: Option<&AuthSession>) -> Self {
        let client = Self::new(&config.base_url);
        match session {
            Some(session) => client.with_session(session),
            None => client,
        }
    }

    /// Attach a session's bearer token.
    pub fn with_session(self, session: &AuthSession) -> Self {
        self.with_token(SecretString::from(session.token.clone()))
    }

    /// Attach a bearer token directly.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Build the full URL for an endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The one low-level request path: method + endpoint, JSON content
    /// type always, bearer token when present.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            builder = builder.header(
                AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            );
        }
        builder
    }

    /// Reject any non-success status, carrying the numeric code.
    fn check_status(status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
            })
        }
    }

    /// Send a request and parse the JSON response body.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(response.status())?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request, checking the status and discarding the body.
    ///
    /// Used for mutations whose response the caller never reads (the
    /// dashboards re-fetch collections instead of patching them locally).
    async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(response.status())
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &body).await
    }

    /// `POST /auth/register`
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        self.post_json("/auth/register", &body).await
    }
}

impl BookingApi for ApiClient {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        // The collection is wrapped under a named field; a missing field
        // deserializes as empty, not as an error.
        let response: ServiceListResponse =
            self.send_json(self.request(Method::GET, "/api/services")).await?;
        Ok(response.services)
    }

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let response: BookingListResponse =
            self.send_json(self.request(Method::GET, "/bookings/me")).await?;
        Ok(response.bookings)
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "/api/bookings").json(request))
            .await
    }

    async fn provider_services(
        &self,
        provider_id: &str,
    ) -> Result<Vec<ProviderService>, ApiError> {
        let builder = self
            .request(Method::GET, "/api/provider-services")
            .query(&[("provider_id", provider_id)]);
        let response: ProviderServiceListResponse = self.send_json(builder).await?;
        Ok(response.provider_services)
    }

    async fn add_provider_service(
        &self,
        provider_id: &str,
        service_id: &str,
    ) -> Result<(), ApiError> {
        let body = AddProviderServiceRequest {
            provider_id: provider_id.to_string(),
            service_id: service_id.to_string(),
        };
        self.send_unit(self.request(Method::POST, "/api/provider-services").json(&body))
            .await
    }

    async fn remove_provider_service(&self, offering_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/provider-services/{offering_id}");
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn set_availability(&self, user_id: &str, is_available: bool) -> Result<(), ApiError> {
        let path = format!("/api/users/{user_id}/availability");
        let body = AvailabilityUpdate { is_available };
        self.send_unit(self.request(Method::PATCH, &path).json(&body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> ApiClient {
        ApiClient::new("http://localhost:5000")
    }

    fn make_authed_client() -> ApiClient {
        make_client().with_token(SecretString::from("tok-abc"))
    }

    #[test]
    fn test_url_building() {
        let client = make_client();
        assert_eq!(
            client.url("/api/services"),
            "http://localhost:5000/api/services"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/auth/login"), "http://localhost:5000/auth/login");
    }

    #[test]
    fn test_request_without_token_omits_authorization() {
        let client = make_client();
        let request = client.request(Method::GET, "/api/services").build().unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_with_token_attaches_bearer() {
        let client = make_authed_client();
        let request = client.request(Method::GET, "/bookings/me").build().unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-abc"
        );
    }

    #[test]
    fn test_create_booking_request_shape() {
        let client = make_authed_client();
        let body = CreateBookingRequest {
            service_id: "svc-1".to_string(),
            scheduled_time: "2025-01-01T10:00".to_string(),
        };
        let request = client
            .request(Method::POST, "/api/bookings")
            .json(&body)
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/bookings");
        let bytes = request.body().unwrap().as_bytes().unwrap();
        assert_eq!(
            std::str::from_utf8(bytes).unwrap(),
            r#"{"service_id":"svc-1","scheduled_time":"2025-01-01T10:00"}"#
        );
    }

    #[test]
    fn test_availability_request_shape() {
        let client = make_authed_client();
        let request = client
            .request(Method::PATCH, "/api/users/42/availability")
            .json(&AvailabilityUpdate { is_available: true })
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/users/42/availability"
        );
        let bytes = request.body().unwrap().as_bytes().unwrap();
        assert_eq!(
            std::str::from_utf8(bytes).unwrap(),
            r#"{"is_available":true}"#
        );
    }

    #[test]
    fn test_provider_services_query_param() {
        let client = make_authed_client();
        let request = client
            .request(Method::GET, "/api/provider-services")
            .query(&[("provider_id", "42")])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/provider-services?provider_id=42"
        );
    }

    #[test]
    fn test_check_status_accepts_2xx() {
        assert!(ApiClient::check_status(StatusCode::OK).is_ok());
        assert!(ApiClient::check_status(StatusCode::CREATED).is_ok());
        assert!(ApiClient::check_status(StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn test_check_status_rejects_non_2xx_with_code() {
        let err = ApiClient::check_status(StatusCode::UNAUTHORIZED).unwrap_err();
        assert_eq!(err.status(), Some(401));

        let err = ApiClient::check_status(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_from_config_without_session() {
        let config = ClientConfig::default();
        let client = ApiClient::from_config(&config, None);
        let request = client.request(Method::GET, "/api/services").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_from_config_with_session() {
        use bookly_types::user::{Role, User};

        let config = ClientConfig::default();
        let session = AuthSession {
            token: "tok-xyz".to_string(),
            user: User {
                id: "7".to_string(),
                name: "Ola".to_string(),
                email: "ola@example.com".to_string(),
                role: Role::Client,
                is_available: None,
            },
        };
        let client = ApiClient::from_config(&config, Some(&session));
        let request = client.request(Method::GET, "/bookings/me").build().unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-xyz"
        );
    }
}
