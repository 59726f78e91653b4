use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::actions::NewRequest;
use crate::api::ApiError;
use crate::model::{CurrentUser, ServiceRecord, UserRole};

/// Client for the FixitNow server.
///
/// Holds the session cookie issued by `/signin`; all `/api/*` calls ride on
/// it. Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ServicesResponse {
    #[serde(default)]
    services: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize)]
struct RequestsResponse {
    #[serde(default)]
    requests: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    /// Create a client for the given server base URL (no trailing slash).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Extract the server's structured error message, or fall back to the
    /// status code when the body is not the usual `{"error": ...}` shape.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| status.to_string());
        Err(ApiError::server(status, message))
    }

    // === Session probe ===

    /// Whether a server session is active. Any failure, transport or
    /// otherwise, reads as "not signed in"; navigation stays resilient.
    pub async fn is_signed_in(&self) -> bool {
        match self.http.get(self.url("/api/user-stats")).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                debug!(%error, "session probe failed");
                false
            }
        }
    }

    /// Identity and role of the caller, or `None` when there is no session.
    /// Errors are swallowed by design; this never fails the caller.
    pub async fn current_user(&self) -> Option<CurrentUser> {
        match self.http.get(self.url("/api/current-user")).send().await {
            Ok(response) if response.status().is_success() => response.json().await.ok(),
            Ok(response) => {
                debug!(status = %response.status(), "no current user");
                None
            }
            Err(error) => {
                warn!(%error, "current-user probe failed");
                None
            }
        }
    }

    // === Service list fetchers ===

    /// The caller's full visible service list. Always the complete current
    /// set; the dashboards re-derive everything from it.
    pub async fn fetch_services(&self) -> Result<Vec<ServiceRecord>, ApiError> {
        let response = self.http.get(self.url("/api/get-services")).send().await?;
        let body: ServicesResponse = Self::check(response).await?.json().await?;
        Ok(body.services)
    }

    /// The unassigned pending pool shown to providers.
    pub async fn available_requests(&self) -> Result<Vec<ServiceRecord>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/available-requests"))
            .send()
            .await?;
        let body: RequestsResponse = Self::check(response).await?.json().await?;
        Ok(body.requests)
    }

    // === Mutations ===

    pub async fn create_service_request(&self, request: &NewRequest) -> Result<(), ApiError> {
        let body = json!({
            "service_type": request.service_type,
            "priority": request.priority.as_wire(),
            "description": request.description,
            "preferred_date": request.preferred_date,
        });
        self.post_json("/api/create-service-request", &body).await
    }

    /// Claim an unassigned pending request for the signed-in provider.
    pub async fn assign_service_provider(&self, service_id: &str) -> Result<(), ApiError> {
        let body = json!({ "service_id": service_id });
        self.post_json("/api/assign-service-provider", &body).await
    }

    /// Move a scheduled job to in-progress, stamping the start time.
    pub async fn start_job(&self, service_id: &str) -> Result<(), ApiError> {
        let start_date = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        let body = json!({
            "service_id": service_id,
            "status": "in_progress",
            "start_date": start_date,
        });
        self.post_json("/api/update-service-status", &body).await
    }

    /// Finish an in-progress job with its final cost.
    pub async fn complete_service(
        &self,
        service_id: &str,
        cost: f64,
        notes: &str,
    ) -> Result<(), ApiError> {
        let body = json!({
            "service_id": service_id,
            "cost": cost,
            "notes": notes,
        });
        self.post_json("/api/complete-service", &body).await
    }

    /// Move a request back to scheduled with a new preferred date.
    pub async fn reschedule(&self, service_id: &str, preferred_date: &str) -> Result<(), ApiError> {
        let body = json!({
            "service_id": service_id,
            "status": "scheduled",
            "preferred_date": preferred_date,
        });
        self.post_json("/api/update-service-status", &body).await
    }

    /// Attach a 1–5 rating to a completed service.
    pub async fn rate_service(&self, service_id: &str, rating: u8) -> Result<(), ApiError> {
        let body = json!({
            "service_id": service_id,
            "status": "completed",
            "rating": rating,
        });
        self.post_json("/api/update-service-status", &body).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    // === Account ===

    /// Establish a session. The server answers the form post with a redirect
    /// on success and re-renders the sign-in page on bad credentials, so a
    /// post-probe confirms the session rather than the response body.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<bool, ApiError> {
        let response = self
            .http
            .post(self.url("/signin"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(self.is_signed_in().await)
    }

    /// End the server session. The cookie store drops the session cookie on
    /// the server's response.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.url("/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Register a new account. The server may answer with a redirect
    /// (success) or a JSON error body.
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
        role: UserRole,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/signup"))
            .form(&[
                ("username", username),
                ("password", password),
                ("confirm_password", confirm_password),
                ("user_type", role.as_wire()),
            ])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.url("/api/get-services"),
            "http://localhost:5000/api/get-services"
        );
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Not signed in"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Not signed in"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }

    #[test]
    fn test_services_response_defaults_to_empty() {
        let body: ServicesResponse = serde_json::from_str("{}").unwrap();
        assert!(body.services.is_empty());
    }

    /// One-shot server answering every request with an empty 401.
    async fn spawn_unauthorized_server() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket
                        .write_all(
                            b"HTTP/1.1 401 UNAUTHORIZED\r\n\
                              content-length: 0\r\n\
                              connection: close\r\n\r\n",
                        )
                        .await;
                });
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_session_probe_swallows_unauthorized() {
        let client = ApiClient::new(&spawn_unauthorized_server().await).unwrap();
        assert!(client.current_user().await.is_none());
        assert!(!client.is_signed_in().await);
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::server(StatusCode::UNAUTHORIZED, "Not signed in");
        assert_eq!(
            error.to_string(),
            "server error (401 Unauthorized): Not signed in"
        );
    }
}
