// Async HTTP client for the facility-management REST API.
//
// Base path: /api/
// One request per call: no retries, no cancellation, timeout only if
// the transport config sets one.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, NETWORK_ERROR_MESSAGE};
use crate::resource::Resource;
use crate::transport::TransportConfig;
use crate::types::{DeleteResponse, HealthStatus};

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the facility backend.
///
/// Maps each [`Resource`] to list / get / create / update / delete and
/// exposes the settings singleton. All bodies are JSON; every 2xx body
/// is decoded into the caller's type, every non-2xx becomes
/// [`Error::Api`].
#[derive(Debug, Clone)]
pub struct FacilityClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FacilityClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a backend URL and transport config.
    ///
    /// `base_url` may be the server root (`http://host:5000`) or already
    /// point at the API (`http://host:5000/api`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Normalize to `{root}/api` without a trailing slash.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(raw.to_owned()));
        }

        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api") {
            url.set_path(&path);
        } else {
            url.set_path(&format!("{path}/api"));
        }

        Ok(url)
    }

    /// The normalized API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append percent-encoded path segments to the API base.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // The constructor rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn delete_request<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse { error: Some(message) }) => message,
            Ok(ErrorResponse { error: None }) => status.as_u16().to_string(),
            Err(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        };

        debug!(status = status.as_u16(), %message, "request rejected");
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Collections ──────────────────────────────────────────────────

    /// `GET /api/{collection}`
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, Error> {
        self.get(self.url(&[resource.path()])).await
    }

    /// `GET /api/{collection}/{id}`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
    ) -> Result<T, Error> {
        self.get(self.url(&[resource.path(), id])).await
    }

    /// `POST /api/{collection}` with the entity minus its id.
    pub async fn create<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        resource: Resource,
        body: &B,
    ) -> Result<T, Error> {
        self.post(self.url(&[resource.path()]), body).await
    }

    /// `PUT /api/{collection}/{id}` with the changed fields only.
    pub async fn update<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        resource: Resource,
        id: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.put(self.url(&[resource.path(), id]), body).await
    }

    /// `DELETE /api/{collection}/{id}`
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<DeleteResponse, Error> {
        self.delete_request(self.url(&[resource.path(), id])).await
    }

    // ── Settings singleton ───────────────────────────────────────────

    /// `GET /api/settings`
    pub async fn get_settings<T: DeserializeOwned>(&self) -> Result<T, Error> {
        self.get(self.url(&["settings"])).await
    }

    /// `PUT /api/settings` with a full or partial settings object.
    pub async fn update_settings<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        body: &B,
    ) -> Result<T, Error> {
        self.put(self.url(&["settings"]), body).await
    }

    // ── Liveness ─────────────────────────────────────────────────────

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus, Error> {
        self.get(self.url(&["health"])).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> FacilityClient {
        FacilityClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn root_url_gets_api_suffix() {
        assert_eq!(
            client("http://localhost:5000").base_url().as_str(),
            "http://localhost:5000/api"
        );
        assert_eq!(
            client("http://localhost:5000/").base_url().as_str(),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn api_url_is_kept() {
        assert_eq!(
            client("http://localhost:5000/api/").base_url().as_str(),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn proxied_prefix_is_kept() {
        assert_eq!(
            client("https://example.org/facility").base_url().as_str(),
            "https://example.org/facility/api"
        );
    }

    #[test]
    fn entity_url_encodes_id() {
        let c = client("http://localhost:5000");
        assert_eq!(
            c.url(&[Resource::HealthRecords.path(), "H001"]).as_str(),
            "http://localhost:5000/api/health-records/H001"
        );
        assert_eq!(
            c.url(&[Resource::Animals.path(), "A 1/2"]).as_str(),
            "http://localhost:5000/api/animals/A%201%2F2"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let err = FacilityClient::from_reqwest("mailto:vet@example.org", reqwest::Client::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }
}
