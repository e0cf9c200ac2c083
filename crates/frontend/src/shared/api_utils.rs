//! API utilities for client-backend communication
//!
//! Every call goes through [`ApiContext`], which knows the backend origin
//! and the current [`Session`]. Responses are unwrapped from the
//! `{ success, data, message, pagination }` envelope here, so wrappers only
//! deal with typed payloads or a [`ClientError`].

use contracts::shared::api::{ApiEnvelope, Page};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::ClientConfig;
use crate::shared::error::ClientError;
use crate::system::auth::Session;

/// Get the base URL for API requests
///
/// Constructs the API origin from the current window location, using the
/// configured backend port.
///
/// # Returns
/// - API origin like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Encode a user-provided id for use as a path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Serialize list parameters into a query string (without `?`)
pub fn query_string<Q: Serialize>(query: &Q) -> Result<String, ClientError> {
    serde_qs::to_string(query).map_err(|e| ClientError::Parse(format!("query string: {}", e)))
}

/// Plain `{page, limit}` list parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Clone)]
pub struct ApiContext {
    origin: String,
    prefix: String,
    session: Session,
}

impl ApiContext {
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        let origin = match &config.api.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => api_base(config.api.port),
        };
        Self {
            origin,
            prefix: config.api.prefix.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a full API URL from a path like `/bins/BIN-1`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.origin, self.prefix, path)
    }

    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, ClientError> {
        let qs = query_string(query)?;
        if qs.is_empty() {
            Ok(self.url(path))
        } else {
            Ok(format!("{}?{}", self.url(path), qs))
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("Accept", "application/json")
            .header("X-User-Id", &self.session.user_id);
        match self.session.authorization_header() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    /// GET a list endpoint and return one page
    pub async fn get_page<T, Q>(&self, path: &str, query: &Q) -> Result<Page<T>, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let url = self.url_with_query(path, query)?;
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let envelope: ApiEnvelope<Vec<T>> = read_envelope(&url, response).await?;
        envelope.into_page().map_err(|message| {
            log::warn!("GET {} rejected: {}", url, message);
            ClientError::Application(message)
        })
    }

    /// GET a single record
    pub async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let envelope: ApiEnvelope<T> = read_envelope(&url, response).await?;
        required_data(&url, envelope)
    }

    /// POST a JSON body, returning the created record
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ClientError::Parse(format!("Failed to serialize request: {}", e)))?;
        let response = request.send().await.map_err(|e| transport_error(&url, e))?;
        let envelope: ApiEnvelope<T> = read_envelope(&url, response).await?;
        required_data(&url, envelope)
    }

    /// PATCH a partial JSON body, returning the updated record
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("PATCH {}", url);
        let request = self
            .authorize(Request::patch(&url))
            .json(body)
            .map_err(|e| ClientError::Parse(format!("Failed to serialize request: {}", e)))?;
        let response = request.send().await.map_err(|e| transport_error(&url, e))?;
        let envelope: ApiEnvelope<T> = read_envelope(&url, response).await?;
        required_data(&url, envelope)
    }
}

fn transport_error(url: &str, e: gloo_net::Error) -> ClientError {
    log::error!("Request to {} failed: {}", url, e);
    ClientError::Transport(e.to_string())
}

async fn read_envelope<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<ApiEnvelope<T>, ClientError> {
    if !response.ok() {
        let status = response.status();
        // error bodies usually carry the envelope with a message
        let message = response
            .json::<ApiEnvelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| response.status_text());
        log::warn!("{} answered HTTP {}: {}", url, status, message);
        return Err(ClientError::Http { status, message });
    }
    response.json::<ApiEnvelope<T>>().await.map_err(|e| {
        log::error!("Failed to parse response of {}: {}", url, e);
        ClientError::Parse(e.to_string())
    })
}

fn required_data<T>(url: &str, envelope: ApiEnvelope<T>) -> Result<T, ClientError> {
    match envelope.into_data() {
        Ok(Some(data)) => Ok(data),
        Ok(None) => Err(ClientError::Parse(format!("{} returned no data", url))),
        Err(message) => {
            log::warn!("{} rejected: {}", url, message);
            Err(ClientError::Application(message))
        }
    }
}
