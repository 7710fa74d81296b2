//! HTTP client for the object API.
//!
//! `ObjectsClient` wraps a `reqwest::Client` bound to a base URL. Every
//! operation sends one request, checks the status line, and decodes the whole
//! body into a typed model. There are no retries.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::models::{DeleteConfirmation, Item, ItemId};

/// Base URL of the public object API.
pub const DEFAULT_BASE_URL: &str = "https://api.restful-api.dev/";

const OBJECTS_PATH: &str = "objects";

/// How the body of an update request is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateBodyEncoding {
    /// Send the item as a JSON object.
    #[default]
    JsonObject,

    /// Serialize the item to a string first and send that string as a JSON
    /// string literal, so the body is escaped JSON inside quotes.
    JsonStringLiteral,
}

/// Configuration for object API client behavior.
///
/// # Examples
///
/// ```
/// use restful_objects_client::{ClientConfig, UpdateBodyEncoding};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:8080/")
///     .with_timeout(Duration::from_secs(10))
///     .with_update_encoding(UpdateBodyEncoding::JsonStringLiteral);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// User agent string for API requests
    pub user_agent: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// Encoding of update request bodies
    pub update_encoding: UpdateBodyEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("restful-objects-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            update_encoding: UpdateBodyEncoding::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new builder for client configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the update body encoding.
    pub fn with_update_encoding(mut self, encoding: UpdateBodyEncoding) -> Self {
        self.update_encoding = encoding;
        self
    }
}

/// Builder for constructing `ClientConfig` instances.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new configuration builder with defaults.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn update_encoding(mut self, encoding: UpdateBodyEncoding) -> Self {
        self.config.update_encoding = encoding;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the object API.
///
/// # Examples
///
/// ```no_run
/// # use restful_objects_client::{Attributes, Item, ObjectsClient};
/// # async fn example() -> Result<(), restful_objects_client::ApiError> {
/// let client = ObjectsClient::builder().build()?;
///
/// let created = client
///     .create_item(&Item::new("Test Name").with_data(Attributes::default().with_year(2000)))
///     .await?;
/// println!("created {:?}", created.id());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ObjectsClient {
    http_client: reqwest::Client,
    base_url: Url,
    config: ClientConfig,
}

impl ObjectsClient {
    /// Create a new builder for constructing a client.
    pub fn builder() -> ObjectsClientBuilder {
        ObjectsClientBuilder::new()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the normalized base URL; its path always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List all stored objects.
    ///
    /// Sends `GET /objects` and decodes the body as an ordered sequence.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if:
    /// - The request fails at the transport level
    /// - The status is not 2xx
    /// - The body is not a JSON array of items
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let request = self.request(Method::GET, &[OBJECTS_PATH])?;
        self.execute(request, "item list").await
    }

    /// Get a single object by ID.
    ///
    /// Sends `GET /objects/{id}`. The ID is sent as one percent-encoded path
    /// segment; `""`, `.` and `..` are rejected with `ApiError::InvalidUrl`.
    pub async fn get_item(&self, id: &ItemId) -> Result<Item, ApiError> {
        let request = self.request(Method::GET, &item_segments(id)?)?;
        self.execute(request, "item").await
    }

    /// Create a new object.
    ///
    /// Sends `POST /objects` with the item as a JSON object. Any `id` on the
    /// input is ignored by the service; the returned item carries the
    /// server-assigned one.
    pub async fn create_item(&self, item: &Item) -> Result<Item, ApiError> {
        let request = self.request(Method::POST, &[OBJECTS_PATH])?.json(item);
        self.execute(request, "created item").await
    }

    /// Replace an object.
    ///
    /// Sends `PUT /objects/{id}` with the full item. The body encoding follows
    /// [`ClientConfig::update_encoding`].
    pub async fn update_item(&self, id: &ItemId, item: &Item) -> Result<Item, ApiError> {
        let request = self.request(Method::PUT, &item_segments(id)?)?;
        let request = match self.config.update_encoding {
            UpdateBodyEncoding::JsonObject => request.json(item),
            UpdateBodyEncoding::JsonStringLiteral => {
                let encoded = serde_json::to_string(item).map_err(ApiError::Encode)?;
                request.json(&encoded)
            }
        };
        self.execute(request, "updated item").await
    }

    /// Delete an object.
    ///
    /// Sends `DELETE /objects/{id}` and decodes the confirmation message.
    pub async fn delete_item(&self, id: &ItemId) -> Result<DeleteConfirmation, ApiError> {
        let request = self.request(Method::DELETE, &item_segments(id)?)?;
        self.execute(request, "delete confirmation").await
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        debug!(method = %method, url = %url, "Sending object API request");
        Ok(self.http_client.request(method, url))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Received object API response");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!(status = status.as_u16(), body = %body, "Object API returned non-success status");
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            context: context.to_string(),
            source,
        })
    }
}

/// Path segments for one object. Dot segments would be dropped by the URL
/// serializer and an empty one would address the collection instead.
fn item_segments(id: &ItemId) -> Result<[&str; 2], ApiError> {
    match id.as_str() {
        "" | "." | ".." => Err(ApiError::InvalidUrl {
            url: format!("{}/{}", OBJECTS_PATH, id),
            message: "item ID must be a non-empty path segment other than '.' or '..'".to_string(),
        }),
        raw => Ok([OBJECTS_PATH, raw]),
    }
}

/// Builder for constructing `ObjectsClient` instances.
#[derive(Debug, Default)]
pub struct ObjectsClientBuilder {
    config: Option<ClientConfig>,
}

impl ObjectsClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set the client configuration.
    ///
    /// If not set, uses `ClientConfig::default()`.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base URL does not parse, and
    /// `ApiError::Configuration` if the HTTP client cannot be created.
    pub fn build(self) -> Result<ObjectsClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| ApiError::Configuration {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(ObjectsClient {
            http_client,
            base_url,
            config,
        })
    }
}

/// Parse a base URL and make sure its path ends with `/` so relative joins
/// append instead of replacing the last segment.
pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: raw.to_string(),
            message: "URL cannot be used as a base".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
