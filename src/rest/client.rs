//! Scryfall REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use url::Url;

use crate::auth::Credentials;
use crate::error::{ApiError, ScryfallError};
use crate::rate_limit::RateLimiter;
use crate::rest::endpoints::{DEFAULT_TIMEOUT, SCRYFALL_BASE_URL, default_user_agent, with_query};
use crate::rest::list::List;

/// The Scryfall REST API client.
///
/// Every request goes through one dispatch path: the path is resolved against
/// the base URL, identification and authorization headers are attached, one
/// rate-limiter admission is taken, and the response is decoded either into
/// the requested type (HTTP 200) or into an [`ApiError`] (anything else).
/// Exactly one HTTP call is made per operation; nothing is retried.
///
/// Cloning the client is cheap and clones share the rate limiter.
///
/// # Example
///
/// ```rust,no_run
/// use scryfall_api_client::rest::ScryfallClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ScryfallClient::new()?;
///
///     let card = client.get_random_card().await?;
///     println!("Random card: {}", card.name);
///
///     Ok(())
/// }
/// ```
///
/// For account and OAuth endpoints, provide a secret:
///
/// ```rust,no_run
/// use scryfall_api_client::rest::ScryfallClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ScryfallClient::builder()
///         .grant_secret("grant_secret")
///         .build()?;
///
///     let account = client.get_account().await?;
///     println!("Signed in as {}", account.username);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ScryfallClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    user_agent: HeaderValue,
    credentials: Credentials,
    authorization: Option<HeaderValue>,
    rate_limiter: Option<Arc<RateLimiter>>,
}

impl ScryfallClient {
    /// Create a new anonymous client with default settings.
    pub fn new() -> Result<Self, ScryfallError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> ScryfallClientBuilder {
        ScryfallClientBuilder::new()
    }

    /// The base URL relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured credential.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The rate limiter, if rate limiting is enabled.
    pub fn rate_limiter(&self) -> Option<&RateLimiter> {
        self.rate_limiter.as_deref()
    }

    /// Resolve a path (optionally with a query string) against the base URL.
    ///
    /// Absolute URLs, such as a list's `next_page`, resolve to themselves.
    pub fn resolve(&self, path: &str) -> Result<Url, ScryfallError> {
        Ok(self.base_url.join(path)?)
    }

    /// Make a GET request and decode the response body into `T`.
    pub async fn get<T>(&self, path: &str) -> Result<T, ScryfallError>
    where
        T: DeserializeOwned,
    {
        self.send::<T, ()>(Method::GET, path, None).await
    }

    /// Make a POST request with an optional JSON body and decode the response into `T`.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ScryfallError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, body).await
    }

    /// GET a list endpoint and decode only its `data` array into `T`.
    ///
    /// The envelope is decoded first and its raw `data` is decoded again
    /// into `T`. Pagination metadata is discarded; use [`list_page`] to keep it.
    ///
    /// [`list_page`]: ScryfallClient::list_page
    pub async fn list_get<T>(&self, path: &str) -> Result<T, ScryfallError>
    where
        T: DeserializeOwned,
    {
        let list: List<Box<RawValue>> = self.get(path).await?;
        if !list.warnings.is_empty() {
            tracing::warn!(path, warnings = ?list.warnings, "list response carried warnings");
        }
        Ok(serde_json::from_str(list.data.get())?)
    }

    /// GET a list endpoint and keep the whole envelope.
    ///
    /// The client never follows pages on its own: pass
    /// [`List::next_page`] back to this method to fetch the next one.
    pub async fn list_page<T>(&self, path: &str) -> Result<List<T>, ScryfallError>
    where
        T: DeserializeOwned,
    {
        self.get(path).await
    }

    /// Make a GET request with URL-encoded query parameters.
    pub(crate) async fn get_with_params<T, Q>(&self, path: &str, params: &Q) -> Result<T, ScryfallError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let path = with_query(path, params)?;
        self.get(&path).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ScryfallError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;

        let mut request = self
            .http_client
            .request(method.clone(), url.clone())
            .header(USER_AGENT, self.user_agent.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.clone());
        }

        if let Some(body) = body {
            let body = serde_json::to_vec(body)?;
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        self.wait_for_admission().await;

        tracing::debug!(%method, %url, "sending request");
        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Take one admission from the rate limiter, waiting if necessary.
    async fn wait_for_admission(&self) {
        let Some(limiter) = &self.rate_limiter else {
            return;
        };

        if let Err(wait_time) = limiter.try_acquire() {
            tracing::trace!(?wait_time, "waiting for rate limiter");
            limiter.acquire().await;
        }
    }

    /// Parse a response from the Scryfall API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, ScryfallError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::OK {
            return Ok(serde_json::from_slice(&body)?);
        }

        tracing::debug!(%status, "request failed");
        match serde_json::from_slice::<ApiError>(&body) {
            Ok(api_error) => Err(ScryfallError::Api(api_error)),
            Err(source) => Err(ScryfallError::ErrorBody {
                status: status.as_u16(),
                source,
            }),
        }
    }
}

impl std::fmt::Debug for ScryfallClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScryfallClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("credentials", &self.credentials)
            .field("rate_limiter", &self.rate_limiter)
            .finish()
    }
}

/// Builder for [`ScryfallClient`].
pub struct ScryfallClientBuilder {
    base_url: String,
    user_agent: Option<String>,
    client_secret: Option<SecretString>,
    grant_secret: Option<SecretString>,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
    rate_limiter: Option<RateLimiter>,
}

impl ScryfallClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SCRYFALL_BASE_URL.to_string(),
            user_agent: None,
            client_secret: None,
            grant_secret: None,
            http_client: None,
            timeout: DEFAULT_TIMEOUT,
            rate_limiter: Some(RateLimiter::default()),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Authenticate as the application that owns this client secret.
    ///
    /// Cannot be combined with [`grant_secret`](Self::grant_secret).
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::from(client_secret.into()));
        self
    }

    /// Authenticate with the rights of the account behind this OAuth grant secret.
    ///
    /// Cannot be combined with [`client_secret`](Self::client_secret).
    pub fn grant_secret(mut self, grant_secret: impl Into<String>) -> Self {
        self.grant_secret = Some(SecretString::from(grant_secret.into()));
        self
    }

    /// Replace both secrets with an already validated credential.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        let (client_secret, grant_secret) = match credentials {
            Credentials::None => (None, None),
            Credentials::Application(secret) => (Some(secret), None),
            Credentials::AccountGrant(secret) => (None, Some(secret)),
        };
        self.client_secret = client_secret;
        self.grant_secret = grant_secret;
        self
    }

    /// Use a preconfigured HTTP client.
    ///
    /// The builder's timeout is not applied to a custom client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the total time allowed for one HTTP call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the rate limiter. `None` disables client-side rate limiting.
    pub fn rate_limiter(mut self, limiter: Option<RateLimiter>) -> Self {
        self.rate_limiter = limiter;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`ScryfallError::MultipleSecrets`] if both a client secret
    /// and a grant secret were set.
    pub fn build(self) -> Result<ScryfallClient, ScryfallError> {
        let credentials = Credentials::from_secrets(self.client_secret, self.grant_secret)?;
        let base_url = parse_base_url(&self.base_url)?;

        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| ScryfallError::InvalidHeader(format!("user agent {user_agent:?}")))?;

        let authorization = credentials
            .bearer_token()
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ScryfallError::InvalidHeader("bearer token".to_string()))?;
                value.set_sensitive(true);
                Ok::<_, ScryfallError>(value)
            })
            .transpose()?;

        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(ScryfallClient {
            http_client,
            base_url,
            user_agent,
            credentials,
            authorization,
            rate_limiter: self.rate_limiter.map(Arc::new),
        })
    }
}

impl Default for ScryfallClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the base URL, making sure its path ends with `/` so relative paths
/// resolve beneath it rather than replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
