//! HTTP client for the what-to-wear backend.
//!
//! Wraps `reqwest`, attaches the bearer session, unwraps the uniform
//! response envelope and normalizes every failure into
//! [`ClientError`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;
use wardrobe_types::envelope::ApiEnvelope;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::{MemorySessionStore, SharedSessionStore, StoredSession};

/// Details handed to the unauthorized handler when the server reports 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedEvent {
    /// HTTP status, always 401.
    pub status: u16,
    /// Application error code, or the HTTP status without an envelope.
    pub code: i64,
    /// Server-provided message, or "Unauthorized".
    pub message: String,
    /// Request path that was rejected.
    pub path: String,
}

type UnauthorizedHandler = dyn Fn(&UnauthorizedEvent) + Send + Sync;

/// Per-request options for [`WardrobeClient::request`].
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// Extra headers merged last; callers win on conflict.
    pub headers: Vec<(String, String)>,
    /// Serialized to the request body when set.
    pub json: Option<Value>,
    /// Raw body passthrough, used when `json` is unset.
    pub body: Option<String>,
    /// Suppress the Authorization header (public endpoints).
    pub skip_auth: bool,
}

impl RequestOptions {
    /// Options carrying a JSON body.
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ClientError> {
        let json = serde_json::to_value(body).map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(Self {
            json: Some(json),
            ..Self::default()
        })
    }

    /// Options for a public endpoint: no credential attached.
    pub fn public() -> Self {
        Self {
            skip_auth: true,
            ..Self::default()
        }
    }
}

/// Typed async client for the wardrobe backend.
///
/// Holds its configuration, session store and optional unauthorized
/// handler explicitly; construct one per backend and share it across
/// tasks (clones share the connection pool and session store).
#[derive(Clone)]
pub struct WardrobeClient {
    http: reqwest::Client,
    base_url: String,
    store: SharedSessionStore,
    on_unauthorized: Option<Arc<UnauthorizedHandler>>,
}

impl WardrobeClient {
    /// Build a client from configuration.
    ///
    /// Fails when the base URL does not parse or the HTTP backend cannot
    /// initialize. A trailing slash on the base URL is normalized away.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        // Validate up front so request() can concatenate paths blindly.
        Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store: Arc::new(MemorySessionStore::default()),
            on_unauthorized: None,
        })
    }

    /// Client against `API_BASE_URL`, or the local default.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Replace the session store, e.g. with a
    /// [`FileSessionStore`](crate::FileSessionStore).
    pub fn with_session_store(mut self, store: SharedSessionStore) -> Self {
        self.store = store;
        self
    }

    /// Register a handler invoked exactly once per 401 response.
    ///
    /// The handler owns session-invalidation policy; the client itself
    /// never clears the stored session on a 401.
    pub fn on_unauthorized<F>(mut self, handler: F) -> Self
    where
        F: Fn(&UnauthorizedEvent) + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Arc::new(handler));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_store(&self) -> &SharedSessionStore {
        &self.store
    }

    /// Currently stored session, if any.
    pub async fn session(&self) -> Result<Option<StoredSession>, ClientError> {
        self.store.load().await
    }

    /// Perform a request and return the response envelope.
    ///
    /// Success bodies that are not envelope-shaped are normalized into a
    /// synthetic success envelope, so backends answering with unwrapped
    /// payloads need no special-casing by callers.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
    ) -> Result<ApiEnvelope<Value>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !opts.skip_auth {
            if let Some(session) = self.store.load().await? {
                let bearer = format!("Bearer {}", session.token);
                let value = HeaderValue::from_str(&bearer).map_err(|_| ClientError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                })?;
                headers.insert(AUTHORIZATION, value);
            }
        }
        for (name, value) in &opts.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|_| ClientError::InvalidHeader {
                    name: name.clone(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader {
                name: name.clone(),
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(json) = &opts.json {
            let body = serde_json::to_string(json).map_err(|err| ClientError::Decode(err.to_string()))?;
            builder = builder.body(body);
        } else if let Some(body) = opts.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let raw = if is_json {
            // Unparseable JSON degrades to an empty object, mirroring the
            // best-effort message extraction on the error path.
            response
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::Object(Default::default()))
        } else {
            Value::String(response.text().await.unwrap_or_default())
        };

        if !status.is_success() {
            return Err(self.failure(status.as_u16(), path, raw));
        }

        match serde_json::from_value::<ApiEnvelope<Value>>(raw.clone()) {
            Ok(envelope) => Ok(envelope),
            Err(_) => {
                tracing::debug!("Non-envelope success body from {}, synthesizing", path);
                Ok(ApiEnvelope::success(raw))
            }
        }
    }

    /// Perform a request and unwrap the envelope payload into `T`.
    ///
    /// Fails when the envelope code is not the success sentinel, when a
    /// success envelope carries no payload, or when the payload does not
    /// decode into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, ClientError> {
        let envelope = self.request(method, path, opts).await?;
        let data = Self::unwrap_envelope(path, envelope)?;
        serde_json::from_value(data).map_err(|err| ClientError::Decode(format!("{path}: {err}")))
    }

    /// Perform a request for a no-content operation.
    ///
    /// The envelope code is still checked, but a missing payload is fine
    /// (password changes, deletes, wear records).
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
    ) -> Result<(), ClientError> {
        let envelope = self.request(method, path, opts).await?;
        if !envelope.is_success() {
            return Err(Self::envelope_error(envelope));
        }
        Ok(())
    }

    /// GET `path`, unwrapping the payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(Method::GET, path, RequestOptions::default()).await
    }

    /// POST a JSON body to `path`, unwrapping the payload.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, RequestOptions::json(body)?).await
    }

    /// PUT a JSON body to `path`, unwrapping the payload.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PUT, path, RequestOptions::json(body)?).await
    }

    /// PATCH a JSON body to `path`, unwrapping the payload.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PATCH, path, RequestOptions::json(body)?).await
    }

    /// DELETE `path`, unwrapping the payload.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(Method::DELETE, path, RequestOptions::default()).await
    }

    /// Map a non-2xx response to an error, firing the unauthorized
    /// handler on 401.
    fn failure(&self, status: u16, path: &str, raw: Value) -> ClientError {
        let envelope = serde_json::from_value::<ApiEnvelope<Value>>(raw.clone()).ok();

        if status == 401 {
            let (code, message) = envelope
                .map(|env| (env.code, env.message))
                .unwrap_or_else(|| (i64::from(status), "Unauthorized".to_string()));
            tracing::warn!("Unauthorized response from {}", path);
            let event = UnauthorizedEvent {
                status,
                code,
                message: message.clone(),
                path: path.to_string(),
            };
            if let Some(handler) = &self.on_unauthorized {
                handler(&event);
            }
            return ClientError::Unauthorized {
                status,
                code,
                message,
                path: path.to_string(),
            };
        }

        if let Some(env) = envelope {
            let message = if env.message.is_empty() {
                format!("Request failed: {status}")
            } else {
                env.message
            };
            tracing::warn!("API error from {} ({}): code {}", path, status, env.code);
            return ClientError::Api {
                status,
                code: env.code,
                message,
                body: env.data,
            };
        }

        let message = match &raw {
            Value::String(text) if !text.is_empty() => text.clone(),
            _ => format!("Request failed: {status}"),
        };
        let body = match raw {
            Value::Object(ref map) if map.is_empty() => None,
            Value::String(ref text) if text.is_empty() => None,
            other => Some(other),
        };
        tracing::warn!("Request to {} failed with status {}", path, status);
        ClientError::Api {
            status,
            code: i64::from(status),
            message,
            body,
        }
    }

    fn unwrap_envelope(path: &str, envelope: ApiEnvelope<Value>) -> Result<Value, ClientError> {
        if !envelope.is_success() {
            return Err(Self::envelope_error(envelope));
        }
        envelope
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| ClientError::MissingData {
                path: path.to_string(),
            })
    }

    /// Envelope-level application error: the transport said 2xx but the
    /// envelope code disagrees.
    fn envelope_error(envelope: ApiEnvelope<Value>) -> ClientError {
        let message = if envelope.message.is_empty() {
            "Request error".to_string()
        } else {
            envelope.message
        };
        ClientError::Api {
            status: 200,
            code: envelope.code,
            message,
            body: envelope.data,
        }
    }
}
