//! Main client implementation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::api::{EnvironmentsApi, EventsApi, IntegrationsApi, SubscribersApi, WorkflowsApi};
use crate::config::{ClientBuilder, ClientConfig};
use crate::dispatch::{self, RawResponse};
use crate::error::Result;
use crate::request::{RequestSpec, build_request};
use crate::types::DataResponse;

/// Novu API client.
///
/// Cheap to clone; clones share configuration and the connection pool.
///
/// # Example
///
/// ```no_run
/// use novu_client::{NovuClient, TriggerEventRequest};
///
/// # async fn example() -> novu_client::Result<()> {
/// let client = NovuClient::builder()
///     .api_key("secret")
///     .build()?;
///
/// let event = client
///     .events()
///     .trigger(TriggerEventRequest::new("welcome", "subscriber-1"))
///     .await?;
/// println!("transaction: {:?}", event.transaction_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NovuClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
    /// Cancels every call made through this handle.
    cancel: Option<CancellationToken>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Immutable configuration.
    config: ClientConfig,
}

impl NovuClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the hosted backend.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from `NOVU_API_KEY` / `NOVU_BACKEND_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from a validated configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            crate::error::Error::Config(format!("failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
            cancel: None,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Return a handle whose calls abort when `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the events API.
    pub fn events(&self) -> EventsApi {
        EventsApi::new(self.clone())
    }

    /// Access the subscribers API.
    pub fn subscribers(&self) -> SubscribersApi {
        SubscribersApi::new(self.clone())
    }

    /// Access the integrations API.
    pub fn integrations(&self) -> IntegrationsApi {
        IntegrationsApi::new(self.clone())
    }

    /// Access the workflows API.
    pub fn workflows(&self) -> WorkflowsApi {
        WorkflowsApi::new(self.clone())
    }

    /// Access the environments API.
    pub fn environments(&self) -> EnvironmentsApi {
        EnvironmentsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Send `spec` and decode the body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let raw = self.round_trip(&spec).await?;
        dispatch::decode(&raw)
    }

    /// Send `spec` and unwrap the `{"data": ..}` envelope.
    pub(crate) async fn execute_data<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let response: DataResponse<T> = self.execute(spec).await?;
        Ok(response.data)
    }

    /// Send `spec` and discard the body.
    pub async fn execute_unit(&self, spec: RequestSpec) -> Result<()> {
        self.round_trip(&spec).await.map(drop)
    }

    async fn round_trip(&self, spec: &RequestSpec) -> Result<RawResponse> {
        let request = build_request(&self.inner.config, spec)?;
        let raw = dispatch::send(&self.inner.http, request, self.cancel.as_ref()).await?;
        dispatch::classify(raw, spec.expected_status())
    }
}

impl std::fmt::Debug for NovuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NovuClient")
            .field("config", &self.inner.config)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}
