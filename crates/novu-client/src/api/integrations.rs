//! Integrations API.

use reqwest::StatusCode;

use crate::client::NovuClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{ChannelLimit, CreateIntegrationRequest, Integration, UpdateIntegrationRequest};

/// Integrations API client.
pub struct IntegrationsApi {
    client: NovuClient,
}

impl IntegrationsApi {
    pub(crate) fn new(client: NovuClient) -> Self {
        Self { client }
    }

    /// Create an integration.
    pub async fn create(&self, request: CreateIntegrationRequest) -> Result<Integration> {
        let spec = RequestSpec::post(["integrations"])
            .json(&request)?
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }

    /// List all integrations.
    pub async fn list(&self) -> Result<Vec<Integration>> {
        self.client.execute_data(RequestSpec::get(["integrations"])).await
    }

    /// List active integrations.
    pub async fn active(&self) -> Result<Vec<Integration>> {
        self.client.execute_data(RequestSpec::get(["integrations", "active"])).await
    }

    /// Whether a provider supports inbound webhooks.
    pub async fn webhook_support_status(&self, provider_id: &str) -> Result<bool> {
        let spec = RequestSpec::get(["integrations", "webhook", "provider", provider_id, "status"]);
        self.client.execute_data(spec).await
    }

    /// Update an integration.
    pub async fn update(
        &self,
        integration_id: &str,
        request: UpdateIntegrationRequest,
    ) -> Result<Integration> {
        let spec = RequestSpec::put(["integrations", integration_id]).json(&request)?;
        self.client.execute_data(spec).await
    }

    /// Delete an integration. Returns the remaining integrations.
    pub async fn delete(&self, integration_id: &str) -> Result<Vec<Integration>> {
        self.client.execute_data(RequestSpec::delete(["integrations", integration_id])).await
    }

    /// Make an integration the primary one of its channel.
    pub async fn set_primary(&self, integration_id: &str) -> Result<Integration> {
        let spec = RequestSpec::post(["integrations", integration_id, "set-primary"]);
        self.client.execute_data(spec).await
    }

    /// Message limit of the built-in provider for a channel.
    pub async fn channel_limit(&self, channel_type: &str) -> Result<ChannelLimit> {
        self.client.execute_data(RequestSpec::get(["integrations", channel_type, "limit"])).await
    }
}
