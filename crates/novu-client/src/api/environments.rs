//! Environments API.

use reqwest::StatusCode;

use crate::client::NovuClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{ApiKey, CreateEnvironmentRequest, Environment, UpdateEnvironmentRequest};

/// Environments API client.
pub struct EnvironmentsApi {
    client: NovuClient,
}

impl EnvironmentsApi {
    pub(crate) fn new(client: NovuClient) -> Self {
        Self { client }
    }

    /// Get the environment the API key belongs to.
    pub async fn current(&self) -> Result<Environment> {
        self.client.execute_data(RequestSpec::get(["environments", "me"])).await
    }

    /// List all environments of the organization.
    pub async fn list(&self) -> Result<Vec<Environment>> {
        self.client.execute_data(RequestSpec::get(["environments"])).await
    }

    /// Create an environment.
    pub async fn create(&self, request: CreateEnvironmentRequest) -> Result<Environment> {
        let spec = RequestSpec::post(["environments"])
            .json(&request)?
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }

    /// Update an environment.
    pub async fn update(
        &self,
        environment_id: &str,
        request: UpdateEnvironmentRequest,
    ) -> Result<Environment> {
        let spec = RequestSpec::put(["environments", environment_id]).json(&request)?;
        self.client.execute_data(spec).await
    }

    /// List the API keys of the current environment.
    pub async fn api_keys(&self) -> Result<Vec<ApiKey>> {
        self.client.execute_data(RequestSpec::get(["environments", "api-keys"])).await
    }

    /// Replace the API keys of the current environment.
    pub async fn regenerate_api_keys(&self) -> Result<Vec<ApiKey>> {
        let spec = RequestSpec::post(["environments", "api-keys", "regenerate"])
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }
}
