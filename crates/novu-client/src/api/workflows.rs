//! Workflows API.

use reqwest::StatusCode;

use crate::client::NovuClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{
    CreateWorkflowRequest, PageOptions, Paginated, UpdateWorkflowRequest, Workflow,
    WorkflowStatusRequest,
};

/// Workflows API client.
pub struct WorkflowsApi {
    client: NovuClient,
}

impl WorkflowsApi {
    pub(crate) fn new(client: NovuClient) -> Self {
        Self { client }
    }

    /// List workflows page by page.
    pub async fn list(&self, options: PageOptions) -> Result<Paginated<Workflow>> {
        let spec = RequestSpec::get(["workflows"]).query(&options)?;
        self.client.execute(spec).await
    }

    /// Create a workflow.
    pub async fn create(&self, request: CreateWorkflowRequest) -> Result<Workflow> {
        let spec = RequestSpec::post(["workflows"])
            .json(&request)?
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }

    /// Get a workflow by id.
    pub async fn get(&self, workflow_id: &str) -> Result<Workflow> {
        self.client.execute_data(RequestSpec::get(["workflows", workflow_id])).await
    }

    /// Update a workflow.
    pub async fn update(
        &self,
        workflow_id: &str,
        request: UpdateWorkflowRequest,
    ) -> Result<Workflow> {
        let spec = RequestSpec::put(["workflows", workflow_id]).json(&request)?;
        self.client.execute_data(spec).await
    }

    /// Delete a workflow.
    pub async fn delete(&self, workflow_id: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::delete(["workflows", workflow_id]))
            .await
    }

    /// Activate or deactivate a workflow.
    pub async fn update_status(&self, workflow_id: &str, active: bool) -> Result<Workflow> {
        let spec = RequestSpec::put(["workflows", workflow_id, "status"])
            .json(&WorkflowStatusRequest { active })?;
        self.client.execute_data(spec).await
    }
}
