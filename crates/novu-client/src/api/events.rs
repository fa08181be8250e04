//! Events API.

use reqwest::StatusCode;

use crate::client::NovuClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{BroadcastEventRequest, BulkTriggerRequest, EventResponse, TriggerEventRequest};

/// Events API client.
pub struct EventsApi {
    client: NovuClient,
}

impl EventsApi {
    pub(crate) fn new(client: NovuClient) -> Self {
        Self { client }
    }

    /// Trigger a workflow.
    pub async fn trigger(&self, request: TriggerEventRequest) -> Result<EventResponse> {
        let spec = RequestSpec::post(["events", "trigger"])
            .json(&request)?
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }

    /// Trigger several workflows in one call.
    pub async fn trigger_bulk(
        &self,
        events: Vec<TriggerEventRequest>,
    ) -> Result<Vec<EventResponse>> {
        let spec = RequestSpec::post(["events", "trigger", "bulk"])
            .json(&BulkTriggerRequest { events })?
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }

    /// Trigger a workflow for every subscriber.
    pub async fn broadcast(&self, request: BroadcastEventRequest) -> Result<EventResponse> {
        let spec = RequestSpec::post(["events", "trigger", "broadcast"])
            .json(&request)?
            .expect_status(StatusCode::CREATED);
        self.client.execute_data(spec).await
    }

    /// Cancel a delayed or digested trigger by transaction id.
    pub async fn cancel(&self, transaction_id: &str) -> Result<bool> {
        let spec = RequestSpec::delete(["events", "trigger", transaction_id]);
        self.client.execute_data(spec).await
    }
}
