//! Subscribers API.

use crate::client::NovuClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{
    BulkCreateResult, BulkSubscribersRequest, DeleteResult, MarkMessageRequest,
    Message, NotificationFeedOptions, PageOptions, Paginated, Subscriber,
    SubscriberCredentialPayload, SubscriberPayload, SubscriberPreference, UnseenCount,
    UnseenCountOptions, UpdatePreferenceRequest,
};

/// Subscribers API client.
pub struct SubscribersApi {
    client: NovuClient,
}

impl SubscribersApi {
    pub(crate) fn new(client: NovuClient) -> Self {
        Self { client }
    }

    /// Create or update a subscriber.
    pub async fn identify(
        &self,
        subscriber_id: &str,
        mut payload: SubscriberPayload,
    ) -> Result<Subscriber> {
        payload.subscriber_id = Some(subscriber_id.to_string());
        let spec = RequestSpec::post(["subscribers"]).json(&payload)?;
        self.client.execute_data(spec).await
    }

    /// Create or update many subscribers.
    pub async fn bulk_create(
        &self,
        subscribers: Vec<SubscriberPayload>,
    ) -> Result<BulkCreateResult> {
        let request = BulkSubscribersRequest { subscribers };
        let spec = RequestSpec::post(["subscribers", "bulk"]).json(&request)?;
        self.client.execute_data(spec).await
    }

    /// Get a subscriber by id.
    pub async fn get(&self, subscriber_id: &str) -> Result<Subscriber> {
        self.client.execute_data(RequestSpec::get(["subscribers", subscriber_id])).await
    }

    /// List subscribers page by page.
    pub async fn list(&self, options: PageOptions) -> Result<Paginated<Subscriber>> {
        let spec = RequestSpec::get(["subscribers"]).query(&options)?;
        self.client.execute(spec).await
    }

    /// Update a subscriber.
    pub async fn update(
        &self,
        subscriber_id: &str,
        payload: SubscriberPayload,
    ) -> Result<Subscriber> {
        let spec = RequestSpec::put(["subscribers", subscriber_id]).json(&payload)?;
        self.client.execute_data(spec).await
    }

    /// Update a subscriber's provider credentials.
    pub async fn update_credentials(
        &self,
        subscriber_id: &str,
        payload: SubscriberCredentialPayload,
    ) -> Result<Subscriber> {
        let spec =
            RequestSpec::put(["subscribers", subscriber_id, "credentials"]).json(&payload)?;
        self.client.execute_data(spec).await
    }

    /// Delete a subscriber.
    pub async fn delete(&self, subscriber_id: &str) -> Result<DeleteResult> {
        self.client.execute_data(RequestSpec::delete(["subscribers", subscriber_id])).await
    }

    /// Read the in-app notification feed.
    pub async fn notification_feed(
        &self,
        subscriber_id: &str,
        options: NotificationFeedOptions,
    ) -> Result<Paginated<Message>> {
        let spec = RequestSpec::get(["subscribers", subscriber_id, "notifications", "feed"])
            .query(&options)?;
        self.client.execute(spec).await
    }

    /// Count seen or unseen messages.
    pub async fn unseen_count(
        &self,
        subscriber_id: &str,
        options: UnseenCountOptions,
    ) -> Result<UnseenCount> {
        let spec = RequestSpec::get(["subscribers", subscriber_id, "notifications", "unseen"])
            .query(&options)?;
        self.client.execute_data(spec).await
    }

    /// Mark a message as seen and/or read.
    pub async fn mark_message(
        &self,
        subscriber_id: &str,
        request: MarkMessageRequest,
    ) -> Result<Vec<Message>> {
        let spec =
            RequestSpec::post(["subscribers", subscriber_id, "messages", "markAs"]).json(&request)?;
        self.client.execute_data(spec).await
    }

    /// Get all workflow preferences of a subscriber.
    pub async fn preferences(&self, subscriber_id: &str) -> Result<Vec<SubscriberPreference>> {
        self.client
            .execute_data(RequestSpec::get(["subscribers", subscriber_id, "preferences"]))
            .await
    }

    /// Update the preference for one workflow.
    pub async fn update_preference(
        &self,
        subscriber_id: &str,
        template_id: &str,
        request: UpdatePreferenceRequest,
    ) -> Result<SubscriberPreference> {
        let spec = RequestSpec::patch(["subscribers", subscriber_id, "preferences", template_id])
            .json(&request)?;
        self.client.execute_data(spec).await
    }
}
