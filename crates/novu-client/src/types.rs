//! Request and response types for the Novu API.
//!
//! These types mirror the server's API contract. Unknown fields are ignored
//! and missing optional fields fall back to their defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::{QueryOptions, ToQuery};

// ─────────────────────────────────────────────────────────────────────────────
// Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Standard `{"data": ...}` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Wrapped payload.
    pub data: T,
}

/// Paginated list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Page size used by the server.
    #[serde(default)]
    pub page_size: u32,
    /// Total number of items, when reported.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// Whether more pages follow, when reported.
    #[serde(default)]
    pub has_more: Option<bool>,
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Page/limit query shared by list endpoints.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Page index.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ToQuery for PageOptions {
    fn to_query(&self) -> crate::Result<QueryOptions> {
        Ok(QueryOptions::new()
            .scalar("page", self.page)
            .scalar("limit", self.limit))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Request to trigger a workflow for one or more recipients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEventRequest {
    /// Workflow trigger identifier.
    pub name: String,
    /// Recipient(s): a subscriber id, a subscriber object, a topic, or a list.
    pub to: serde_json::Value,
    /// Template variables.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub payload: HashMap<String, serde_json::Value>,
    /// Per-provider overrides.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<String, serde_json::Value>,
    /// Caller-chosen transaction id, used for cancellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Actor subscriber shown as the sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<serde_json::Value>,
    /// Tenant identifier or object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<serde_json::Value>,
}

impl TriggerEventRequest {
    /// Create a trigger for `name` sent to `to`.
    pub fn new(name: impl Into<String>, to: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            to: to.into(),
            ..Default::default()
        }
    }

    /// Add a payload variable.
    pub fn with_payload(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Set the transaction id.
    pub fn with_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }
}

/// Bulk trigger body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTriggerRequest {
    /// Events to trigger.
    pub events: Vec<TriggerEventRequest>,
}

/// Request to trigger a workflow for every subscriber.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastEventRequest {
    /// Workflow trigger identifier.
    pub name: String,
    /// Template variables.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub payload: HashMap<String, serde_json::Value>,
    /// Per-provider overrides.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub overrides: HashMap<String, serde_json::Value>,
    /// Caller-chosen transaction id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Actor subscriber shown as the sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<serde_json::Value>,
    /// Tenant identifier or object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<serde_json::Value>,
}

/// Result of a trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    /// Whether the server accepted the trigger.
    #[serde(default)]
    pub acknowledged: bool,
    /// Processing status, e.g. `processed`.
    #[serde(default)]
    pub status: String,
    /// Transaction id assigned to the trigger.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Server-side problems with the trigger.
    #[serde(default)]
    pub error: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscribers
// ─────────────────────────────────────────────────────────────────────────────

/// Subscriber attributes used for identify, bulk create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberPayload {
    /// Subscriber id. Filled in by `identify` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Custom data attached to the subscriber.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, serde_json::Value>,
}

/// Bulk create body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSubscribersRequest {
    /// Subscribers to create or update.
    pub subscribers: Vec<SubscriberPayload>,
}

/// Subscriber as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub subscriber_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
    /// Per-provider channel credentials.
    #[serde(default)]
    pub channels: Vec<SubscriberChannel>,
    #[serde(rename = "_organizationId", default)]
    pub organization_id: Option<String>,
    #[serde(rename = "_environmentId", default)]
    pub environment_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub last_online_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Channel credentials stored for a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberChannel {
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub integration_identifier: Option<String>,
    #[serde(default)]
    pub credentials: ChannelCredentials,
}

/// Provider credentials of a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_tokens: Vec<String>,
}

/// Credentials update body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberCredentialPayload {
    /// Provider the credentials belong to, e.g. `slack`.
    pub provider_id: String,
    /// Credentials to store.
    pub credentials: ChannelCredentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_identifier: Option<String>,
}

/// Result of a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkCreateResult {
    #[serde(default)]
    pub updated: Vec<BulkSubscriberRef>,
    #[serde(default)]
    pub created: Vec<BulkSubscriberRef>,
    #[serde(default)]
    pub failed: Vec<BulkSubscriberFailure>,
}

/// Subscriber touched by a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSubscriberRef {
    #[serde(default)]
    pub subscriber_id: String,
}

/// Subscriber rejected by a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSubscriberFailure {
    #[serde(default)]
    pub subscriber_id: String,
    #[serde(default)]
    pub message: String,
}

/// Result of a delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default)]
    pub status: String,
}

/// Options for the subscriber notification feed.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeedOptions {
    /// Page index.
    pub page: Option<u32>,
    /// Feed to read from.
    pub feed_identifier: Option<String>,
    /// Filter by seen state.
    pub seen: Option<bool>,
    /// Filter by trigger payload fields. Sent as base64 JSON.
    pub payload: Option<serde_json::Value>,
}

impl ToQuery for NotificationFeedOptions {
    fn to_query(&self) -> crate::Result<QueryOptions> {
        QueryOptions::new()
            .scalar("page", self.page)
            .scalar("feedIdentifier", self.feed_identifier.as_ref())
            .scalar("seen", self.seen)
            .structured_opt("payload", self.payload.as_ref())
    }
}

/// Options for the unseen count.
#[derive(Debug, Clone, Default)]
pub struct UnseenCountOptions {
    /// Count seen (`true`) or unseen (`false`) messages.
    pub seen: Option<bool>,
    /// Restrict to one feed.
    pub feed_identifier: Option<String>,
    /// Upper bound for the count.
    pub limit: Option<u32>,
}

impl ToQuery for UnseenCountOptions {
    fn to_query(&self) -> crate::Result<QueryOptions> {
        Ok(QueryOptions::new()
            .scalar("seen", self.seen)
            .scalar("feedIdentifier", self.feed_identifier.as_ref())
            .scalar("limit", self.limit))
    }
}

/// Unseen count result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnseenCount {
    #[serde(default)]
    pub count: u64,
}

/// In-app message delivered to a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_templateId", default)]
    pub template_id: Option<String>,
    #[serde(rename = "_subscriberId", default)]
    pub subscriber_id: Option<String>,
    #[serde(rename = "_feedId", default)]
    pub feed_id: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub cta: serde_json::Value,
    #[serde(default)]
    pub payload: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub seen: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Marks to apply to a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

/// Body for marking a message seen/read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkMessageRequest {
    /// Message id.
    pub message_id: String,
    /// Marks to apply.
    pub mark: MessageMark,
}

/// Preference of a subscriber for one workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriberPreference {
    #[serde(default)]
    pub template: PreferenceTemplate,
    #[serde(default)]
    pub preference: Preference,
}

/// Workflow summary inside a preference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceTemplate {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub critical: bool,
}

/// Enabled state overall and per channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub channels: HashMap<String, bool>,
}

/// Per-channel preference change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceChannel {
    /// Channel type, e.g. `email`.
    #[serde(rename = "type")]
    pub channel_type: String,
    pub enabled: bool,
}

/// Body for updating a preference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePreferenceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<PreferenceChannel>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrations
// ─────────────────────────────────────────────────────────────────────────────

/// Provider credentials of an integration.
///
/// Only a few common fields are typed; anything else goes in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Body for creating an integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntegrationRequest {
    /// Provider id, e.g. `sendgrid`.
    pub provider_id: String,
    /// Channel type, e.g. `email`.
    pub channel: String,
    #[serde(default)]
    pub credentials: IntegrationCredentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// Ask the server to verify the credentials.
    #[serde(default)]
    pub check: bool,
}

/// Body for updating an integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntegrationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default)]
    pub credentials: IntegrationCredentials,
    #[serde(default)]
    pub check: bool,
}

/// Integration as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_environmentId", default)]
    pub environment_id: Option<String>,
    #[serde(rename = "_organizationId", default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub credentials: IntegrationCredentials,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Message limit for a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelLimit {
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub count: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Workflows
// ─────────────────────────────────────────────────────────────────────────────

/// Body for creating a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowRequest {
    pub name: String,
    /// Workflow group id.
    pub notification_group_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_settings: Option<HashMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Body for updating a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_settings: Option<HashMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Body for activating or deactivating a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatusRequest {
    pub active: bool,
}

/// Workflow as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_organizationId", default)]
    pub organization_id: Option<String>,
    #[serde(rename = "_environmentId", default)]
    pub environment_id: Option<String>,
    #[serde(rename = "_notificationGroupId", default)]
    pub notification_group_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub critical: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<serde_json::Value>,
    #[serde(default)]
    pub triggers: Vec<WorkflowTrigger>,
    #[serde(default)]
    pub preference_settings: HashMap<String, bool>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Trigger definition of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTrigger {
    #[serde(rename = "type", default)]
    pub trigger_type: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub variables: Vec<serde_json::Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Environments
// ─────────────────────────────────────────────────────────────────────────────

/// Environment as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "_organizationId", default)]
    pub organization_id: Option<String>,
    #[serde(rename = "_parentId", default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub api_keys: Vec<ApiKey>,
}

/// Environment API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(default)]
    pub key: String,
    #[serde(rename = "_userId", default)]
    pub user_id: Option<String>,
}

/// Body for creating an environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body for updating an environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvironmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
