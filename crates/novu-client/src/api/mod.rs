//! API endpoint implementations.

mod environments;
mod events;
mod integrations;
mod subscribers;
mod workflows;

pub use environments::EnvironmentsApi;
pub use events::EventsApi;
pub use integrations::IntegrationsApi;
pub use subscribers::SubscribersApi;
pub use workflows::WorkflowsApi;
