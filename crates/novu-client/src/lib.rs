//! HTTP client SDK for the Novu notification platform.
//!
//! This crate provides a typed client for the Novu REST API.
//!
//! # Example
//!
//! ```no_run
//! use novu_client::{NotificationFeedOptions, NovuClient, Result, TriggerEventRequest};
//! use serde_json::json;
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = NovuClient::builder()
//!     .base_url("http://localhost:3000")
//!     .api_key("secret")
//!     .build()?;
//!
//! // Trigger a workflow
//! let event = client
//!     .events()
//!     .trigger(
//!         TriggerEventRequest::new("welcome", "subscriber-1")
//!             .with_payload("name", json!("Ada")),
//!     )
//!     .await?;
//! println!("Acknowledged: {}", event.acknowledged);
//!
//! // Read the subscriber's in-app feed, filtered by payload
//! let feed = client
//!     .subscribers()
//!     .notification_feed(
//!         "subscriber-1",
//!         NotificationFeedOptions {
//!             payload: Some(json!({ "name": "Ada" })),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! println!("{} messages", feed.data.len());
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Events**: Trigger, bulk trigger, broadcast, cancel
//! - **Subscribers**: Identify, update, credentials, feed, preferences
//! - **Integrations**: CRUD, primary selection, channel limits
//! - **Workflows**: CRUD and activation
//! - **Environments**: Current, list, create, update, API keys
//!
//! Every facade method describes its call as a [`RequestSpec`] and hands it
//! to [`NovuClient::execute`]; custom endpoints can be called the same way.

pub mod api;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod query;
pub mod request;
pub mod types;

pub use client::NovuClient;
pub use config::{ClientBuilder, ClientConfig};
pub use error::{ApiError, DecodeError, Error, Result, TransportError, TransportErrorKind};
pub use query::{QueryOptions, QueryValue, ToQuery};
pub use request::{ExpectedStatus, RequestSpec};
pub use types::*;

pub use tokio_util::sync::CancellationToken;
