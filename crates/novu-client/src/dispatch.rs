//! Sending requests, classifying statuses and decoding bodies.

use reqwest::{Request, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::{ApiError, DecodeError, Result, TransportError};
use crate::request::ExpectedStatus;

/// A response whose body has been read to completion.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response body.
    pub body: Vec<u8>,
}

/// Execute `request` and read the whole body.
///
/// When `cancel` fires first the in-flight request is dropped and a
/// cancelled [`TransportError`] is returned.
pub async fn send(
    http: &reqwest::Client,
    request: Request,
    cancel: Option<&CancellationToken>,
) -> Result<RawResponse> {
    let method = request.method().clone();
    let path = request.url().path().to_string();

    let exchange = async {
        let response = http.execute(request).await.map_err(TransportError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::from)?;
        Ok::<_, TransportError>(RawResponse {
            status,
            body: body.to_vec(),
        })
    };

    let raw = match cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(TransportError::cancelled()),
            result = exchange => result,
        },
        None => exchange.await,
    }?;

    tracing::debug!(%method, %path, status = raw.status.as_u16(), "novu request completed");
    Ok(raw)
}

/// Check the status against the expectation.
pub fn classify(raw: RawResponse, expected: ExpectedStatus) -> Result<RawResponse> {
    if expected.matches(raw.status) {
        Ok(raw)
    } else {
        Err(ApiError::from_body(raw.status, &raw.body).into())
    }
}

/// Decode a successful response into `T`.
pub fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    serde_json::from_slice(&raw.body)
        .map_err(|e| DecodeError::new(raw.status, &raw.body, e).into())
}
