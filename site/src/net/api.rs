//! Outbound registration submission.
//!
//! Client-side (hydrate): a single `POST` via `gloo-net` in `no-cors` mode.
//! Server-side (SSR) and native tests: a stub that reports the call as
//! unavailable, since submission only happens from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A `no-cors` request yields an opaque response: status and body are
//! unreadable, so "accepted" and "silently dropped" look the same. Only a
//! failure to build or dispatch the request is an error. There is no retry;
//! the user resubmits the form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SubmissionPayload;

/// Failure to hand the submission to the browser's network stack.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Network(String),
}

/// Notice shown when submission fails.
#[must_use]
pub fn submit_failed_message(err: &SubmitError) -> String {
    format!("Failed to submit application. Please try again. Error: {err}")
}

fn encode_payload(payload: &SubmissionPayload) -> Result<String, SubmitError> {
    Ok(serde_json::to_string(payload)?)
}

/// Post the registration to `endpoint`.
///
/// `Ok(())` means the request was dispatched without a thrown error, not
/// that the endpoint stored it.
///
/// # Errors
///
/// Returns [`SubmitError`] if the body cannot be encoded or the request
/// cannot be sent.
pub async fn submit_registration(endpoint: &str, payload: &SubmissionPayload) -> Result<(), SubmitError> {
    let body = encode_payload(payload)?;
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(endpoint)
            .mode(web_sys::RequestMode::NoCors)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        log::info!("registration dispatched to collection endpoint");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(SubmitError::Network("not available on server".to_owned()))
    }
}
