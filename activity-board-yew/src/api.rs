//! HTTP fetch layer for the activities service
//!
//! Thin wrapper over the browser's fetch API (gloo-net). The service speaks
//! a three-endpoint REST contract: `GET /activities` returns the full
//! catalog, `POST /activities/{name}/signup?email=..` and
//! `DELETE /activities/{name}/unregister?email=..` mutate a participant
//! list and answer `{ "message": .. }` on success or `{ "detail": .. }`
//! with a non-2xx status on rejection.

use activity_board_core::Catalog;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;

/// Fallback shown when a rejection carries no detail text
pub const GENERIC_ERROR_DETAIL: &str = "An error occurred";

/// Errors produced by the fetch layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network failure or a response body that was not valid JSON
    #[error("transport error: {0}")]
    Transport(#[from] gloo_net::Error),

    /// Well-formed rejection from the server (non-2xx with a JSON body)
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
}

/// Success payload of the mutating endpoints
#[derive(Debug, Deserialize)]
struct Confirmation {
    message: String,
}

/// Failure payload of any endpoint
#[derive(Debug, Default, Deserialize)]
struct Rejection {
    #[serde(default)]
    detail: Option<String>,
}

impl Rejection {
    fn into_detail(self) -> String {
        match self.detail {
            Some(detail) if !detail.is_empty() => detail,
            _ => GENERIC_ERROR_DETAIL.to_string(),
        }
    }
}

/// Fetch the full activity catalog
///
/// The entire dataset is retrieved on every call; the caller replaces its
/// snapshot wholesale.
pub async fn fetch_activities(base: &str) -> Result<Catalog, ApiError> {
    let resp = Request::get(&format!("{base}/activities")).send().await?;

    if !resp.ok() {
        return Err(rejection(resp).await);
    }

    Ok(resp.json::<Catalog>().await?)
}

/// Sign `email` up for the named activity, returning the server's
/// confirmation message
pub async fn sign_up(base: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    let url = format!("{base}/activities/{}/signup", encode_segment(activity));
    send_mutation(Request::post(&url), email).await
}

/// Remove `email` from the named activity, returning the server's
/// confirmation message
pub async fn unregister(base: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    let url = format!("{base}/activities/{}/unregister", encode_segment(activity));
    send_mutation(Request::delete(&url), email).await
}

async fn send_mutation(builder: RequestBuilder, email: &str) -> Result<String, ApiError> {
    let resp = builder.query([("email", email)]).send().await?;

    if !resp.ok() {
        return Err(rejection(resp).await);
    }

    Ok(resp.json::<Confirmation>().await?.message)
}

/// Convert a non-2xx response into an [`ApiError`]
///
/// A body that fails to parse as JSON is a transport error, not an
/// application rejection.
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    match resp.json::<Rejection>().await {
        Ok(rejection) => ApiError::Rejected {
            status,
            detail: rejection.into_detail(),
        },
        Err(err) => ApiError::Transport(err),
    }
}

/// Percent-encode a path segment (activity names may contain spaces)
fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}
