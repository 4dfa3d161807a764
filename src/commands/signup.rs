//! Signup Commands
//!
//! Adding and removing a participant email on one activity.

use gloo_net::http::Request;

use super::{read_response, signup_url, unregister_url, ApiError};
use crate::models::ApiMessage;

pub async fn signup_participant(base: &str, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
    let url = signup_url(base, activity, email);
    log::debug!("[API] POST {}", url);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_response(response).await
}

pub async fn unregister_participant(base: &str, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
    let url = unregister_url(base, activity, email);
    log::debug!("[API] DELETE {}", url);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_response(response).await
}
