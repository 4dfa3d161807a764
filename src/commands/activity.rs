//! Activity Commands
//!
//! Listing and creating activities.

use gloo_net::http::Request;

use super::{activities_url, read_response, ApiError};
use crate::models::{ActivityBoard, ApiMessage, NewActivity};

pub async fn list_activities(base: &str) -> Result<ActivityBoard, ApiError> {
    let url = activities_url(base);
    log::debug!("[API] GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_response(response).await
}

pub async fn create_activity(base: &str, activity: &NewActivity) -> Result<ApiMessage, ApiError> {
    let url = activities_url(base);
    log::debug!("[API] POST {} name={}", url, activity.name);
    let response = Request::post(&url)
        .json(activity)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_response(response).await
}
