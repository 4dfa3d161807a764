//! Activities API Bindings
//!
//! Frontend bindings to the activities REST endpoints, organized by resource.

mod activity;
mod signup;

use async_trait::async_trait;
use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{ActivityBoard, ApiDetail, ApiMessage, NewActivity};

/// Everything `encodeURIComponent` escapes
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// Errors
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. `detail` is the server's `{detail}` string, if any.
    #[error("request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True for failures the server never answered properly
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Parse(_))
    }
}

// ========================
// API Seam
// ========================

/// The four calls the board makes against the server
#[async_trait(?Send)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError>;

    async fn create_activity(&self, activity: &NewActivity) -> Result<ApiMessage, ApiError>;

    async fn signup_participant(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;

    async fn unregister_participant(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError>;
}

/// `ActivityApi` over `fetch`
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone())
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpApi {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError> {
        activity::list_activities(&self.base).await
    }

    async fn create_activity(&self, new_activity: &NewActivity) -> Result<ApiMessage, ApiError> {
        activity::create_activity(&self.base, new_activity).await
    }

    async fn signup_participant(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        signup::signup_participant(&self.base, activity, email).await
    }

    async fn unregister_participant(&self, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
        signup::unregister_participant(&self.base, activity, email).await
    }
}

// ========================
// URLs
// ========================

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    participant_url(base, activity, "signup", email)
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    participant_url(base, activity, "unregister", email)
}

fn participant_url(base: &str, activity: &str, action: &str, email: &str) -> String {
    format!(
        "{}/{}/{}?email={}",
        activities_url(base),
        encode_component(activity),
        action,
        encode_component(email)
    )
}

// ========================
// Responses
// ========================

/// Read the body of a response and interpret it
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    interpret_body(ok, status, &body)
}

/// Map a status and raw body to the expected payload or an `ApiError`
pub fn interpret_body<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ApiError> {
    if !ok {
        let detail = serde_json::from_str::<ApiDetail>(body)
            .ok()
            .and_then(|d| d.detail);
        return Err(ApiError::Rejected { status, detail });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
