use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

#[derive(Serialize, Debug)]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
    #[serde(
        serialize_with = "serialize_optional_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub upstream_status: Option<StatusCode>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned {0}")]
    Status(StatusCode),
    #[error("error contacting upstream: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("malformed upstream response: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl FetchError {
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status(status) => Some(*status),
            FetchError::Reqwest(e) => e.status(),
            FetchError::Deserialize(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] FetchError),
    #[error("flight {0} not found or not currently tracked")]
    FlightNotFound(String),
    #[error("failed to read landing page: {0}")]
    LandingPage(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::Upstream(e) => {
                let upstream_status = e.upstream_status();
                warn!(error = ?e, upstream_status = ?upstream_status, "upstream unavailable");
                ErrorMessage {
                    status_code: StatusCode::BAD_GATEWAY,
                    message,
                    upstream_status,
                }
                .into_response()
            }
            ApiError::FlightNotFound(callsign) => {
                warn!(callsign = %callsign, "flight not found");
                ErrorMessage::from((StatusCode::NOT_FOUND, message)).into_response()
            }
            ApiError::LandingPage(e) => {
                warn!(error = ?e, "failed to read landing page");
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "internal server error"))
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Init(#[from] shared::error::InitializationError),
    #[error(transparent)]
    Config(#[from] shared::error::ConfigError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

fn serialize_optional_status<S>(
    value: &Option<StatusCode>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(status) => serializer.serialize_u16(status.as_u16()),
        None => serializer.serialize_none(),
    }
}

impl From<(StatusCode, String)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, String)) -> Self {
        Self {
            status_code,
            message,
            upstream_status: None,
        }
    }
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            message: message.into(),
            upstream_status: None,
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
