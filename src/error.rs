use thiserror::Error;

/// Failures of a single call against the activities API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("activity list unavailable (HTTP {status})")]
    Unavailable { status: u16 },

    #[error("server rejected the request (HTTP {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),

    #[error("base url `{0}` cannot carry a path")]
    BaseUrl(String),

    #[error("`{0}` cannot be used as a path segment")]
    PathSegment(String),

    /// The mutation went through but the follow-up list refresh did not.
    #[error("request succeeded but the list refresh failed: {0}")]
    Reconcile(#[source] Box<ApiError>),
}

/// Reasons a signup form is not submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select an activity.")]
    NoActivity,

    #[error("Activity `{0}` is not in the current list.")]
    UnknownActivity(String),

    #[error("Please enter an email address.")]
    EmptyEmail,
}
