use thiserror::Error;

/// Failure talking to the places API. Never thrown past a component: call
/// sites turn it into an error message on a loader or a form.
///
/// Display is always the plain per-operation message ("Failed to fetch
/// places", "Place not found"...), whatever went wrong underneath; the raw
/// cause is kept in `detail` for the console only. "Not found" and "server
/// error" are both plain [`ApiError::Status`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("{message}")]
    Network { message: String, detail: String },

    /// The request body could not be serialized.
    #[error("{message}")]
    Encode { message: String, detail: String },

    /// The server answered outside the 2xx range.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body did not have the shape we expect.
    #[error("{message}")]
    Decode { message: String, detail: String },
}

impl ApiError {
    pub fn network(context: &str, detail: impl ToString) -> Self {
        ApiError::Network {
            message: context.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn decode(context: &str, detail: impl ToString) -> Self {
        ApiError::Decode {
            message: context.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// What actually went wrong, for logs.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Network { detail, .. } => format!("network: {detail}"),
            ApiError::Encode { detail, .. } => format!("encode: {detail}"),
            ApiError::Decode { detail, .. } => format!("decode: {detail}"),
            ApiError::Status { status, .. } => format!("HTTP {status}"),
        }
    }
}

/// Required fields that were left empty on a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Why a form submission did not go out (or did not succeed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A previous submission from the same form is still in flight.
    #[error("A submission is already in progress")]
    Busy,

    #[error("{0}")]
    Submit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("API base URL must start with http:// or https://, got {0}")]
    UnsupportedScheme(String),
}
