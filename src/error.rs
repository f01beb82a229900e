/// Error types for the popup
use thiserror::Error;

/// A form field, used to report which one blocked a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ProjectId,
    ApiKey,
    Username,
    Category,
    Content,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::ProjectId => "Project ID",
            FormField::ApiKey => "API Key",
            FormField::Username => "Username",
            FormField::Category => "Category",
            FormField::Content => "Content",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Shown to the user as-is, so it does not name the field
    #[error("Please fill all the fields")]
    MissingField(FormField),

    #[error("An event is already being created")]
    InFlight,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown category \"{0}\"")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No window available")]
    NoWindow,

    #[error("Failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Request failed: {0}")]
    Fetch(String),

    #[error("Unexpected response from fetch")]
    UnexpectedResponse,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Failed to write \"{key}\": {message}")]
    Write { key: String, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint URL \"{input}\": {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },

    #[error("Unsupported endpoint scheme \"{scheme}\" (expected http or https)")]
    UnsupportedScheme { scheme: String },
}
