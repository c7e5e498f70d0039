//! Error types for the portal client

use thiserror::Error;

/// Result type alias for the portal client
pub type Result<T> = std::result::Result<T, PortalError>;

/// Main error type for the portal client
#[derive(Error, Debug)]
pub enum PortalError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The uploaded file could not be read as a spreadsheet
    #[error("Parse error: {0}")]
    Parse(String),

    /// The spreadsheet was readable but some rows did not yield a number
    #[error("Validation error: {0}")]
    Validation(String),

    /// A send request failed on the network or was rejected by the server
    #[error("Submission error: {0}")]
    Submission(String),

    /// Pre-flight input checks
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Non-2xx response from a dashboard endpoint
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Pre-flight rules checked before any network call, in evaluation order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please accept the platform policy before sending")]
    PolicyNotAccepted,

    #[error("Please enter a phone number")]
    MissingPhoneNumber,

    #[error("Please write a message")]
    EmptyMessage,

    #[error("Please upload a spreadsheet containing the phone numbers")]
    MissingRecipientFile,

    #[error("The uploaded spreadsheet does not contain any phone numbers")]
    EmptyRecipientList,

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Client ID is missing from the session")]
    MissingClientId,

    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Please fill in the ticket title and description")]
    IncompleteTicket,

    #[error("Please choose at least one service")]
    NoServiceSelected,

    #[error("Please choose an {0} package")]
    MissingPackage(&'static str),

    #[error("The minimum message count for a custom {service} package is {minimum}")]
    BelowCustomMinimum { service: &'static str, minimum: u64 },

    #[error("Please enter the sender ID for {0} services")]
    MissingSenderId(&'static str),
}
