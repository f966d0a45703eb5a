use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by data providers and score estimators
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, timeout, non-2xx status or malformed payload
    #[error("Failed to retrieve {what}: {reason}")]
    Retrieval { what: String, reason: String },

    /// Request rejected before any work was done
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn retrieval(what: &str, reason: impl ToString) -> Self {
        Error::Retrieval {
            what: what.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_retrieval(&self) -> bool {
        matches!(self, Error::Retrieval { .. })
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Error::InvalidRequest(_))
    }

    /// Generic message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Error::Retrieval { .. } => "Could not load data. Please try again.".to_string(),
            Error::InvalidRequest(msg) => msg.clone(),
        }
    }
}

/// Context string for fetch failures
pub fn fetch_context(url: &str) -> String {
    format!("data from {}", url)
}

/// Context string for parse failures
pub fn parse_context(data_type: &str) -> String {
    format!("{} (malformed payload)", data_type)
}
