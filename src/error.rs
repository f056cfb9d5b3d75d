//! Error types for backend and contract calls
//!
//! Every failure a dashboard action can hit ends up as a `DashboardError`,
//! which the dashboards turn into a single error notification.

use thiserror::Error;

use crate::contract::ContractError;

/// Errors that can occur while talking to the asset backend or the contract
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport failure other than a timeout or refused connection
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Backend could not be reached
    #[error("Backend unavailable")]
    Unavailable,

    /// Backend answered `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Non-2xx response without a readable envelope
    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("No contract available")]
    ContractUnavailable,
}

impl DashboardError {
    /// Message supplied by the backend, when it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DashboardError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DashboardError::Timeout
        } else if err.is_connect() {
            DashboardError::Unavailable
        } else if err.is_decode() {
            DashboardError::Decode(err.to_string())
        } else {
            DashboardError::Network(err.to_string())
        }
    }
}

/// Result type alias for backend operations
pub type ApiResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Rejected("duplicate id".to_string());
        assert_eq!(err.to_string(), "Request rejected: duplicate id");
        assert_eq!(err.server_message(), Some("duplicate id"));

        let err = DashboardError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 502: Bad Gateway");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Decode(_)));
    }

    #[test]
    fn test_contract_error_conversion() {
        let err: DashboardError = ContractError::Reverted("out of gas".to_string()).into();
        assert_eq!(err.to_string(), "Contract error: Transaction reverted: out of gas");
    }
}
