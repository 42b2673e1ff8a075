use anyhow::Error;

use crate::api::RelayError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,          // HTTP 404
    ClientError,       // other HTTP 4xx
    ServerError,       // HTTP 500+
    MalformedResponse, // body was not the JSON we expected
    RelayRejected,     // relay answered with status "error"
    NetworkError,      // DNS, routing, etc.
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                400..=499 => ErrorType::ClientError,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
        if reqwest_err.is_decode() {
            return ErrorType::MalformedResponse;
        }
    }

    match error.downcast_ref::<RelayError>() {
        Some(RelayError::Rejected(_)) => return ErrorType::RelayRejected,
        Some(RelayError::MissingItems) => return ErrorType::MalformedResponse,
        None => {}
    }

    if error.chain().any(|e| e.downcast_ref::<serde_json::Error>().is_some()) {
        return ErrorType::MalformedResponse;
    }

    let error_msg = format!("{:#}", error).to_lowercase();
    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // Network-level errors
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message - show raw error details of the root cause
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    for err in error.chain() {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error.root_cause().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("connection refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_connection_refused_in_context_chain() {
        let err = anyhow::anyhow!("Connection Refused").context("Failed to reach relay");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_malformed_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = anyhow::Error::new(parse_err).context("Failed to parse relay response");
        assert_eq!(classify_error(&err), ErrorType::MalformedResponse);
    }

    #[test]
    fn test_classify_relay_rejected() {
        let err = anyhow::Error::new(RelayError::Rejected("Cannot download".to_string()));
        assert_eq!(classify_error(&err), ErrorType::RelayRejected);
    }

    #[test]
    fn test_classify_missing_items() {
        let err = anyhow::Error::new(RelayError::MissingItems);
        assert_eq!(classify_error(&err), ErrorType::MalformedResponse);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_raw_error() {
        let err = anyhow::anyhow!("connection refused");
        assert_eq!(format_error_message(&err), "connection refused");
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to fetch feed");
        // Should show the root cause, not the context wrapper
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }
}
