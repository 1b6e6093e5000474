//! Gateway errors.

use thiserror::Error;

/// Errors produced locally by the relay.
///
/// Upstream non-2xx responses are NOT represented here: their status code and
/// body are mirrored to the caller verbatim. These variants cover the cases
/// where the relay itself has to synthesize a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Client sent a body we could not parse or use
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },

    /// Credential mismatch on /login
    #[error("Unauthorized")]
    Unauthorized,

    /// The outbound call to the generative API failed before a response
    /// arrived (connect error, timeout, body read failure)
    #[error("AI request failed: {detail}")]
    UpstreamFailed { detail: String },

    /// Usage accounting could not be persisted
    #[error("Usage accounting failed: {detail}")]
    Usage { detail: String },
}

impl GatewayError {
    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::Unauthorized => 401,
            Self::UpstreamFailed { .. } | Self::Usage { .. } => 500,
        }
    }

    /// Stable headline for the wire `error` field.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::UpstreamFailed { .. } => "AI request failed",
            Self::Usage { .. } => "Usage accounting failed",
        }
    }

    /// Free-text diagnostic, when the variant carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::BadRequest { detail }
            | Self::UpstreamFailed { detail }
            | Self::Usage { detail } => Some(detail),
            Self::Unauthorized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            GatewayError::BadRequest { detail: "bad".to_string() }.http_status_code(),
            400
        );
        assert_eq!(GatewayError::Unauthorized.http_status_code(), 401);
        assert_eq!(
            GatewayError::UpstreamFailed { detail: "connect refused".to_string() }
                .http_status_code(),
            500
        );
    }

    #[test]
    fn test_unauthorized_has_no_detail() {
        assert_eq!(GatewayError::Unauthorized.detail(), None);
        assert_eq!(GatewayError::Unauthorized.headline(), "Unauthorized");
    }

    #[test]
    fn test_upstream_failed_headline_matches_wire_contract() {
        let err = GatewayError::UpstreamFailed { detail: "timeout".to_string() };
        assert_eq!(err.headline(), "AI request failed");
        assert_eq!(err.detail(), Some("timeout"));
    }
}
