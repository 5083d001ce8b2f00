//! OTP client error types.

/// Errors from setting up the OTP HTTP client.
///
/// Failures of individual plan requests are not errors of this type; they
/// are reported as [`OtpFailure`](super::OtpFailure) so the itinerary layer
/// can classify them.
#[derive(Debug, thiserror::Error)]
pub enum OtpClientError {
    /// Building the HTTP client failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration is unusable
    #[error("invalid OTP configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OtpClientError::InvalidConfig("base URL must not be empty".into());
        assert_eq!(
            err.to_string(),
            "invalid OTP configuration: base URL must not be empty"
        );
    }
}
