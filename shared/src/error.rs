use thiserror::Error;

/// Failures talking to the prize backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("backend answered {code}: {body}")]
    Status { code: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("backend rejected the request")]
    Rejected,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("prize list must contain at least one wedge")]
    EmptyPrizeList,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a spin needs at least one extra turn")]
    NoExtraTurns,
    #[error("extra turn range {min}..={max} is empty")]
    TurnRange { min: u32, max: u32 },
    #[error("spin duration must be positive")]
    ZeroDuration,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("platform call failed: {0}")]
    Platform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_failure_is_not_reported_as_bad_response() {
        let err = GatewayError::Encode("key must be a string".into());
        assert_eq!(err.to_string(), "could not encode request: key must be a string");
        assert_ne!(err, GatewayError::Decode("key must be a string".into()));
    }
}
