use super::super::parsed_value::ValueKind;
use failure::Fail;

/// Errors raised while turning a response body into a callback argument.
#[derive(Debug, Fail)]
pub enum ResponseError {
    #[fail(display = "Malformed JSON response: {}", _0)]
    Parse(#[cause] serde_json::Error),
    #[fail(
        display = "Unexpected response: top-level JSON {} is neither an object nor an array",
        _0
    )]
    UnexpectedShape(ValueKind),
}

/// Transport failures reported by the network glue.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum HttpError {
    #[fail(display = "Network error: {}", _0)]
    Network(String),
    #[fail(display = "Request timed out")]
    Timeout,
    #[fail(display = "HTTP status error: {}", _0)]
    Status(u16),
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use failure::Fail;

    #[test]
    fn unexpected_shape_names_the_kind() {
        let err = ResponseError::UnexpectedShape(ValueKind::Number);
        let msg = err.to_string();
        assert!(msg.starts_with("Unexpected response"));
        assert!(msg.contains("number"));
    }

    #[test]
    fn parse_error_keeps_serde_cause() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ResponseError::Parse(serde_err);
        assert!(err.cause().is_some());
        assert!(err.to_string().starts_with("Malformed JSON response"));
    }

    #[test]
    fn status_only_for_status_errors() {
        assert_eq!(HttpError::Status(404).status(), Some(404));
        assert_eq!(HttpError::Timeout.status(), None);
        assert_eq!(HttpError::Network("reset".to_owned()).status(), None);
    }
}
