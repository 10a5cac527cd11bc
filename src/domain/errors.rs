//! Domain error types
//!
//! Every failure a bookseller call can produce. Transport and parser errors are
//! carried unchanged so callers can inspect the collaborator's own error value.

use std::fmt;

#[derive(Debug)]
pub enum BooksellerError {
    /// Network failure or non-success HTTP status
    Transport(reqwest::Error),
    /// Markup document could not be parsed
    Parse(quick_xml::de::DeError),
    /// Body decoded, but not into the expected wire record shape
    MalformedResponse(String),
    /// Client could not be built from the supplied configuration
    InvalidConfig(String),
}

impl BooksellerError {
    /// HTTP status of a failed response, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            BooksellerError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for BooksellerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooksellerError::Transport(e) => write!(f, "Bookseller request failed: {}", e),
            BooksellerError::Parse(e) => write!(f, "XML parse error: {}", e),
            BooksellerError::MalformedResponse(msg) => {
                write!(f, "Malformed response shape: {}", msg)
            }
            BooksellerError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for BooksellerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BooksellerError::Transport(e) => Some(e),
            BooksellerError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BooksellerError {
    fn from(e: reqwest::Error) -> Self {
        BooksellerError::Transport(e)
    }
}

// Missing fields arrive as `Custom`, badly typed leaves as `Invalid*`. Both mean
// the document was well-formed but not a wire record; the rest is broken XML.
impl From<quick_xml::de::DeError> for BooksellerError {
    fn from(e: quick_xml::de::DeError) -> Self {
        use quick_xml::de::DeError;

        match e {
            DeError::Custom(msg) => BooksellerError::MalformedResponse(msg),
            DeError::InvalidInt(_) | DeError::InvalidFloat(_) | DeError::InvalidBoolean(_) => {
                BooksellerError::MalformedResponse(e.to_string())
            }
            other => BooksellerError::Parse(other),
        }
    }
}

impl From<serde_json::Error> for BooksellerError {
    fn from(e: serde_json::Error) -> Self {
        BooksellerError::MalformedResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_in_xml_is_malformed_shape() {
        let err: BooksellerError =
            quick_xml::de::DeError::Custom("missing field `stock`".into()).into();
        assert!(matches!(err, BooksellerError::MalformedResponse(ref m) if m.contains("stock")));
        assert!(err.to_string().starts_with("Malformed response shape"));
    }

    #[test]
    fn mistyped_xml_leaf_is_malformed_shape() {
        let int_err = "-1".parse::<u32>().unwrap_err();
        let err = BooksellerError::from(quick_xml::de::DeError::InvalidInt(int_err));
        assert!(matches!(err, BooksellerError::MalformedResponse(_)), "{:?}", err);

        let float_err = "cheap".parse::<f64>().unwrap_err();
        let err = BooksellerError::from(quick_xml::de::DeError::InvalidFloat(float_err));
        assert!(matches!(err, BooksellerError::MalformedResponse(_)), "{:?}", err);
    }

    #[test]
    fn truncated_xml_is_parse_error() {
        let err = BooksellerError::from(quick_xml::de::DeError::UnexpectedEof);
        assert!(matches!(err, BooksellerError::Parse(_)), "{:?}", err);
    }

    #[test]
    fn json_decode_error_is_malformed_shape() {
        let json_err = serde_json::from_str::<Vec<u32>>("{\"not\": \"a list\"}").unwrap_err();
        let err = BooksellerError::from(json_err);
        assert!(matches!(err, BooksellerError::MalformedResponse(_)));
        assert!(err.status().is_none());
    }
}
