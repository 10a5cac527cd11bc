use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire encoding requested from the bookseller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Value sent in the `Accept` header.
    pub fn mime_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::Json => write!(f, "json"),
            ResponseFormat::Xml => write!(f, "xml"),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "application/json" => Ok(ResponseFormat::Json),
            "xml" | "application/xml" => Ok(ResponseFormat::Xml),
            other => Err(format!("Unknown response format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_json() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Json);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ResponseFormat::Json.mime_type(), "application/json");
        assert_eq!(ResponseFormat::Xml.mime_type(), "application/xml");
    }

    #[test]
    fn test_parse_names_and_mime_types() {
        assert_eq!("xml".parse::<ResponseFormat>(), Ok(ResponseFormat::Xml));
        assert_eq!(" JSON ".parse::<ResponseFormat>(), Ok(ResponseFormat::Json));
        assert_eq!(
            "application/xml".parse::<ResponseFormat>(),
            Ok(ResponseFormat::Xml)
        );
        assert!("yaml".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [ResponseFormat::Json, ResponseFormat::Xml] {
            assert_eq!(format.to_string().parse::<ResponseFormat>(), Ok(format));
        }
    }
}
