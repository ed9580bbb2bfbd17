//! Error types for URL parsing and component access.

use std::fmt;

/// Optional URL component that may be missing from the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlPart {
    User,
    Pass,
}

impl fmt::Display for UrlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlPart::User => f.write_str("user"),
            UrlPart::Pass => f.write_str("pass"),
        }
    }
}

/// Failure raised by [`ParsedUrl`](super::ParsedUrl) construction or accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// Input does not have the minimal `scheme://host` shape. No partial value is produced.
    #[error("invalid URL {url:?}: {reason}")]
    Invalid { url: String, reason: &'static str },

    /// The requested optional part was not present in the input.
    #[error("URL part not defined: {0}")]
    PartNotDefined(UrlPart),
}

impl UrlError {
    pub(crate) fn invalid(url: &str, reason: &'static str) -> Self {
        UrlError::Invalid {
            url: url.to_string(),
            reason,
        }
    }
}

pub type UrlResult<T> = Result<T, UrlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_message_names_input_and_reason() {
        let err = UrlError::invalid("not-a-url", "missing \"://\" after scheme");
        assert_eq!(
            err.to_string(),
            "invalid URL \"not-a-url\": missing \"://\" after scheme"
        );
    }

    #[test]
    fn part_not_defined_message() {
        assert_eq!(
            UrlError::PartNotDefined(UrlPart::Pass).to_string(),
            "URL part not defined: pass"
        );
    }
}
