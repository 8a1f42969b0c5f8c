use thiserror::Error;

/// Any fault raised while fetching the question set.
///
/// Connectivity, HTTP status and decoding failures all collapse into this one
/// kind; only the message differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed ({url}): {message}")]
pub struct FetchError {
    pub url: String,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            message: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_url_and_message() {
        let err = FetchError::new("http://host/world.json", "connection refused");
        assert_eq!(
            err.to_string(),
            "fetch failed (http://host/world.json): connection refused"
        );
    }
}
