//! Errors from reading saved search responses.

use std::path::PathBuf;

/// Failure to read or decode a search response.
#[derive(Debug, thiserror::Error)]
pub enum AmadeusError {
    /// The response file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body is not a valid search response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AmadeusError::Io {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/missing.json: not found");

        let err: AmadeusError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
