use std::path::PathBuf;

/// Errors that can occur when loading or validating a level configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse level JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level validation error: {0}")]
    Validation(String),
}

/// Errors from building a grid out of caller-supplied rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be >= 3".to_string());
        assert_eq!(err.to_string(), "level validation error: rows must be >= 3");
    }

    #[test]
    fn test_grid_error_display() {
        let err = GridError::Ragged {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
    }
}
