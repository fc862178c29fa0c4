//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting outside its accepted bounds
    #[error("{section}.{field} = {value} is outside {min}..={max} ({hint})")]
    Range {
        section: String,
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    #[error("Engine configuration has no 'version' key; expected 'version: 1'")]
    MissingVersion,

    #[error("Engine configuration version {found} is not supported (supported: {})", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Batch worker pool could not be started
    #[error("Batch worker pool could not start: {0}")]
    ThreadPool(String),

    #[error("Could not read engine configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed engine configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Out-of-bounds `section.field`, with a hint on what the bounds mean
    pub fn out_of_range(
        section: impl Into<String>,
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            section: section.into(),
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_names_section_and_field() {
        let err = ConfigError::out_of_range("parallel", "num_workers", 300, 0, 256, "0 = one per core");
        assert_eq!(
            err.to_string(),
            "parallel.num_workers = 300 is outside 0..=256 (0 = one per core)"
        );
    }

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Engine configuration version 3 is not supported (supported: 1, 2)"
        );
    }

    #[test]
    fn test_missing_version_names_expected_key() {
        assert!(ConfigError::MissingVersion.to_string().contains("'version: 1'"));
    }
}
