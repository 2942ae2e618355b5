//! Error types for the earnings calculator.
//!
//! The calculation functions themselves are total and never fail. Errors only
//! arise at the configuration boundary, when a config file is read or when
//! values supplied by the configuration store are out of range.

use thiserror::Error;

/// The main error type for the earnings calculator.
///
/// # Example
///
/// ```
/// use phulkas_earnings::error::EarningsError;
///
/// let error = EarningsError::ConfigNotFound {
///     path: "/missing/earnings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/earnings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EarningsError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is outside its allowed range.
    #[error("Invalid configuration value '{key}': {message}")]
    InvalidConfigValue {
        /// The configuration key holding the bad value.
        key: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EarningsError.
pub type EarningsResult<T> = Result<T, EarningsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EarningsError::ConfigNotFound {
            path: "/missing/earnings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/earnings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EarningsError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_value_displays_key_and_message() {
        let error = EarningsError::InvalidConfigValue {
            key: "LUNCH_DRINK_SHARE_PERCENT".to_string(),
            message: "must be between 0 and 1, got 1.5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'LUNCH_DRINK_SHARE_PERCENT': must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let error = EarningsError::ConfigNotFound {
            path: "test".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigNotFound"));
    }
}
