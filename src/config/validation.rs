//! Configuration validation for diff-boundary.

use super::defaults::MAX_UNIMPORTANT_LINE_THRESHOLD;
use super::types::OptimizerConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for OptimizerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.unimportant_line_threshold > MAX_UNIMPORTANT_LINE_THRESHOLD {
            errors.push(ConfigError {
                field: "unimportant_line_threshold".to_string(),
                message: format!(
                    "Threshold must be at most {}, got {}",
                    MAX_UNIMPORTANT_LINE_THRESHOLD, self.unimportant_line_threshold
                ),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OptimizerConfig::default().is_valid());
    }

    #[test]
    fn test_threshold_limit() {
        let at_limit = OptimizerConfig::builder()
            .unimportant_line_threshold(MAX_UNIMPORTANT_LINE_THRESHOLD)
            .build();
        assert!(at_limit.is_valid());

        let over = OptimizerConfig::builder()
            .unimportant_line_threshold(MAX_UNIMPORTANT_LINE_THRESHOLD + 1)
            .build();
        let errors = over.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "unimportant_line_threshold");
        assert_eq!(errors[0].message, "Threshold must be at most 80, got 81");
    }
}
