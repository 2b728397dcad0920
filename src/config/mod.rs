//! Configuration module for diff-boundary.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//!
//! Hosts usually embed [`OptimizerConfig`] in their own settings; it derives
//! `serde` and `schemars` so it can be loaded and documented there.
//!
//! # Quick Start
//!
//! ```rust
//! use diff_boundary::config::{ConfigPreset, Granularity, OptimizerConfig};
//!
//! // Use defaults
//! let config = OptimizerConfig::default();
//!
//! // Use a preset
//! let config = ConfigPreset::Strict.config(Granularity::Lines);
//!
//! // Use builder
//! let config = OptimizerConfig::builder()
//!     .granularity(Granularity::Lines)
//!     .unimportant_line_threshold(2)
//!     .build();
//! let strategy = config.line_strategy().expect("valid config");
//! assert_eq!(strategy.threshold(), 2);
//! ```

mod defaults;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_UNIMPORTANT_LINE_THRESHOLD, MAX_UNIMPORTANT_LINE_THRESHOLD,
};
pub use types::{Granularity, OptimizerConfig, OptimizerConfigBuilder};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `OptimizerConfig` format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(OptimizerConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_mentions_fields() {
        let schema = generate_json_schema();
        assert!(schema.contains("unimportant_line_threshold"));
        assert!(schema.contains("granularity"));
    }
}
