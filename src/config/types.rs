//! Configuration types for diff-boundary.

use super::defaults::DEFAULT_UNIMPORTANT_LINE_THRESHOLD;
use super::validation::{ConfigError, Validatable};
use crate::alignment::FairAlignment;
use crate::error::{OptimizeError, Result};
use crate::model::Range;
use crate::optimizer::{optimize_lines, optimize_words, Documents, LineShift};
use crate::progress::ProgressIndicator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Granularity
// ============================================================================

/// The unit a host tokenizes documents into before optimizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Word tokens, optimized with [`WordShift`](crate::optimizer::WordShift)
    #[default]
    Words,
    /// Whole lines, optimized with [`LineShift`]
    Lines,
}

impl Granularity {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }
}

// ============================================================================
// Optimizer Configuration
// ============================================================================

/// Settings for a boundary optimization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Lines with at most this many non-space chars count as natural break points
    #[schemars(range(max = 80))]
    pub unimportant_line_threshold: usize,
    /// Which strategy the host pairs with this configuration
    pub granularity: Granularity,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            unimportant_line_threshold: DEFAULT_UNIMPORTANT_LINE_THRESHOLD,
            granularity: Granularity::Words,
        }
    }
}

impl OptimizerConfig {
    /// Create a new `OptimizerConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `OptimizerConfig` builder.
    pub fn builder() -> OptimizerConfigBuilder {
        OptimizerConfigBuilder::default()
    }

    /// Build the line strategy for this configuration.
    ///
    /// Fails with the first validation error if the configuration is invalid.
    pub fn line_strategy(&self) -> Result<LineShift> {
        if let Some(error) = self.validate().into_iter().next() {
            return Err(OptimizeError::Config(error));
        }
        Ok(LineShift::new(self.unimportant_line_threshold))
    }

    /// Run the strategy this configuration's granularity selects.
    ///
    /// Fails with a `granularity` error when `documents` were tokenized at a
    /// different granularity than configured.
    pub fn optimize<I>(
        &self,
        documents: Documents<'_>,
        ranges: I,
        indicator: &dyn ProgressIndicator,
    ) -> Result<FairAlignment>
    where
        I: IntoIterator<Item = Range>,
    {
        if documents.granularity() != self.granularity {
            return Err(OptimizeError::Config(ConfigError {
                field: "granularity".to_string(),
                message: format!(
                    "Configured for {}, got {} documents",
                    self.granularity.name(),
                    documents.granularity().name()
                ),
            }));
        }

        match documents {
            Documents::Words(words1, words2) => {
                if let Some(error) = self.validate().into_iter().next() {
                    return Err(OptimizeError::Config(error));
                }
                optimize_words(words1, words2, ranges, indicator)
            }
            Documents::Lines(lines1, lines2) => {
                optimize_lines(lines1, lines2, ranges, self.line_strategy()?, indicator)
            }
        }
    }
}

// ============================================================================
// Builder for OptimizerConfig
// ============================================================================

/// Builder for constructing `OptimizerConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct OptimizerConfigBuilder {
    config: OptimizerConfig,
}

impl OptimizerConfigBuilder {
    /// Set the unimportant line threshold.
    pub const fn unimportant_line_threshold(mut self, threshold: usize) -> Self {
        self.config.unimportant_line_threshold = threshold;
        self
    }

    /// Set the granularity.
    pub const fn granularity(mut self, granularity: Granularity) -> Self {
        self.config.granularity = granularity;
        self
    }

    /// Build the `OptimizerConfig`.
    #[must_use]
    pub fn build(self) -> OptimizerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.unimportant_line_threshold, 3);
        assert_eq!(config.granularity, Granularity::Words);
    }

    #[test]
    fn test_builder() {
        let config = OptimizerConfig::builder()
            .unimportant_line_threshold(5)
            .granularity(Granularity::Lines)
            .build();
        assert_eq!(config.unimportant_line_threshold, 5);
        assert_eq!(config.granularity.name(), "lines");
    }

    #[test]
    fn test_line_strategy_rejects_invalid_threshold() {
        let config = OptimizerConfig::builder()
            .unimportant_line_threshold(500)
            .build();
        assert!(matches!(
            config.line_strategy(),
            Err(OptimizeError::Config(_))
        ));
    }

    #[test]
    fn test_line_strategy_uses_threshold() {
        let strategy = OptimizerConfig::default()
            .line_strategy()
            .expect("default config is valid");
        assert_eq!(strategy.threshold(), 3);
    }

    #[test]
    fn test_optimize_dispatches_on_granularity() {
        use crate::model::{Line, TextChunks, Token};
        use crate::progress::NeverCancel;

        let text = "a b";
        let tokens = [Token::plain(0, 1), Token::plain(2, 3)];
        let words = TextChunks::new(text, &tokens);
        let split = [Range::new(0, 1, 0, 1), Range::new(1, 2, 1, 2)];

        let merged = OptimizerConfig::default()
            .optimize(Documents::Words(words, words), split, &NeverCancel)
            .expect("words config accepts word documents");
        assert_eq!(merged.unchanged(), &[Range::new(0, 2, 0, 2)]);

        let lines = [Line::new(0, 3, 2)];
        let lines = TextChunks::new(text, &lines);
        let err = OptimizerConfig::default()
            .optimize(Documents::Lines(lines, lines), split, &NeverCancel)
            .expect_err("granularity mismatch");
        assert!(matches!(
            err,
            OptimizeError::Config(ConfigError { ref field, .. }) if field == "granularity"
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"granularity":"lines"}"#).expect("deserialize");
        assert_eq!(config.granularity, Granularity::Lines);
        assert_eq!(config.unimportant_line_threshold, 3);
    }
}
