//! Default values and presets for diff-boundary.

use super::types::{Granularity, OptimizerConfig};

// ============================================================================
// Default Values
// ============================================================================

/// Lines with at most this many non-space chars are treated as break points.
pub const DEFAULT_UNIMPORTANT_LINE_THRESHOLD: usize = 3;

/// Largest threshold accepted by validation.
pub const MAX_UNIMPORTANT_LINE_THRESHOLD: usize = 80;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Blank lines and short lines like a lone brace are break points
    Default,
    /// Only truly empty lines are break points
    Strict,
    /// Short headings and separators are break points as well
    Relaxed,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" | "blank-only" => Some(Self::Strict),
            "relaxed" | "loose" => Some(Self::Relaxed),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Break at blank lines and lines with up to 3 visible chars",
            Self::Strict => "Break only at completely blank lines",
            Self::Relaxed => "Break at lines with up to 8 visible chars, such as short separators",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Relaxed]
    }

    /// Build the configuration for this preset at the given granularity.
    #[must_use]
    pub fn config(&self, granularity: Granularity) -> OptimizerConfig {
        let unimportant_line_threshold = match self {
            Self::Default => DEFAULT_UNIMPORTANT_LINE_THRESHOLD,
            Self::Strict => 0,
            Self::Relaxed => 8,
        };
        OptimizerConfig {
            unimportant_line_threshold,
            granularity,
        }
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
