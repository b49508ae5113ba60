use serde::{Deserialize, Serialize};

/// Switches for optional rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Require the column-name row to start with `Sample_ID,Sample_Name`.
    pub strict_column_names: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            strict_column_names: true,
        }
    }
}

/// Caller-supplied inputs for one validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Sample ID conformance patterns; empty disables the check.
    pub patterns: Vec<String>,
    pub options: ValidationOptions,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }
}
