//! Sample ID conformance pattern files: one regular expression per line.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Read patterns from a file, skipping blank lines.
pub fn read_name_patterns(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    let patterns = parse_name_patterns(&text);
    debug!(source = %path.display(), count = patterns.len(), "read name patterns");
    Ok(patterns)
}

pub fn parse_name_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_drops_blank_lines() {
        let patterns = parse_name_patterns("^[0-9]{7}-\n\n  \nEGG[0-9]$  \r\n");
        assert_eq!(patterns, vec!["^[0-9]{7}-", "EGG[0-9]$"]);
    }
}
