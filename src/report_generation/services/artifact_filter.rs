use crate::report_generation::domain::ArtifactRecord;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// ArtifactFilter - Drops artifacts matching exclusion patterns
///
/// A pattern is matched against both `group:name` and the bare `name`.
/// `*` matches zero or more characters; matching is case-sensitive.
#[derive(Debug)]
pub struct ArtifactFilter {
    patterns: Vec<ExcludePattern>,
}

impl ArtifactFilter {
    /// Creates a new ArtifactFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(ReportError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Filter that excludes nothing
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Returns the artifacts that match no exclusion pattern, in input order
    pub fn filter_artifacts(&self, artifacts: &[ArtifactRecord]) -> Vec<ArtifactRecord> {
        artifacts
            .iter()
            .filter(|artifact| !self.is_excluded(artifact))
            .cloned()
            .collect()
    }

    /// Checks a single artifact against every pattern
    pub fn is_excluded(&self, artifact: &ArtifactRecord) -> bool {
        let coordinate = artifact.coordinate();
        let qualified = format!("{}:{}", coordinate.group(), coordinate.name());
        // No short-circuit: every pattern records whether it matched
        let mut excluded = false;
        for pattern in &self.patterns {
            excluded |= pattern.matches(&qualified) | pattern.matches(coordinate.name());
        }
        excluded
    }

    /// Patterns that did not match any artifact seen so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern, split on `*`
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    parts: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let parts = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            parts,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, candidate: &str) -> bool {
        let is_match = wildcard_match(&self.parts, candidate);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored wildcard match: first part is a prefix, last part a suffix,
/// middle parts appear in order between them.
fn wildcard_match(parts: &[String], candidate: &str) -> bool {
    match parts {
        [] => candidate.is_empty(),
        [exact] => candidate == exact,
        [first, middle @ .., last] => {
            if candidate.len() < first.len() + last.len()
                || !candidate.starts_with(first.as_str())
                || !candidate.ends_with(last.as_str())
            {
                return false;
            }
            let mut remaining = &candidate[first.len()..candidate.len() - last.len()];
            for part in middle {
                match remaining.find(part.as_str()) {
                    Some(pos) => remaining = &remaining[pos + part.len()..],
                    None => return false,
                }
            }
            true
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error { ReportError::Validation { message }.into() };

    if pattern.is_empty() {
        return Err(invalid("Exclusion pattern cannot be empty".to_string()));
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(invalid(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        )));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return Err(invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons, and asterisks (*) are allowed.",
            ch, pattern
        )));
    }

    if pattern.chars().all(|c| c == '*') {
        return Err(invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        )));
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '*')
}
