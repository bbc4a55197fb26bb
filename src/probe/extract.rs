//! Regex-based scalar extraction
//!
//! Pulls a single value out of a JSON-ish response body without parsing the
//! JSON: the caller supplies a pattern with one capturing group, and the
//! first capture of the first match wins.

use regex::Regex;

use crate::error::ExtractError;

/// Outcome of applying an extraction pattern to a response body
///
/// `NoMatch` is deliberately distinct from a matched empty capture: a probe
/// that captures `""` extracted something, a probe with no match did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// First capture group of the first match
    Matched(String),
    /// Pattern did not match, or matched without a first capture group
    NoMatch,
}

impl ExtractionOutcome {
    /// The captured string, if any
    pub fn captured(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Matched(s) => Some(s),
            ExtractionOutcome::NoMatch => None,
        }
    }
}

/// Apply `pattern` to `body` and return the first capture of the first match.
///
/// Only group 1 is consulted; additional groups are ignored. A pattern with
/// no capturing group can match but never produce a capture, which reads as
/// `NoMatch`.
///
/// # Errors
///
/// Returns `ExtractError::InvalidPattern` if the pattern does not compile.
/// The dispatcher folds this into "extraction failed", but the variant keeps
/// a malformed pattern diagnosable apart from a body that simply lacks the
/// expected text.
pub fn extract(body: &str, pattern: &str) -> Result<ExtractionOutcome, ExtractError> {
    let regex = Regex::new(pattern).map_err(|e| ExtractError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    match regex.captures(body) {
        Some(caps) => match caps.get(1) {
            Some(m) => Ok(ExtractionOutcome::Matched(m.as_str().to_string())),
            None => Ok(ExtractionOutcome::NoMatch),
        },
        None => Ok(ExtractionOutcome::NoMatch),
    }
}
