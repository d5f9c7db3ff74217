//! Pattern literals and their flag validation error type.

use thiserror::Error;

/// Error produced when constructing a [`RegExp`] with an invalid flag string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegExpError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(char),
    #[error("duplicate flag `{0}`")]
    DuplicateFlag(char),
    #[error("flags `u` and `v` cannot be combined")]
    IncompatibleFlags,
}

/// Recognized modifier flag characters.
const FLAGS: &[char] = &['d', 'g', 'i', 'm', 's', 'u', 'v', 'y'];

/// A pattern literal: source text plus modifier flags.
///
/// Equality is textual on both fields. Flags are compared as written, so the
/// same flag set in a different order does not compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Build a pattern literal, validating the flag string: every character
    /// must be a recognized flag, appear at most once, and `u`/`v` are
    /// mutually exclusive.
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Result<Self, RegExpError> {
        let source = source.into();
        let flags = flags.into();
        let mut seen: Vec<char> = Vec::new();
        for c in flags.chars() {
            if !FLAGS.contains(&c) {
                return Err(RegExpError::UnknownFlag(c));
            }
            if seen.contains(&c) {
                return Err(RegExpError::DuplicateFlag(c));
            }
            seen.push(c);
        }
        if seen.contains(&'u') && seen.contains(&'v') {
            return Err(RegExpError::IncompatibleFlags);
        }
        Ok(Self { source, flags })
    }

    /// The pattern source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flag string, as written.
    pub fn flags(&self) -> &str {
        &self.flags
    }
}
