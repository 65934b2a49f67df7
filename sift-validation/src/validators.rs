// Pattern match validators

use crate::errors::{ERR_MATCH_INVALID, Result};
use crate::{Classify, Matcher, Pattern, Rule, ValidationError, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Checks that a value matches (or, inverted, does not match) a pattern.
///
/// Only strings and byte sequences are checked. Absent values, empty values
/// and values of any other type are considered valid; pair this rule with a
/// required rule when a value must be present.
///
/// Reconfiguration consumes the rule and returns a new one, so a rule that
/// has been shared with other threads is never modified.
#[derive(Clone)]
pub struct MatchRule {
    matcher: Arc<dyn Matcher>,
    error: ValidationError,
    invert: bool,
}

impl MatchRule {
    /// Rule that passes when the value matches
    pub fn matching<M: Matcher + 'static>(matcher: M) -> Self {
        Self::build(Arc::new(matcher), false)
    }

    /// Rule that passes when the value does not match
    pub fn not_matching<M: Matcher + 'static>(matcher: M) -> Self {
        Self::build(Arc::new(matcher), true)
    }

    /// Compile `pattern` and build a [`MatchRule::matching`] rule
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::matching(Pattern::new(pattern)?))
    }

    /// Compile `pattern` and build a [`MatchRule::not_matching`] rule
    pub fn not_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::not_matching(Pattern::new(pattern)?))
    }

    fn build(matcher: Arc<dyn Matcher>, invert: bool) -> Self {
        Self {
            matcher,
            error: (*ERR_MATCH_INVALID).clone(),
            invert,
        }
    }

    /// Replace the error message, keeping the error code
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error = self.error.with_message(message);
        self
    }

    /// Replace the error returned on failure
    pub fn with_error(mut self, error: ValidationError) -> Self {
        self.error = error;
        self
    }

    /// The error returned on failure
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    /// Whether the rule requires the value not to match
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Validate a value against the pattern
    pub fn validate<V: Classify + ?Sized>(
        &self,
        value: &V,
    ) -> std::result::Result<(), ValidationError> {
        let value = value.classify();
        let matched = match value {
            Value::Text(text) if !text.is_empty() => self.matcher.is_match_text(text),
            Value::Bytes(bytes) if !bytes.is_empty() => self.matcher.is_match_bytes(bytes),
            _ => {
                trace!(target: "sift::validation", kind = value.kind(), "skipping pattern check");
                return Ok(());
            }
        };

        trace!(
            target: "sift::validation",
            kind = value.kind(),
            matched,
            invert = self.invert,
            "pattern evaluated"
        );

        if matched ^ self.invert {
            Ok(())
        } else {
            debug!(
                target: "sift::validation",
                code = self.error.code(),
                "pattern rule rejected value"
            );
            Err(self.error.clone())
        }
    }
}

impl Rule for MatchRule {
    fn validate(&self, value: &dyn Classify) -> std::result::Result<(), ValidationError> {
        MatchRule::validate(self, value)
    }

    fn name(&self) -> &'static str {
        if self.invert { "not_match" } else { "match" }
    }
}

impl fmt::Debug for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchRule")
            .field("error", &self.error)
            .field("invert", &self.invert)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`MatchRule::matching`]
pub fn matches<M: Matcher + 'static>(matcher: M) -> MatchRule {
    MatchRule::matching(matcher)
}

/// Shorthand for [`MatchRule::not_matching`]
pub fn not_matches<M: Matcher + 'static>(matcher: M) -> MatchRule {
    MatchRule::not_matching(matcher)
}
