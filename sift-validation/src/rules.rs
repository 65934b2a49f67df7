// Validation rule chains

use crate::{Classify, FieldError, Rule};
use std::sync::Arc;
use tracing::trace;

/// Ordered list of rules applied to one field.
///
/// Rules run in insertion order and evaluation stops at the first failure;
/// that single error is returned attached to the field name.
#[derive(Clone)]
pub struct RuleChain {
    rules: Vec<Arc<dyn Rule>>,
    field: String,
}

impl RuleChain {
    /// Create a new rule chain for a field
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            field: field.into(),
        }
    }

    /// Append a rule
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Field the chain validates
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate a value, stopping at the first failing rule
    pub fn validate<V: Classify + ?Sized>(&self, value: &V) -> Result<(), FieldError> {
        let value: &dyn Classify = &value;

        for rule in &self.rules {
            if let Err(error) = rule.validate(value) {
                trace!(
                    target: "sift::validation",
                    field = %self.field,
                    rule = rule.name(),
                    "rule chain stopped"
                );
                return Err(error.for_field(self.field.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchRule, ValidationError, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn required(value: &dyn Classify) -> Result<(), ValidationError> {
        match value.classify() {
            Value::Text(text) if !text.is_empty() => Ok(()),
            Value::Bytes(bytes) if !bytes.is_empty() => Ok(()),
            Value::Unsupported => Ok(()),
            _ => Err(ValidationError::new("validation_required", "cannot be blank")),
        }
    }

    #[test]
    fn test_rule_chain() {
        let chain = RuleChain::for_field("username")
            .add(required)
            .add(MatchRule::pattern("^[a-z]+$").unwrap());

        assert_eq!(chain.len(), 2);
        assert!(chain.validate("john").is_ok());

        let err = chain.validate("John1").unwrap_err();
        assert_eq!(err.field, "username");
        assert_eq!(err.error.code(), "validation_match_invalid");

        let err = chain.validate("").unwrap_err();
        assert_eq!(err.error.code(), "validation_required");
    }

    #[test]
    fn test_chain_short_circuits() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let chain = RuleChain::for_field("code")
            .add(MatchRule::pattern("^[0-9]+$").unwrap())
            .add(|_: &dyn Classify| {
                CALLS.fetch_add(1, Ordering::SeqCst);
                Ok::<(), ValidationError>(())
            });

        assert!(chain.validate("abc").is_err());
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        assert!(chain.validate("123").is_ok());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_chain() {
        let chain = RuleChain::for_field("anything");
        assert!(chain.is_empty());
        assert_eq!(chain.field(), "anything");
        assert!(chain.validate(&None::<String>).is_ok());
    }
}
