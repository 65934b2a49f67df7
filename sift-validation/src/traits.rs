// Validation traits

use crate::{Classify, ValidationError};

/// A single validation rule.
///
/// Rules are object safe so they can be stored side by side in a
/// [`RuleChain`](crate::RuleChain). `Ok(())` means the value is valid.
pub trait Rule: Send + Sync {
    /// Validate a value
    fn validate(&self, value: &dyn Classify) -> Result<(), ValidationError>;

    /// Get rule name
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Any thread-safe closure over a classified value is a rule.
impl<F> Rule for F
where
    F: Fn(&dyn Classify) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, value: &dyn Classify) -> Result<(), ValidationError> {
        self(value)
    }
}
