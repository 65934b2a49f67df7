// Sift - composable field validation rules for Rust
//
// The root crate re-exports the member crates enabled through features.

#[cfg(feature = "validation")]
pub use sift_validation;

#[cfg(feature = "validation")]
pub use sift_validation::{
    Classify, FieldError, MatchRule, MatchRuleConfig, Matcher, Pattern, Rule, RuleChain,
    ValidationError, Value, matches, not_matches,
};
