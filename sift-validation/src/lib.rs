//! Pattern validation rules for Sift
//!
//! Provides a composable rule that checks strings and byte sequences against
//! a regular expression, or checks that they do not match one.
//!
//! Absent values (`None`, JSON `null`) and empty values always pass. Values
//! that are neither text nor bytes pass as well: the rule only constrains
//! textual input.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use sift_validation::MatchRule;
//!
//! let rule = MatchRule::pattern("^[a-z]+$").unwrap();
//!
//! assert!(rule.validate("abc").is_ok());
//! assert!(rule.validate("").is_ok());
//! assert!(rule.validate(&None::<String>).is_ok());
//!
//! let err = rule.validate("123").unwrap_err();
//! assert_eq!(err.message(), "must be in a valid format");
//! ```
//!
//! ## Inverted Rules and Custom Errors
//!
//! ```
//! use sift_validation::{not_matches, Pattern, ValidationError};
//!
//! let rule = not_matches(Pattern::new(r"\s").unwrap())
//!     .with_error(ValidationError::new("no_whitespace", "must not contain spaces"));
//!
//! assert!(rule.validate(b"tight").is_ok());
//! assert_eq!(rule.validate("a b").unwrap_err().code(), "no_whitespace");
//! ```
//!
//! ## Rule Chains
//!
//! ```
//! use sift_validation::{Classify, MatchRule, RuleChain, ValidationError, Value};
//!
//! fn required(value: &dyn Classify) -> Result<(), ValidationError> {
//!     if matches!(value.classify(), Value::Absent) || value.classify().is_empty() {
//!         Err(ValidationError::new("validation_required", "cannot be blank"))
//!     } else {
//!         Ok(())
//!     }
//! }
//!
//! let chain = RuleChain::for_field("slug")
//!     .add(required)
//!     .add(MatchRule::pattern("^[a-z-]+$").unwrap());
//!
//! assert!(chain.validate("hello-world").is_ok());
//! assert_eq!(
//!     chain.validate("Hello").unwrap_err().to_string(),
//!     "slug: must be in a valid format"
//! );
//! ```

mod config;
pub mod errors;
mod matcher;
mod rules;
mod traits;
mod validators;
mod value;

pub use config::*;
pub use errors::{BuildError, ERR_MATCH_INVALID, FieldError, ValidationError};
pub use matcher::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
pub use value::*;
