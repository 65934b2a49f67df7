// Value classification

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// The shape of a value as seen by a pattern rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// No value behind an optional or reference wrapper
    Absent,
    /// Textual value
    Text(&'a str),
    /// Raw byte sequence
    Bytes(&'a [u8]),
    /// Anything that is neither text nor bytes
    Unsupported,
}

impl Value<'_> {
    /// Whether the value is empty text or an empty byte sequence
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(text) => text.is_empty(),
            Value::Bytes(bytes) => bytes.is_empty(),
            Value::Absent | Value::Unsupported => false,
        }
    }

    /// Short name of the variant, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Unsupported => "unsupported",
        }
    }
}

/// Types that can be inspected by validation rules.
///
/// Wrappers (`Option`, references, smart pointers) forward to the value they
/// hold; an empty `Option` classifies as [`Value::Absent`]. Implement this
/// for your own string-like or byte-like types to make them checkable.
///
/// `f32` and `f64` have an inherent `classify` method returning
/// `FpCategory`; call `Classify::classify(&value)` for floats.
///
/// ```
/// use sift_validation::{Classify, Value};
///
/// struct Slug(String);
///
/// impl Classify for Slug {
///     fn classify(&self) -> Value<'_> {
///         Value::Text(&self.0)
///     }
/// }
///
/// assert_eq!(Slug("abc".into()).classify(), Value::Text("abc"));
/// assert_eq!(None::<Slug>.classify(), Value::Absent);
/// ```
pub trait Classify {
    fn classify(&self) -> Value<'_>;
}

impl Classify for str {
    fn classify(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Classify for String {
    fn classify(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Classify for [u8] {
    fn classify(&self) -> Value<'_> {
        Value::Bytes(self)
    }
}

impl<const N: usize> Classify for [u8; N] {
    fn classify(&self) -> Value<'_> {
        Value::Bytes(self)
    }
}

impl Classify for Vec<u8> {
    fn classify(&self) -> Value<'_> {
        Value::Bytes(self)
    }
}

impl<T: Classify> Classify for Option<T> {
    fn classify(&self) -> Value<'_> {
        match self {
            Some(value) => value.classify(),
            None => Value::Absent,
        }
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    fn classify(&self) -> Value<'_> {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for &mut T {
    fn classify(&self) -> Value<'_> {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn classify(&self) -> Value<'_> {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Rc<T> {
    fn classify(&self) -> Value<'_> {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Arc<T> {
    fn classify(&self) -> Value<'_> {
        (**self).classify()
    }
}

impl<B> Classify for Cow<'_, B>
where
    B: Classify + ToOwned + ?Sized,
{
    fn classify(&self) -> Value<'_> {
        (**self).classify()
    }
}

/// `null` is absent, strings are text, everything else is unsupported.
impl Classify for serde_json::Value {
    fn classify(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::String(text) => Value::Text(text),
            _ => Value::Unsupported,
        }
    }
}

macro_rules! unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {
                fn classify(&self) -> Value<'_> {
                    Value::Unsupported
                }
            }
        )*
    };
}

unsupported!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
