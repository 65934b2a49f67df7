// Pattern matchers

use crate::errors::Result;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A precompiled pattern that can test both text and raw bytes.
///
/// Implementations must be free of per-call mutable state: a single matcher
/// is shared by every clone of a rule and may be used from many threads.
pub trait Matcher: Send + Sync {
    /// Test a string
    fn is_match_text(&self, text: &str) -> bool;

    /// Test a byte sequence
    fn is_match_bytes(&self, bytes: &[u8]) -> bool;
}

/// Compiled regular expression matching text and bytes with one semantics.
///
/// Bytes are decoded as UTF-8 before matching. Each byte that is not part of
/// a valid sequence becomes one U+FFFD, so `^.+$` accepts `[0xff]` and the
/// truncated sequence `[0xf0, 0x9f]` counts as two characters.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern, failing if it is not a valid regular expression
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Matcher for Pattern {
    fn is_match_text(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn is_match_bytes(&self, bytes: &[u8]) -> bool {
        self.regex.is_match_bytes(bytes)
    }
}

/// Same byte semantics as [`Pattern`]: one U+FFFD per invalid byte.
impl Matcher for Regex {
    fn is_match_text(&self, text: &str) -> bool {
        self.is_match(text)
    }

    fn is_match_bytes(&self, bytes: &[u8]) -> bool {
        self.is_match(&decode_utf8(bytes))
    }
}

/// Decode bytes, replacing every byte of an invalid sequence with U+FFFD.
///
/// Unlike `String::from_utf8_lossy`, a truncated multi-byte sequence yields
/// one replacement character per byte.
fn decode_utf8(bytes: &[u8]) -> Cow<'_, str> {
    let mut rest = match std::str::from_utf8(bytes) {
        Ok(text) => return Cow::Borrowed(text),
        Err(_) => bytes,
    };

    let mut decoded = String::with_capacity(bytes.len() + 2);
    loop {
        match std::str::from_utf8(rest) {
            Ok(text) => {
                decoded.push_str(text);
                return Cow::Owned(decoded);
            }
            Err(err) => {
                let (valid, invalid) = rest.split_at(err.valid_up_to());
                decoded.push_str(&String::from_utf8_lossy(valid));
                decoded.push(char::REPLACEMENT_CHARACTER);
                rest = &invalid[1..];
            }
        }
    }
}

/// Raw byte semantics: `.` and character classes never match invalid UTF-8,
/// so `^.+$` rejects `[0xff]`. Use [`Pattern`] to treat invalid bytes as
/// replacement characters.
impl Matcher for regex::bytes::Regex {
    fn is_match_text(&self, text: &str) -> bool {
        self.is_match(text.as_bytes())
    }

    fn is_match_bytes(&self, bytes: &[u8]) -> bool {
        self.is_match(bytes)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn is_match_text(&self, text: &str) -> bool {
        (**self).is_match_text(text)
    }

    fn is_match_bytes(&self, bytes: &[u8]) -> bool {
        (**self).is_match_bytes(bytes)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn is_match_text(&self, text: &str) -> bool {
        (**self).is_match_text(text)
    }

    fn is_match_bytes(&self, bytes: &[u8]) -> bool {
        (**self).is_match_bytes(bytes)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn is_match_text(&self, text: &str) -> bool {
        (**self).is_match_text(text)
    }

    fn is_match_bytes(&self, bytes: &[u8]) -> bool {
        (**self).is_match_bytes(bytes)
    }
}
