//! Fixed-capacity text storage for `SystemInfo` fields

use std::fmt;
use std::ops::Deref;

use crate::error::{FreakyfetchError, Result};

/// A string that never holds more than `CAP` bytes.
///
/// Every write goes through [`BoundedText::set`], which cuts the input at the
/// last UTF-8 boundary that fits instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedText<const CAP: usize> {
    inner: String,
}

impl<const CAP: usize> BoundedText<CAP> {
    pub const CAPACITY: usize = CAP;

    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Build from `value`, truncating if necessary.
    pub fn from_str_truncated(value: &str) -> Self {
        let mut text = Self::new();
        text.set(value);
        text
    }

    /// Replace the content. Returns `true` if `value` had to be truncated.
    pub fn set(&mut self, value: &str) -> bool {
        let fitted = truncate_to_boundary(value, CAP);
        let truncated = fitted.len() < value.len();
        if truncated {
            log::debug!("truncating {} bytes to {}", value.len(), CAP);
        }
        self.inner.clear();
        self.inner.push_str(fitted);
        truncated
    }

    /// Like [`set`](Self::set), but reports truncation as an error.
    /// The truncated value is stored either way.
    pub fn try_set(&mut self, field: &'static str, value: &str) -> Result<()> {
        if self.set(value) {
            return Err(FreakyfetchError::CapacityExceeded {
                field,
                capacity: CAP,
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl<const CAP: usize> Deref for BoundedText<CAP> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl<const CAP: usize> fmt::Display for BoundedText<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl<const CAP: usize> PartialEq<str> for BoundedText<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl<const CAP: usize> PartialEq<&str> for BoundedText<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

/// Longest prefix of `value` that is at most `max` bytes and ends on a char boundary.
pub fn truncate_to_boundary(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}
