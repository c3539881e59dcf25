// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::error::RStringError;
use libc::c_char;
use std::ffi::{CStr, CString};
use tether_core::handle::OpaqueKind;

/// An owned, NUL-free text buffer.
///
/// The text is copied at construction and never changes afterwards. It is stored
/// NUL-terminated, so a pointer to it can be handed to C directly.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RString {
    inner: CString,
}

impl OpaqueKind for RString {
    const NAME: &'static str = "RString";
}

impl RString {
    /// Copies `text` into a new `RString`.
    ///
    /// # Errors
    ///
    /// Returns `RStringError::InteriorNul` if `text` contains a NUL byte.
    #[inline]
    pub fn new(text: &str) -> Result<Self, RStringError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Copies `bytes` into a new `RString`.
    ///
    /// # Errors
    ///
    /// Returns `RStringError::InteriorNul` if `bytes` contains a NUL byte.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RStringError> {
        Ok(Self {
            inner: CString::new(bytes)?,
        })
    }

    /// Copies a C string into a new `RString`.
    #[inline]
    pub fn from_c_str(text: &CStr) -> Self {
        Self {
            inner: text.to_owned(),
        }
    }

    /// Joins the contents of `parts` with `separator` into a new `RString`.
    ///
    /// # Panics
    ///
    /// This function will panic if `separator` is NUL.
    pub fn join(parts: &[&RString], separator: u8) -> Self {
        assert!(
            separator != 0,
            "called `RString::join` with a NUL separator"
        );

        let capacity = parts.iter().map(|p| p.len() + 1).sum::<usize>();
        let mut bytes = Vec::with_capacity(capacity);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                bytes.push(separator);
            }
            bytes.extend_from_slice(part.as_bytes());
        }

        // Every part is NUL-free and so is the separator.
        let inner = CString::new(bytes).expect("`RString::join` should produce a NUL-free buffer");
        Self { inner }
    }

    /// Returns a pointer to the NUL-terminated contents, valid while `self` lives.
    #[inline]
    pub fn as_ptr(&self) -> *const c_char {
        self.inner.as_ptr()
    }

    #[inline]
    pub fn as_c_str(&self) -> &CStr {
        self.inner.as_c_str()
    }

    /// Returns the contents without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Returns the contents as `&str`.
    ///
    /// # Errors
    ///
    /// Returns `RStringError::InvalidUtf8` if the contents came from a C string
    /// that is not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Result<&str, RStringError> {
        Ok(self.inner.to_str()?)
    }

    /// Returns the length in bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.as_bytes().is_empty()
    }
}

impl From<&CStr> for RString {
    #[inline]
    fn from(text: &CStr) -> Self {
        Self::from_c_str(text)
    }
}

impl TryFrom<&str> for RString {
    type Error = RStringError;

    #[inline]
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<String> for RString {
    type Error = RStringError;

    #[inline]
    fn try_from(text: String) -> Result<Self, Self::Error> {
        Ok(Self {
            inner: CString::new(text)?,
        })
    }
}

impl std::fmt::Display for RString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip() {
        let s = RString::new("Hello!").unwrap();
        assert_eq!(s.to_str().unwrap(), "Hello!");
        assert_eq!(s.len(), 6);
        let c = unsafe { CStr::from_ptr(s.as_ptr()) };
        assert_eq!(c.to_bytes(), b"Hello!");
    }

    #[test]
    fn test_empty_string() {
        let s = RString::new("").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.as_c_str().to_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        assert_eq!(
            RString::new("ab\0cd"),
            Err(RStringError::InteriorNul { position: 2 })
        );
    }

    #[test]
    fn test_non_utf8_c_string_is_preserved() {
        let raw = CStr::from_bytes_with_nul(b"caf\xe9\0").unwrap();
        let s = RString::from_c_str(raw);
        assert_eq!(s.as_bytes(), b"caf\xe9");
        assert!(matches!(s.to_str(), Err(RStringError::InvalidUtf8(_))));
        assert_eq!(s.to_string(), "caf\u{fffd}");
    }

    #[test]
    fn test_join() {
        let a = RString::new("Danilo").unwrap();
        let b = RString::new("Guanabara").unwrap();
        assert_eq!(RString::join(&[&a, &b], b' ').to_str().unwrap(), "Danilo Guanabara");
        assert_eq!(RString::join(&[&a], b' ').to_str().unwrap(), "Danilo");
        assert!(RString::join(&[], b' ').is_empty());
    }

    #[test]
    #[should_panic(expected = "called `RString::join` with a NUL separator")]
    fn test_join_with_nul_separator_panics() {
        let a = RString::new("a").unwrap();
        let _ = RString::join(&[&a, &a], 0);
    }

    #[test]
    fn test_conversions() {
        let from_str = RString::try_from("text").unwrap();
        let from_string = RString::try_from(String::from("text")).unwrap();
        let from_cstr = RString::from(from_str.as_c_str());
        assert_eq!(from_str, from_string);
        assert_eq!(from_str, from_cstr);
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_byte_exact(text in "[^\\x00]*") {
            let s = RString::new(&text).unwrap();
            prop_assert_eq!(s.as_bytes(), text.as_bytes());
            prop_assert_eq!(s.to_str().unwrap(), text.as_str());
        }
    }
}
