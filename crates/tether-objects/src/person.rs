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

use crate::{error::RStringError, rstring::RString};
use tether_core::handle::OpaqueKind;

/// A composite of a given name and a family name.
///
/// # Examples
///
/// ```rust
/// # use tether_objects::person::Person;
///
/// let person = Person::from_strs("Danilo", "Guanabara").unwrap();
/// let full_name = person.full_name();
/// drop(person);
/// assert_eq!(full_name.to_str().unwrap(), "Danilo Guanabara");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    given_name: RString,
    family_name: RString,
}

impl OpaqueKind for Person {
    const NAME: &'static str = "Person";
}

impl Person {
    #[inline]
    pub fn new(given_name: RString, family_name: RString) -> Self {
        Self {
            given_name,
            family_name,
        }
    }

    /// Creates a person from two string slices.
    ///
    /// # Errors
    ///
    /// Returns `RStringError::InteriorNul` if either name contains a NUL byte.
    pub fn from_strs(given_name: &str, family_name: &str) -> Result<Self, RStringError> {
        Ok(Self::new(RString::new(given_name)?, RString::new(family_name)?))
    }

    #[inline]
    pub fn given_name(&self) -> &RString {
        &self.given_name
    }

    #[inline]
    pub fn family_name(&self) -> &RString {
        &self.family_name
    }

    /// Returns a newly allocated `"given family"` string.
    ///
    /// The result is owned by the caller and outlives `self`.
    #[inline]
    pub fn full_name(&self) -> RString {
        RString::join(&[&self.given_name, &self.family_name], b' ')
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}
