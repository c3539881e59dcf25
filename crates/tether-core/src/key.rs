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

//! # Generation-Tagged Handle Keys
//!
//! A `HandleKey<T>` names a slot in a `Registry<T>` together with the generation
//! the slot had when the key was issued. Slots are recycled after release with
//! a bumped generation, so a key that outlives its resource never aliases a
//! newer resource in the same slot.
//!
//! The payload type is carried as a phantom parameter, so keys of different
//! registries cannot be mixed up at compile time, while the key itself is two
//! plain integers.
//!
//! ## Usage
//!
//! ```rust
//! use tether_core::handle::OpaqueKind;
//! use tether_core::key::HandleKey;
//!
//! struct Widget;
//! impl OpaqueKind for Widget { const NAME: &'static str = "Widget"; }
//!
//! let k = HandleKey::<Widget>::new(3, 1);
//! assert_eq!(k.index(), 3);
//! assert_eq!(k.generation(), 1);
//! assert_eq!(format!("{}", k), "Widget(3#1)");
//! ```

use crate::handle::OpaqueKind;

/// A strongly typed, generation-tagged key into a `Registry<T>`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::handle::OpaqueKind;
/// # use tether_core::key::HandleKey;
///
/// struct Widget;
///
/// impl OpaqueKind for Widget {
///    const NAME: &'static str = "Widget";
/// }
///
/// let key = HandleKey::<Widget>::new(5, 0);
/// assert_eq!(key.index(), 5);
/// ```
pub struct HandleKey<T> {
    index: usize,
    generation: u32,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> HandleKey<T> {
    /// Creates a new `HandleKey` for the given slot index and generation.
    #[inline(always)]
    pub const fn new(index: usize, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the slot index of the key.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the generation the slot had when this key was issued.
    #[inline(always)]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

// Manual impls: deriving would put bounds on `T`.
impl<T> Clone for HandleKey<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HandleKey<T> {}

impl<T> PartialEq for HandleKey<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for HandleKey<T> {}

impl<T> std::hash::Hash for HandleKey<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> std::fmt::Debug for HandleKey<T>
where
    T: OpaqueKind,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}#{})", T::NAME, self.index, self.generation)
    }
}

impl<T> std::fmt::Display for HandleKey<T>
where
    T: OpaqueKind,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}#{})", T::NAME, self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct TestKind;

    impl OpaqueKind for TestKind {
        const NAME: &'static str = "TestKey";
    }

    type TestKey = HandleKey<TestKind>;

    #[test]
    fn test_new_and_get() {
        let key = TestKey::new(10, 4);
        assert_eq!(key.index(), 10);
        assert_eq!(key.generation(), 4);
    }

    #[test]
    fn test_debug_and_display() {
        let key = TestKey::new(7, 2);
        assert_eq!(format!("{}", key), "TestKey(7#2)");
        assert_eq!(format!("{:?}", key), "TestKey(7#2)");
    }

    #[test]
    fn test_equality_includes_generation() {
        assert_eq!(TestKey::new(1, 0), TestKey::new(1, 0));
        assert_ne!(TestKey::new(1, 0), TestKey::new(1, 1));
        assert_ne!(TestKey::new(0, 1), TestKey::new(1, 1));
    }

    #[test]
    fn test_hash_distinguishes_generations() {
        let mut set = HashSet::new();
        set.insert(TestKey::new(0, 0));
        set.insert(TestKey::new(0, 1));
        set.insert(TestKey::new(0, 0));
        assert_eq!(set.len(), 2);
    }
}
