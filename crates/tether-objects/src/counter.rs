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

use num_traits::PrimInt;
use tether_core::handle::OpaqueKind;

/// A mutable integer counter.
///
/// Deltas are applied with saturating arithmetic, so the count clamps at the
/// bounds of `T` instead of overflowing.
///
/// # Examples
///
/// ```rust
/// # use tether_objects::counter::Counter;
///
/// let mut counter = Counter::new(2_i64);
/// counter.count(1);
/// counter.count(3);
/// assert_eq!(counter.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counter<T> {
    count: T,
}

impl<T> OpaqueKind for Counter<T> {
    const NAME: &'static str = "Counter";
}

impl<T> Counter<T>
where
    T: PrimInt,
{
    /// Creates a new counter starting at `initial`.
    #[inline]
    pub fn new(initial: T) -> Self {
        Self { count: initial }
    }

    /// Adds `delta` to the current count.
    #[inline]
    pub fn count(&mut self, delta: T) {
        self.count = self.count.saturating_add(delta);
    }

    /// Returns the current count.
    #[inline]
    pub fn get(&self) -> T {
        self.count
    }
}

impl<T> Default for Counter<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T> std::fmt::Display for Counter<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Counter({})", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counting_sequence() {
        let mut counter = Counter::new(2_i64);
        assert_eq!(counter.get(), 2);
        counter.count(1);
        assert_eq!(counter.get(), 3);
        counter.count(3);
        assert_eq!(counter.get(), 6);
    }

    #[test]
    fn test_negative_deltas() {
        let mut counter = Counter::new(0_i32);
        counter.count(-5);
        assert_eq!(counter.get(), -5);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let mut counter = Counter::new(i64::MAX - 1);
        counter.count(10);
        assert_eq!(counter.get(), i64::MAX);

        let mut counter = Counter::new(i64::MIN + 1);
        counter.count(-10);
        assert_eq!(counter.get(), i64::MIN);
    }

    #[test]
    fn test_default_and_display() {
        let counter = Counter::<u8>::default();
        assert_eq!(counter.get(), 0);
        assert_eq!(counter.to_string(), "Counter(0)");
    }

    proptest! {
        #[test]
        fn prop_count_is_sum_of_deltas(
            initial in -1_000_000i64..1_000_000,
            d1 in -1_000_000i64..1_000_000,
            d2 in -1_000_000i64..1_000_000,
        ) {
            let mut counter = Counter::new(initial);
            counter.count(d1);
            counter.count(d2);
            prop_assert_eq!(counter.get(), initial + d1 + d2);
        }
    }
}
