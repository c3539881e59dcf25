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

use crate::duration::Duration;
use std::time::SystemTime;
use tether_core::handle::OpaqueKind;

/// A captured point in time.
///
/// The monotonic reading is used for every elapsed-time measurement, so derived
/// durations are never negative. The wall-clock reading is kept for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    monotonic: std::time::Instant,
    wall: SystemTime,
}

impl OpaqueKind for Instant {
    const NAME: &'static str = "Instant";
}

impl Instant {
    /// Captures the current point in time.
    #[inline]
    pub fn now() -> Self {
        Self {
            monotonic: std::time::Instant::now(),
            wall: SystemTime::now(),
        }
    }

    /// Returns the time elapsed between the capture and this call.
    ///
    /// The instant itself is left untouched, so it can be measured repeatedly.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        Duration::from(self.monotonic.elapsed())
    }

    /// Returns the time elapsed between the capture and `later`, or zero if
    /// `later` was captured first.
    #[inline]
    pub fn duration_until(&self, later: &Instant) -> Duration {
        Duration::from(later.monotonic.saturating_duration_since(self.monotonic))
    }

    /// Returns the wall-clock time of the capture.
    #[inline]
    pub fn captured_at(&self) -> SystemTime {
        self.wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_non_negative_and_small() {
        let instant = Instant::now();
        let elapsed = instant.elapsed();
        assert!(elapsed.as_std() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_repeated_measurements_are_monotonic() {
        let instant = Instant::now();
        let first = instant.elapsed();
        let second = instant.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn test_duration_until_earlier_instant_is_zero() {
        let earlier = Instant::now();
        let later = Instant::now();
        assert_eq!(later.duration_until(&earlier).as_std(), std::time::Duration::ZERO);
        assert!(earlier.duration_until(&later) <= earlier.elapsed());
    }

    #[test]
    fn test_captured_at_is_not_in_the_future() {
        let instant = Instant::now();
        assert!(instant.captured_at() <= SystemTime::now());
    }
}
