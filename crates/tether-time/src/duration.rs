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

use crate::render::{render, RenderConfig};
use tether_core::handle::OpaqueKind;

/// An immutable elapsed-time interval.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    inner: std::time::Duration,
}

impl OpaqueKind for Duration {
    const NAME: &'static str = "Duration";
}

impl Duration {
    pub const ZERO: Duration = Duration {
        inner: std::time::Duration::ZERO,
    };

    /// Returns the underlying `std::time::Duration`.
    #[inline]
    pub fn as_std(&self) -> std::time::Duration {
        self.inner
    }

    /// Returns the total number of whole nanoseconds, saturating at `u64::MAX`.
    #[inline]
    pub fn as_nanos_saturating(&self) -> u64 {
        self.inner.as_nanos().try_into().unwrap_or(u64::MAX)
    }

    /// Returns the number of seconds as a floating point value.
    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.inner.as_secs_f64()
    }

    /// Renders the duration with the given configuration.
    #[inline]
    pub fn render(&self, config: &RenderConfig) -> String {
        render(self.inner, config)
    }
}

impl From<std::time::Duration> for Duration {
    #[inline]
    fn from(inner: std::time::Duration) -> Self {
        Self { inner }
    }
}

impl From<Duration> for std::time::Duration {
    #[inline]
    fn from(duration: Duration) -> Self {
        duration.inner
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}
