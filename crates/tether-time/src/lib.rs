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

//! # Tether Time
//!
//! **Captured instants, derived durations, and their textual rendering.**
//!
//! Measuring elapsed time is split into two steps:
//!
//! 1.  **Capture**: `Instant::now` records the current point in time.
//! 2.  **Measure**: `Instant::elapsed` derives a new, independently owned
//!     `Duration` from the time between the capture and the call.
//!
//! Keeping the steps separate allows any number of measurements from one captured
//! instant, and keeps `Duration` independent of the clock used for capture.
//!
//! ## Modules
//!
//! * **`instant`**: The `Instant` payload (monotonic clock plus wall-clock timestamp).
//! * **`duration`**: The immutable `Duration` payload.
//! * **`render`**: Deterministic formatting of durations, configured by `RenderConfig`.

pub mod duration;
pub mod instant;
pub mod render;
