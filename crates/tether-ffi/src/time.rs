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

//! # Foreign Function Interface (FFI) for Instants and Durations
//!
//! ## Usage Lifecycle
//!
//! 1.  **Capture**: `now` returns an `Instant` handle.
//! 2.  **Measure**: `elapsed` derives a new `Duration` handle from an instant. The instant is
//!     not consumed and may be measured again.
//! 3.  **Output**: `print_duration` writes the rendered duration to standard output;
//!     `Duration_render` / `Duration_render_with` return it as an owned `RString` handle.
//! 4.  **Cleanup**: Free every handle with `Instant_drop`, `Duration_drop` and `RString_drop`,
//!     in any order. Releasing an instant does not release durations derived from it.
//!
//! ## Safety
//!
//! * **Pointer Validity**: Pointers must be allocated by this library and not yet released.
//! * **Null Pointers**: Passing `NULL` to any function other than a `_drop` function panics.

#![allow(non_snake_case)]

use crate::handle::{borrow, new_handle};
use std::io::Write;
use tether_objects::rstring::RString;
use tether_time::{
    duration::Duration,
    instant::Instant,
    render::{DurationUnit, RenderConfig},
};

/// FFI-compatible enum for the unit a duration is rendered in.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetherDurationUnit {
    Auto = 0,
    Seconds = 1,
    Millis = 2,
    Micros = 3,
    Nanos = 4,
}

impl From<TetherDurationUnit> for DurationUnit {
    #[inline]
    fn from(unit: TetherDurationUnit) -> Self {
        match unit {
            TetherDurationUnit::Auto => DurationUnit::Auto,
            TetherDurationUnit::Seconds => DurationUnit::Seconds,
            TetherDurationUnit::Millis => DurationUnit::Millis,
            TetherDurationUnit::Micros => DurationUnit::Micros,
            TetherDurationUnit::Nanos => DurationUnit::Nanos,
        }
    }
}

impl std::fmt::Display for TetherDurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DurationUnit::from(*self))
    }
}

#[inline]
fn rendered(text: String) -> *mut RString {
    // Kill the process if the rendering contains a NUL byte (should not happen)
    let string = RString::try_from(text).expect("rendered durations should not contain NUL bytes");
    new_handle(string)
}

/// Captures the current point in time.
#[no_mangle]
pub extern "C" fn now() -> *mut Instant {
    new_handle(Instant::now())
}

/// Returns a new `Duration` handle holding the time elapsed since `instant` was captured.
///
/// The instant is not consumed; the returned duration must be freed with `Duration_drop`.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `now`.
#[no_mangle]
pub unsafe extern "C" fn elapsed(instant: *const Instant) -> *mut Duration {
    let instant = borrow(instant, "elapsed");
    let duration = instant.elapsed();
    tracing::debug!(%duration, "derived duration from instant");
    new_handle(duration)
}

/// Writes the rendered duration, followed by a newline, to standard output.
///
/// Write failures (e.g. a closed stdout) are logged and otherwise ignored.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Tether.
#[no_mangle]
pub unsafe extern "C" fn print_duration(duration: *const Duration) {
    let duration = borrow(duration, "print_duration");
    if let Err(err) = write_duration(&mut std::io::stdout().lock(), duration) {
        tracing::warn!(%err, "failed to print duration");
    }
}

#[inline]
fn write_duration<W: Write>(out: &mut W, duration: &Duration) -> std::io::Result<()> {
    writeln!(out, "{}", duration)?;
    out.flush()
}

/// Returns the duration in whole nanoseconds, saturating at `UINT64_MAX`.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Tether.
#[no_mangle]
pub unsafe extern "C" fn Duration_as_nanos(duration: *const Duration) -> u64 {
    borrow(duration, "Duration_as_nanos").as_nanos_saturating()
}

/// Returns the duration in seconds as a floating point value.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Tether.
#[no_mangle]
pub unsafe extern "C" fn Duration_as_secs_f64(duration: *const Duration) -> f64 {
    borrow(duration, "Duration_as_secs_f64").as_secs_f64()
}

/// Renders the duration with the default policy (automatic unit, two decimals)
/// into a new `RString` handle, which must be freed with `RString_drop`.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Tether.
#[no_mangle]
pub unsafe extern "C" fn Duration_render(duration: *const Duration) -> *mut RString {
    let duration = borrow(duration, "Duration_render");
    rendered(duration.render(&RenderConfig::default()))
}

/// Renders the duration in `unit` with `precision` decimals (at most 9)
/// into a new `RString` handle, which must be freed with `RString_drop`.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by Tether, and that `unit` is a valid `TetherDurationUnit`.
#[no_mangle]
pub unsafe extern "C" fn Duration_render_with(
    duration: *const Duration,
    unit: TetherDurationUnit,
    precision: usize,
) -> *mut RString {
    let duration = borrow(duration, "Duration_render_with");
    let config = RenderConfig::new(unit.into(), precision);
    rendered(duration.render(&config))
}

generate_release!(Instant, Instant);
generate_release!(Duration, Duration);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rstring::{RString_as_ptr, RString_drop};
    use std::ffi::CStr;

    unsafe fn duration_handle(d: std::time::Duration) -> *mut Duration {
        new_handle(Duration::from(d))
    }

    unsafe fn take_string(ptr: *mut RString) -> String {
        let text = CStr::from_ptr(RString_as_ptr(ptr))
            .to_str()
            .unwrap()
            .to_owned();
        RString_drop(ptr);
        text
    }

    #[test]
    fn test_now_and_elapsed() {
        unsafe {
            let instant = now();
            assert!(!instant.is_null());

            let duration = elapsed(instant);
            assert!(!duration.is_null());
            assert!(Duration_as_secs_f64(duration) >= 0.0);
            assert!(Duration_as_secs_f64(duration) < 1.0);

            Duration_drop(duration);
            Instant_drop(instant);
        }
    }

    #[test]
    fn test_elapsed_can_be_measured_repeatedly() {
        unsafe {
            let instant = now();
            let first = elapsed(instant);
            let second = elapsed(instant);
            assert!(Duration_as_nanos(second) >= Duration_as_nanos(first));

            // Releasing the source leaves derived durations usable.
            Instant_drop(instant);
            assert!(Duration_as_nanos(first) <= Duration_as_nanos(second));

            Duration_drop(second);
            Duration_drop(first);
        }
    }

    #[test]
    fn test_render_default() {
        unsafe {
            let duration = duration_handle(std::time::Duration::from_micros(1_500));
            assert_eq!(take_string(Duration_render(duration)), "1.50ms");
            Duration_drop(duration);
        }
    }

    #[test]
    fn test_render_with_unit_and_precision() {
        unsafe {
            let duration = duration_handle(std::time::Duration::from_millis(2_500));
            assert_eq!(
                take_string(Duration_render_with(duration, TetherDurationUnit::Millis, 0)),
                "2500ms"
            );
            assert_eq!(
                take_string(Duration_render_with(duration, TetherDurationUnit::Seconds, 1)),
                "2.5s"
            );
            assert_eq!(
                take_string(Duration_render_with(duration, TetherDurationUnit::Auto, 3)),
                "2.500s"
            );
            Duration_drop(duration);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        unsafe {
            let duration = duration_handle(std::time::Duration::from_nanos(123_456_789));
            let a = take_string(Duration_render(duration));
            let b = take_string(Duration_render(duration));
            assert_eq!(a, b);
            Duration_drop(duration);
        }
    }

    #[test]
    fn test_print_duration_does_not_release() {
        unsafe {
            let duration = duration_handle(std::time::Duration::from_secs(1));
            print_duration(duration);
            assert_eq!(Duration_as_nanos(duration), 1_000_000_000);
            Duration_drop(duration);
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_write_duration() {
        let mut out = Vec::new();
        write_duration(&mut out, &Duration::from(std::time::Duration::from_micros(1_500)))
            .unwrap();
        assert_eq!(out, b"1.50ms\n");
    }

    #[test]
    fn test_write_duration_reports_closed_output() {
        let duration = Duration::from(std::time::Duration::from_secs(1));
        let err = write_duration(&mut ClosedPipe, &duration).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_drop_null_is_noop() {
        unsafe {
            Instant_drop(std::ptr::null_mut());
            Duration_drop(std::ptr::null_mut());
        }
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(TetherDurationUnit::Micros.to_string(), "Micros");
    }
}
