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

//! # Diagnostics
//!
//! Handle creation and release are reported through `tracing`. Nothing is
//! printed until the host installs a subscriber, either its own (when Tether is
//! linked as a Rust library) or the stderr subscriber installed by
//! `tether_log_init`.

use libc::c_char;
use std::ffi::CStr;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter, e.g. `TETHER_LOG=tether=trace`.
pub const LOG_ENV: &str = "TETHER_LOG";

/// Filter used when neither the environment nor the caller provide a usable one.
pub const DEFAULT_FILTER: &str = "warn";

fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global subscriber that writes to standard error.
///
/// The filter is read from `TETHER_LOG`. If it is unset or invalid, `filter` is used,
/// and if that is `NULL` or invalid, `"warn"`.
///
/// Returns `false` if a global subscriber was already installed.
///
/// # Safety
///
/// The caller must ensure that `filter` is null or points to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn tether_log_init(filter: *const c_char) -> bool {
    let fallback = if filter.is_null() {
        None
    } else {
        CStr::from_ptr(filter).to_str().ok()
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
