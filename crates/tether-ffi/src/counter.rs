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

//! # Foreign Function Interface (FFI) for Counters
//!
//! A `Counter` is a mutable 64-bit integer. Deltas saturate at the bounds of
//! `int64_t`.
//!
//! ## Exported API
//!
//! * `Counter_new`
//! * `Counter_count`
//! * `Counter_get_count`
//! * `Counter_drop`

#![allow(non_snake_case)]

use crate::handle::{borrow, borrow_mut, new_handle};
use tether_objects::counter::Counter;

/// The counter payload exposed across the boundary.
pub type FfiCounter = Counter<i64>;

/// Creates a new counter starting at `initial`.
#[no_mangle]
pub extern "C" fn Counter_new(initial: i64) -> *mut FfiCounter {
    new_handle(Counter::new(initial))
}

/// Adds `delta` to the counter.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `Counter_new`.
#[no_mangle]
pub unsafe extern "C" fn Counter_count(ptr: *mut FfiCounter, delta: i64) {
    borrow_mut(ptr, "Counter_count").count(delta);
}

/// Returns the current count.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `Counter_new`.
#[no_mangle]
pub unsafe extern "C" fn Counter_get_count(ptr: *const FfiCounter) -> i64 {
    borrow(ptr, "Counter_get_count").get()
}

generate_release!(Counter, FfiCounter);
