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

//! # Tether FFI
//!
//! **C-Compatible Bindings for the Tether Handle Lifecycle Core.**
//!
//! This crate exposes the Tether resources (instants, durations, counters, strings and
//! persons) to C and any other environment that can call a C ABI. Every resource is
//! an **Opaque Pointer** (Handle) with an explicit lifecycle.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: The host never sees struct layouts; it calls accessor functions.
//! 2.  **Explicit Lifecycle**: Every constructor (`_new`, `now`, `elapsed`, `Person_full_name`,
//!     `Duration_render`) returns an owned handle that must be passed to exactly one matching
//!     `_drop` call. Derived handles are owned independently of their source.
//! 3.  **Fail-Fast Safety**: Passing `NULL` to an accessor aborts the process with a message
//!     naming the function. Passing `NULL` to a `_drop` function is a no-op.
//! 4.  **Checked Builds**: With the `checked` feature, a process-wide ledger additionally
//!     detects double release, use after release, and handle kind confusion.
//!
//! ## Exported API
//!
//! ### Time
//! * `now`, `elapsed`, `print_duration`
//! * `Instant_drop`, `Duration_drop`
//! * `Duration_as_nanos`, `Duration_as_secs_f64`, `Duration_render`, `Duration_render_with`
//!
//! ### Arithmetic
//! * `add`
//!
//! ### Counter
//! * `Counter_new`, `Counter_count`, `Counter_get_count`, `Counter_drop`
//!
//! ### String
//! * `RString_new`, `RString_as_ptr`, `RString_len`, `RString_drop`
//!
//! ### Person
//! * `Person_new`, `Person_full_name`, `Person_given_name`, `Person_family_name`, `Person_drop`
//!
//! ### Logging
//! * `tether_log_init`

#[macro_use]
mod macros;

mod handle;
mod ledger;

pub mod arith;
pub mod counter;
pub mod log;
pub mod person;
pub mod rstring;
pub mod time;
