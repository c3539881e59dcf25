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

//! # Tether Core
//!
//! Ownership primitives for resources that cross a foreign function boundary.
//! Every resource kind exposed by the Tether ecosystem follows the same
//! create → use → release protocol; this crate captures that protocol once,
//! parameterized by payload type, instead of repeating it per kind.
//!
//! ## Modules
//!
//! - `handle`: The `OpaqueKind` tag trait and the `Opaque<T>` helper that boxes a
//!   payload into a raw pointer, borrows it back with fail-fast null checks, and
//!   releases it exactly once.
//! - `key`: Generation-tagged, phantom-typed keys (`HandleKey<T>`) that name a
//!   slot in a `Registry<T>` without exposing the payload.
//! - `registry`: An index/generation table implementing the same protocol with
//!   runtime validation. Stale keys are reported as `RegistryError` values
//!   rather than undefined behavior.
//! - `state`: The `Uninitialized → Valid → Released` state machine shared by all
//!   handle kinds.
//! - `error`: Error types reported by the registry.
//!
//! ## Two Flavours of Handles
//!
//! Raw pointers produced by `Opaque<T>` are zero-cost and are what the C ABI hands
//! out. Misuse of a pointer (double release, use after release) is a contract
//! violation that cannot be detected without bookkeeping. `Registry<T>` is that
//! bookkeeping: it trades a table lookup for the ability to detect and report
//! every misuse of a key.

pub mod error;
pub mod handle;
pub mod key;
pub mod registry;
pub mod state;
