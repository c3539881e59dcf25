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

//! # Tether Objects
//!
//! Small value objects that illustrate the create → mutate/read → release pattern
//! over different payloads:
//!
//! * **`counter`**: `Counter<T>`, a mutable integer advanced by deltas.
//! * **`rstring`**: `RString`, an owned, NUL-free text buffer readable as a C string.
//! * **`person`**: `Person`, a composite of two `RString`s with a derived full name.
//! * **`error`**: `RStringError`, reported when text cannot be stored as a C string.
//!
//! Every object implements `OpaqueKind`, so it can be exposed as an opaque handle.
//! Derived objects (such as `Person::full_name`) are returned by value and are
//! owned independently of their source.

pub mod counter;
pub mod error;
pub mod person;
pub mod rstring;
