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

//! # Foreign Function Interface (FFI) for Owned Strings
//!
//! An `RString` owns a copy of the text it was created from. `RString_as_ptr`
//! borrows the NUL-terminated contents; the pointer stays valid until the handle
//! is released with `RString_drop`.
//!
//! `RString` handles are also returned by `Person_full_name` and `Duration_render`;
//! those must be released with `RString_drop` as well.

#![allow(non_snake_case)]

use crate::handle::{borrow, new_handle};
use libc::c_char;
use std::ffi::CStr;
use tether_objects::rstring::RString;

/// Copies a NUL-terminated string into a new `RString` handle.
///
/// # Panics
///
/// This function will panic if `text` is null.
///
/// # Safety
///
/// The caller must ensure that `text` points to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn RString_new(text: *const c_char) -> *mut RString {
    assert!(
        !text.is_null(),
        "called `RString_new` with `text` as null pointer"
    );
    new_handle(RString::from_c_str(CStr::from_ptr(text)))
}

/// Returns a pointer to the NUL-terminated contents of the string.
/// The pointer is valid until the string is freed.
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
pub unsafe extern "C" fn RString_as_ptr(ptr: *const RString) -> *const c_char {
    borrow(ptr, "RString_as_ptr").as_ptr()
}

/// Returns the length of the string in bytes, excluding the terminator.
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
pub unsafe extern "C" fn RString_len(ptr: *const RString) -> usize {
    borrow(ptr, "RString_len").len()
}

generate_release!(RString, RString);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ffi::CString;

    unsafe fn contents(ptr: *const RString) -> Vec<u8> {
        CStr::from_ptr(RString_as_ptr(ptr)).to_bytes().to_vec()
    }

    #[test]
    fn test_round_trip() {
        unsafe {
            let string = RString_new(c"Hello!".as_ptr());
            assert_eq!(contents(string), b"Hello!");
            assert_eq!(RString_len(string), 6);
            RString_drop(string);
        }
    }

    #[test]
    fn test_empty_string() {
        unsafe {
            let string = RString_new(c"".as_ptr());
            assert_eq!(contents(string), b"");
            assert_eq!(RString_len(string), 0);
            RString_drop(string);
        }
    }

    #[test]
    fn test_input_is_copied() {
        unsafe {
            let mut source = CString::new("mutable").unwrap().into_bytes_with_nul();
            let string = RString_new(source.as_ptr().cast());
            source[0] = b'M';
            assert_eq!(contents(string), b"mutable");
            RString_drop(string);
        }
    }

    #[test]
    fn test_drop_null_is_noop() {
        unsafe { RString_drop(std::ptr::null_mut()) };
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_byte_exact(bytes in proptest::collection::vec(1u8..=255, 0..128)) {
            unsafe {
                let source = CString::new(bytes.clone()).unwrap();
                let string = RString_new(source.as_ptr());
                let out = contents(string);
                prop_assert_eq!(RString_len(string), bytes.len());
                RString_drop(string);
                prop_assert_eq!(out, bytes);
            }
        }
    }
}
