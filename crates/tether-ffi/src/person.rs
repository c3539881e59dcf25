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

//! # Foreign Function Interface (FFI) for Persons
//!
//! A `Person` copies the given and family name it is created from. Its full
//! name is derived on demand as a new `RString` handle, owned by the caller and
//! independent of the person.

#![allow(non_snake_case)]

use crate::handle::{borrow, new_handle};
use libc::c_char;
use std::ffi::CStr;
use tether_objects::{person::Person, rstring::RString};

/// Creates a new person from a given name and a family name.
///
/// Both strings are copied; the caller keeps ownership of its buffers.
///
/// # Panics
///
/// This function will panic if `given_name` or `family_name` is null.
///
/// # Safety
///
/// The caller must ensure that both pointers point to valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn Person_new(
    given_name: *const c_char,
    family_name: *const c_char,
) -> *mut Person {
    assert!(
        !given_name.is_null(),
        "called `Person_new` with `given_name` as null pointer"
    );
    assert!(
        !family_name.is_null(),
        "called `Person_new` with `family_name` as null pointer"
    );

    let given_name = RString::from_c_str(CStr::from_ptr(given_name));
    let family_name = RString::from_c_str(CStr::from_ptr(family_name));
    new_handle(Person::new(given_name, family_name))
}

/// Returns the full name (`"<given> <family>"`) as a new `RString` handle.
///
/// The returned handle must be freed with `RString_drop`. It stays valid after
/// the person is released.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `Person_new`.
#[no_mangle]
pub unsafe extern "C" fn Person_full_name(ptr: *const Person) -> *mut RString {
    let person = borrow(ptr, "Person_full_name");
    let full_name = person.full_name();
    tracing::debug!(len = full_name.len(), "derived full name from person");
    new_handle(full_name)
}

/// Returns a pointer to the given name. The pointer is valid until the person is freed.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `Person_new`.
#[no_mangle]
pub unsafe extern "C" fn Person_given_name(ptr: *const Person) -> *const c_char {
    borrow(ptr, "Person_given_name").given_name().as_ptr()
}

/// Returns a pointer to the family name. The pointer is valid until the person is freed.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `Person_new`.
#[no_mangle]
pub unsafe extern "C" fn Person_family_name(ptr: *const Person) -> *const c_char {
    borrow(ptr, "Person_family_name").family_name().as_ptr()
}

generate_release!(Person, Person);
