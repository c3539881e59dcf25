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

//! Boundary wrappers around `Opaque<T>` that keep the ledger in sync.

use crate::ledger;
use tether_core::handle::{Opaque, OpaqueKind};

/// Moves `value` to the heap and returns it as an owned handle.
#[inline]
pub(crate) fn new_handle<T>(value: T) -> *mut T
where
    T: OpaqueKind,
{
    let ptr = Opaque::into_raw(value);
    ledger::track::<T>(ptr);
    ptr
}

/// Borrows the payload of a valid handle.
///
/// # Safety
///
/// See `Opaque::as_ref`.
#[inline]
pub(crate) unsafe fn borrow<'a, T>(ptr: *const T, operation: &str) -> &'a T
where
    T: OpaqueKind,
{
    ledger::check::<T>(ptr, operation);
    Opaque::as_ref(ptr, operation)
}

/// Mutably borrows the payload of a valid handle.
///
/// # Safety
///
/// See `Opaque::as_mut`.
#[inline]
pub(crate) unsafe fn borrow_mut<'a, T>(ptr: *mut T, operation: &str) -> &'a mut T
where
    T: OpaqueKind,
{
    ledger::check::<T>(ptr, operation);
    Opaque::as_mut(ptr, operation)
}

/// Releases a handle. Null pointers are ignored.
///
/// # Safety
///
/// See `Opaque::release`.
#[inline]
pub(crate) unsafe fn release<T>(ptr: *mut T, operation: &str)
where
    T: OpaqueKind,
{
    if ptr.is_null() {
        return;
    }
    ledger::retire::<T>(ptr, operation);
    Opaque::release(ptr);
}
