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

//! # Owned Opaque Handles
//!
//! A resource handed across the boundary is a heap allocation whose address is
//! the handle. `Opaque<T>` centralizes the four lifecycle operations on such an
//! address so that every exported resource kind shares one implementation:
//!
//! - `into_raw`: moves a payload to the heap and transfers ownership to the caller.
//! - `as_ref` / `as_mut`: borrows the payload of a valid handle.
//! - `release`: reclaims the allocation and drops the payload.
//!
//! Null handles passed to the borrowing operations abort with a message naming
//! the offending operation. Releasing a null handle is a no-op, mirroring `free(NULL)`.

use std::marker::PhantomData;

/// A trait to tag payload types that may be exposed as opaque handles.
///
/// The name is used for logging and for contract-violation messages.
///
/// # Examples
///
/// ```rust
/// # use tether_core::handle::OpaqueKind;
///
/// struct Widget;
///
/// impl OpaqueKind for Widget {
///     const NAME: &'static str = "Widget";
/// }
///
/// assert_eq!(Widget::NAME, "Widget");
/// ```
pub trait OpaqueKind {
    const NAME: &'static str;
}

/// Lifecycle operations for heap-allocated opaque handles of payload type `T`.
///
/// This type is never instantiated; it only groups the operations.
///
/// # Examples
///
/// ```rust
/// # use tether_core::handle::{Opaque, OpaqueKind};
///
/// struct Widget(u32);
///
/// impl OpaqueKind for Widget {
///     const NAME: &'static str = "Widget";
/// }
///
/// let ptr = Opaque::into_raw(Widget(7));
/// unsafe {
///     assert_eq!(Opaque::as_ref(ptr, "widget_get").0, 7);
///     Opaque::as_mut(ptr, "widget_set").0 = 8;
///     assert_eq!(Opaque::as_ref(ptr, "widget_get").0, 8);
///     Opaque::release(ptr);
/// }
/// ```
pub struct Opaque<T>(PhantomData<fn() -> T>);

impl<T> Opaque<T>
where
    T: OpaqueKind,
{
    /// Moves `value` to the heap and returns the owning raw pointer.
    ///
    /// The returned pointer is never null. Allocation failure aborts the process.
    #[inline]
    pub fn into_raw(value: T) -> *mut T {
        let ptr = Box::into_raw(Box::new(value));
        tracing::trace!(kind = T::NAME, addr = ptr as usize, "created handle");
        ptr
    }

    /// Borrows the payload behind `ptr`.
    ///
    /// # Panics
    ///
    /// This function will panic if `ptr` is null.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `ptr` was returned by `Opaque::<T>::into_raw`,
    /// has not been released, and is not mutably borrowed for the lifetime `'a`.
    #[inline]
    pub unsafe fn as_ref<'a>(ptr: *const T, operation: &str) -> &'a T {
        assert!(
            !ptr.is_null(),
            "called `{}` with null pointer",
            operation
        );
        &*ptr
    }

    /// Mutably borrows the payload behind `ptr`.
    ///
    /// # Panics
    ///
    /// This function will panic if `ptr` is null.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `ptr` was returned by `Opaque::<T>::into_raw`,
    /// has not been released, and is not otherwise borrowed for the lifetime `'a`.
    #[inline]
    pub unsafe fn as_mut<'a>(ptr: *mut T, operation: &str) -> &'a mut T {
        assert!(
            !ptr.is_null(),
            "called `{}` with null pointer",
            operation
        );
        &mut *ptr
    }

    /// Releases the handle and drops its payload. Null pointers are ignored.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `ptr` is null or was returned by
    /// `Opaque::<T>::into_raw` and has not been released before.
    #[inline]
    pub unsafe fn release(ptr: *mut T) {
        if ptr.is_null() {
            return;
        }
        tracing::trace!(kind = T::NAME, addr = ptr as usize, "released handle");
        drop(Box::from_raw(ptr));
    }

    /// Releases the handle and returns its payload by value.
    ///
    /// # Panics
    ///
    /// This function will panic if `ptr` is null.
    ///
    /// # Safety
    ///
    /// Same requirements as `Opaque::release`.
    #[inline]
    pub unsafe fn into_inner(ptr: *mut T, operation: &str) -> T {
        assert!(
            !ptr.is_null(),
            "called `{}` with null pointer",
            operation
        );
        tracing::trace!(kind = T::NAME, addr = ptr as usize, "consumed handle");
        *Box::from_raw(ptr)
    }
}
