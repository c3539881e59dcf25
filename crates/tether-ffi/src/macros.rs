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

/// Macro for generating the exported `<Kind>_drop` release function of a handle kind.
macro_rules! generate_release {
    ($kind:ident, $payload:ty) => {
        paste::paste! {
            #[doc = concat!("Releases a `", stringify!($kind), "` handle and its backing storage.")]
            #[doc = ""]
            #[doc = "Passing `NULL` is a no-op. Handles derived from this one are not affected."]
            #[doc = ""]
            #[doc = "# Safety"]
            #[doc = ""]
            #[doc = "This function is unsafe because it dereferences a raw pointer."]
            #[doc = "The caller must ensure that the pointer is null or valid, was"]
            #[doc = "allocated by Tether, and has not been released before."]
            #[no_mangle]
            pub unsafe extern "C" fn [<$kind _drop>](ptr: *mut $payload) {
                crate::handle::release(ptr, stringify!([<$kind _drop>]));
            }
        }
    };
}
