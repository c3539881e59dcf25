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

use crate::state::HandleState;

/// The error type for operations on a `Registry`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The key refers to a resource that has already been released.
    #[error("{kind} handle ({index}#{generation}) used after release")]
    Released {
        kind: &'static str,
        index: usize,
        generation: u32,
    },
    /// The key was never issued by this registry.
    #[error("{kind} handle ({index}#{generation}) was never issued by this registry")]
    Unknown {
        kind: &'static str,
        index: usize,
        generation: u32,
    },
}

impl RegistryError {
    /// Returns the handle state that caused the error.
    #[inline]
    pub fn state(&self) -> HandleState {
        match self {
            Self::Released { .. } => HandleState::Released,
            Self::Unknown { .. } => HandleState::Uninitialized,
        }
    }

    /// Returns the name of the handle kind involved.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Released { kind, .. } | Self::Unknown { kind, .. } => kind,
        }
    }
}
