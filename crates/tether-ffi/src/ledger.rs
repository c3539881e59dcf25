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

//! # Handle Ledger
//!
//! Bookkeeping for the `checked` build. Every handle created at the boundary is
//! recorded in a process-wide `Registry`, indexed by its address. Accessors
//! verify that the address is live and of the expected kind, and release
//! functions retire the entry, so double release, use after release and kind
//! confusion abort with a `contract violation` message instead of corrupting
//! memory.
//!
//! Without the `checked` feature every entry point compiles to nothing.

#[cfg(feature = "checked")]
pub(crate) use checked::{check, retire, track};

#[cfg(not(feature = "checked"))]
pub(crate) use unchecked::{check, retire, track};

#[cfg(not(feature = "checked"))]
mod unchecked {
    use tether_core::handle::OpaqueKind;

    #[inline(always)]
    pub(crate) fn track<T: OpaqueKind>(_ptr: *const T) {}

    #[inline(always)]
    pub(crate) fn check<T: OpaqueKind>(_ptr: *const T, _operation: &str) {}

    #[inline(always)]
    pub(crate) fn retire<T: OpaqueKind>(_ptr: *const T, _operation: &str) {}
}

#[cfg(feature = "checked")]
mod checked {
    use rustc_hash::FxHashMap;
    use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
    use tether_core::{handle::OpaqueKind, key::HandleKey, registry::Registry};

    #[derive(Debug, Clone, Copy)]
    struct Tracked {
        kind: &'static str,
        addr: usize,
    }

    impl OpaqueKind for Tracked {
        const NAME: &'static str = "TrackedHandle";
    }

    /// Live handles, addressable both by registry key and by address.
    #[derive(Debug, Default)]
    pub(super) struct Ledger {
        handles: Registry<Tracked>,
        live: FxHashMap<usize, HandleKey<Tracked>>,
    }

    impl Ledger {
        pub(super) fn track(&mut self, kind: &'static str, addr: usize) {
            let key = self.handles.create(Tracked { kind, addr });
            if let Some(previous) = self.live.insert(addr, key) {
                // The allocator handed out an address we still consider live, so the
                // previous handle was freed without going through its release function.
                if let Ok(stale) = self.handles.release(previous) {
                    tracing::warn!(
                        kind = stale.kind,
                        addr = stale.addr,
                        "handle was freed outside of its release function"
                    );
                }
            }
        }

        pub(super) fn check(&self, kind: &'static str, addr: usize, operation: &str) {
            let tracked = self
                .live
                .get(&addr)
                .and_then(|key| self.handles.read(*key).ok());

            match tracked {
                Some(t) if t.kind == kind => {}
                Some(t) => panic!(
                    "contract violation: called `{}` with a {} handle where a {} handle was expected",
                    operation, t.kind, kind
                ),
                None => panic!(
                    "contract violation: called `{}` with a released or unknown {} handle ({:#x})",
                    operation, kind, addr
                ),
            }
        }

        pub(super) fn retire(&mut self, kind: &'static str, addr: usize, operation: &str) {
            self.check(kind, addr, operation);
            let key = self.live.remove(&addr).unwrap_or_else(|| {
                unreachable!("`Ledger::check` accepted an address that is not live")
            });
            if let Err(err) = self.handles.release(key) {
                panic!("contract violation: called `{}`: {}", operation, err);
            }
        }

        #[cfg(test)]
        pub(super) fn len(&self) -> usize {
            self.handles.len()
        }
    }

    static LEDGER: LazyLock<Mutex<Ledger>> = LazyLock::new(|| Mutex::new(Ledger::default()));

    #[inline]
    fn ledger() -> MutexGuard<'static, Ledger> {
        // A contract-violation panic poisons the lock; the ledger itself stays consistent.
        LEDGER.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn track<T: OpaqueKind>(ptr: *const T) {
        ledger().track(T::NAME, ptr as usize);
    }

    pub(crate) fn check<T: OpaqueKind>(ptr: *const T, operation: &str) {
        if ptr.is_null() {
            return;
        }
        ledger().check(T::NAME, ptr as usize, operation);
    }

    pub(crate) fn retire<T: OpaqueKind>(ptr: *const T, operation: &str) {
        if ptr.is_null() {
            return;
        }
        ledger().retire(T::NAME, ptr as usize, operation);
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::handle::{borrow, new_handle, release};
        use tether_objects::counter::Counter;
        use tether_objects::rstring::RString;

        #[test]
        fn test_track_check_retire() {
            let mut ledger = Ledger::default();
            ledger.track("Counter", 0x1000);
            ledger.check("Counter", 0x1000, "Counter_get_count");
            assert_eq!(ledger.len(), 1);
            ledger.retire("Counter", 0x1000, "Counter_drop");
            assert_eq!(ledger.len(), 0);
        }

        #[test]
        #[should_panic(expected = "contract violation: called `Counter_drop` with a released or unknown Counter handle")]
        fn test_double_release_panics() {
            let mut ledger = Ledger::default();
            ledger.track("Counter", 0x2000);
            ledger.retire("Counter", 0x2000, "Counter_drop");
            ledger.retire("Counter", 0x2000, "Counter_drop");
        }

        #[test]
        #[should_panic(expected = "contract violation: called `Counter_get_count` with a released or unknown Counter handle")]
        fn test_use_after_release_panics() {
            let mut ledger = Ledger::default();
            ledger.track("Counter", 0x3000);
            ledger.retire("Counter", 0x3000, "Counter_drop");
            ledger.check("Counter", 0x3000, "Counter_get_count");
        }

        #[test]
        #[should_panic(expected = "contract violation: called `RString_as_ptr` with a Person handle where a RString handle was expected")]
        fn test_kind_confusion_panics() {
            let mut ledger = Ledger::default();
            ledger.track("Person", 0x4000);
            ledger.check("RString", 0x4000, "RString_as_ptr");
        }

        #[test]
        #[should_panic(expected = "contract violation: called `Counter_get_count` with a released or unknown Counter handle")]
        fn test_never_created_panics() {
            let ledger = Ledger::default();
            ledger.check("Counter", 0x5000, "Counter_get_count");
        }

        #[test]
        fn test_reused_address_replaces_stale_entry() {
            let mut ledger = Ledger::default();
            ledger.track("Counter", 0x6000);
            ledger.track("RString", 0x6000);
            assert_eq!(ledger.len(), 1);
            ledger.check("RString", 0x6000, "RString_as_ptr");
        }

        #[test]
        fn test_global_ledger_round_trip() {
            unsafe {
                let counter = new_handle(Counter::new(2_i64));
                assert_eq!(borrow(counter, "Counter_get_count").get(), 2);
                release(counter, "Counter_drop");

                let string = new_handle(RString::new("ledger").unwrap());
                assert_eq!(borrow(string, "RString_as_ptr").len(), 6);
                release(string, "RString_drop");
            }
        }

        #[test]
        #[should_panic(expected = "contract violation: called `Counter_get_count` with a RString handle where a Counter handle was expected")]
        fn test_global_ledger_detects_kind_confusion() {
            unsafe {
                let string = new_handle(RString::new("not a counter").unwrap());
                // Deliberately misuse the handle; the ledger aborts before it is read.
                let _ = borrow(string.cast::<Counter<i64>>(), "Counter_get_count");
            }
        }
    }
}
