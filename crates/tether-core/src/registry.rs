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

//! # Handle Registry
//!
//! An index/generation table implementing the create → read/mutate → release
//! protocol with full runtime validation.
//!
//! ## Overview
//!
//! Payloads live in a dense vector of slots. Each slot carries a generation
//! counter. Creating a resource fills a vacant slot (recycling released slots
//! first) and returns a `HandleKey<T>` stamped with the slot's generation.
//! Releasing a resource empties the slot and bumps its generation, which
//! invalidates every key issued for the previous occupant.
//!
//! ## State Resolution
//!
//! For a key `(index, generation)` the registry reports:
//!
//! * `Valid` if the slot is occupied with the same generation.
//! * `Released` if the key's generation is older than the slot's.
//!   A slot that has issued every generation is retired and reports `Released`
//!   for all of its keys.
//! * `Uninitialized` if the slot does not exist or the generation was never issued.
//!
//! ## Complexity
//!
//! `create`, `read`, `mutate`, `release` and `state` are all O(1).

use crate::{
    error::RegistryError,
    handle::OpaqueKind,
    key::HandleKey,
    state::HandleState,
};

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    // `generation` is the one the next occupant will receive.
    Vacant { generation: u32, next_free: Option<usize> },
    // Every generation has been issued; the slot is never reused.
    Retired,
}

impl<T> Slot<T> {
    #[inline]
    fn generation(&self) -> u32 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
            Slot::Retired => u32::MAX,
        }
    }
}

/// A table of live resources addressed by generation-tagged keys.
///
/// # Examples
///
/// ```rust
/// # use tether_core::handle::OpaqueKind;
/// # use tether_core::registry::Registry;
/// # use tether_core::state::HandleState;
///
/// struct Counter(i64);
/// impl OpaqueKind for Counter { const NAME: &'static str = "Counter"; }
///
/// let mut registry = Registry::new();
/// let key = registry.create(Counter(2));
/// registry.mutate(key, |c| c.0 += 1).unwrap();
/// assert_eq!(registry.read(key).unwrap().0, 3);
///
/// let released = registry.release(key).unwrap();
/// assert_eq!(released.0, 3);
/// assert_eq!(registry.state(key), HandleState::Released);
/// assert!(registry.read(key).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Registry<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }
}

impl<T> Registry<T>
where
    T: OpaqueKind,
{
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` resources.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of live resources.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no resource is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value` and returns a fresh key for it.
    pub fn create(&mut self, value: T) -> HandleKey<T> {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let generation = match self.slots[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free_head = next_free;
                        generation
                    }
                    Slot::Occupied { .. } | Slot::Retired => {
                        unreachable!("free list of `Registry` points at a slot that is not vacant")
                    }
                };
                self.slots[index] = Slot::Occupied { generation, value };
                HandleKey::new(index, generation)
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    value,
                });
                HandleKey::new(index, 0)
            }
        }
    }

    /// Returns the lifecycle state of `key`.
    pub fn state(&self, key: HandleKey<T>) -> HandleState {
        let Some(slot) = self.slots.get(key.index()) else {
            return HandleState::Uninitialized;
        };
        match slot {
            Slot::Occupied { generation, .. } if *generation == key.generation() => {
                HandleState::Valid
            }
            Slot::Retired => HandleState::Released,
            _ if key.generation() < slot.generation() => HandleState::Released,
            _ => HandleState::Uninitialized,
        }
    }

    /// Returns a shared reference to the payload of `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` has been released or was never issued.
    pub fn read(&self, key: HandleKey<T>) -> Result<&T, RegistryError> {
        match self.slots.get(key.index()) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation() => {
                Ok(value)
            }
            _ => Err(self.invalid(key)),
        }
    }

    /// Applies `operation` to the payload of `key` in place and returns its result.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` has been released or was never issued.
    pub fn mutate<F, R>(&mut self, key: HandleKey<T>, operation: F) -> Result<R, RegistryError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let error = self.invalid(key);
        match self.slots.get_mut(key.index()) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation() => {
                Ok(operation(value))
            }
            _ => Err(error),
        }
    }

    /// Removes the resource named by `key` and returns its payload.
    ///
    /// The slot is recycled under a new generation, so `key` and every copy of it
    /// stay invalid forever. A slot whose generation space is exhausted is retired
    /// instead of recycled.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` has already been released or was never issued.
    pub fn release(&mut self, key: HandleKey<T>) -> Result<T, RegistryError> {
        if !self.state(key).is_valid() {
            return Err(self.invalid(key));
        }

        let index = key.index();
        let next_generation = key.generation().checked_add(1);
        let successor = match next_generation {
            Some(generation) => Slot::Vacant {
                generation,
                next_free: self.free_head,
            },
            None => Slot::Retired,
        };

        match std::mem::replace(&mut self.slots[index], successor) {
            Slot::Occupied { value, .. } => {
                if next_generation.is_some() {
                    self.free_head = Some(index);
                } else {
                    tracing::debug!(kind = T::NAME, index, "retired exhausted registry slot");
                }
                self.len -= 1;
                Ok(value)
            }
            Slot::Vacant { .. } | Slot::Retired => {
                unreachable!("`Registry::release` validated an occupied slot")
            }
        }
    }

    /// Iterates over the keys and payloads of all live resources, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (HandleKey<T>, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied { generation, value } => {
                    Some((HandleKey::new(index, *generation), value))
                }
                Slot::Vacant { .. } | Slot::Retired => None,
            })
    }

    #[inline]
    fn invalid(&self, key: HandleKey<T>) -> RegistryError {
        match self.state(key) {
            HandleState::Released => RegistryError::Released {
                kind: T::NAME,
                index: key.index(),
                generation: key.generation(),
            },
            _ => RegistryError::Unknown {
                kind: T::NAME,
                index: key.index(),
                generation: key.generation(),
            },
        }
    }
}

impl<T> std::fmt::Display for Registry<T>
where
    T: OpaqueKind,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Registry<{}>(live: {}, slots: {})",
            T::NAME,
            self.len,
            self.slots.len()
        )
    }
}
