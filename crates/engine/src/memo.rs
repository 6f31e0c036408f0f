// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-slot memoization
//!
//! A [`Memo`] remembers the last input and its result. Inputs are compared
//! with `PartialEq`; wrap shared inputs in [`ByAddress`] to compare them by
//! pointer instead of by value.

use std::sync::Arc;

/// Compares an `Arc` by pointer
#[derive(Debug)]
pub struct ByAddress<T>(pub Arc<T>);

impl<T> ByAddress<T> {
    pub fn of(value: &Arc<T>) -> Self {
        ByAddress(Arc::clone(value))
    }
}

impl<T> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for ByAddress<T> {}

/// Last input and its computed value
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, Arc<V>)>,
    computed: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            computed: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached value when `key` matches the last input, else `compute(&key)`
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> Arc<V> {
        if let Some((last, value)) = &self.slot {
            if *last == key {
                return Arc::clone(value);
            }
        }
        let value = Arc::new(compute(&key));
        self.computed += 1;
        self.slot = Some((key, Arc::clone(&value)));
        value
    }

    /// How many times a value has been computed
    pub fn computed(&self) -> u64 {
        self.computed
    }
}

/// Hands back the previous `Arc` while the value stays equal
#[derive(Debug)]
pub struct Interned<V> {
    last: Option<Arc<V>>,
    changes: u64,
}

impl<V> Default for Interned<V> {
    fn default() -> Self {
        Self {
            last: None,
            changes: 0,
        }
    }
}

impl<V: PartialEq> Interned<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, value: V) -> Arc<V> {
        if let Some(last) = &self.last {
            if **last == value {
                return Arc::clone(last);
            }
        }
        let shared = Arc::new(value);
        self.changes += 1;
        self.last = Some(Arc::clone(&shared));
        shared
    }

    /// How many distinct values have been seen in a row
    pub fn changes(&self) -> u64 {
        self.changes
    }
}

#[cfg(test)]
#[path = "memo_tests.rs"]
mod tests;
