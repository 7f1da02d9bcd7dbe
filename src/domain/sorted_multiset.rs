//! Sorted multiset of shared, immutable items.
//!
//! Items are kept in non-decreasing name order. Duplicate names are allowed.
//! The container owns its backing vector exclusively; the items themselves are
//! held as `Arc` handles and never cloned, so copying a container is O(n) in
//! handle clones and the copy shares no mutable storage with the original.
//!
//! Matching policy differs between operations and callers rely on it:
//! - [`SortedMultiset::remove`] matches by **name only**
//! - [`SortedMultiset::contains`] and [`SortedMultiset::contains_all`] match by **full equality**

use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use tracing::{instrument, trace};

use crate::domain::entities::Listable;
use crate::domain::error::{DomainError, DomainResult};

/// Sorted, duplicate-permitting collection of item handles.
///
/// Not synchronized: share across threads only behind an external lock.
#[derive(Debug)]
pub struct SortedMultiset<T> {
    items: Vec<Arc<T>>,
}

impl<T> Default for SortedMultiset<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

// Manual impl: only the handles are cloned, `T` need not be `Clone`.
impl<T> Clone for SortedMultiset<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> SortedMultiset<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Handle at sorted position `index`.
    ///
    /// Positions shift after every `add`/`remove`; do not keep indices across mutations.
    pub fn get(&self, index: usize) -> DomainResult<&Arc<T>> {
        self.items.get(index).ok_or(DomainError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Iterates handles in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<T>> {
        self.items.iter()
    }
}

impl<T: Listable> SortedMultiset<T> {
    /// Inserts `item` after every element whose name is `<=` its own.
    ///
    /// An item whose name ties with existing entries lands behind them;
    /// one whose name is greater than all others is appended.
    #[instrument(level = "trace", skip_all, fields(name = item.name()))]
    pub fn add(&mut self, item: Arc<T>) {
        let pos = self.items.partition_point(|e| e.name() <= item.name());
        trace!(pos, len = self.items.len(), "insert");
        self.items.insert(pos, item);
    }

    /// Adds every element of `other` in its iteration order. `other` is left untouched.
    pub fn add_all(&mut self, other: &SortedMultiset<T>) {
        self.items.reserve(other.len());
        for item in other.iter() {
            self.add(Arc::clone(item));
        }
    }

    /// Removes the first element, in sorted order, whose **name** equals `item`'s name.
    ///
    /// Prices are ignored. Returns the removed handle, or `None` when no name matched.
    #[instrument(level = "trace", skip_all, fields(name = item.name()))]
    pub fn remove(&mut self, item: &T) -> Option<Arc<T>> {
        let pos = self.items.partition_point(|e| e.name() < item.name());
        match self.items.get(pos) {
            Some(found) if found.name() == item.name() => {
                trace!(pos, "remove");
                Some(self.items.remove(pos))
            }
            _ => {
                trace!("no match");
                None
            }
        }
    }

    /// Applies [`remove`](Self::remove) for every element of `other`.
    ///
    /// Each element removes at most one occurrence. Returns how many were removed.
    pub fn remove_all(&mut self, other: &SortedMultiset<T>) -> usize {
        other
            .iter()
            .filter(|item| self.remove(item).is_some())
            .count()
    }

    /// Number of elements named exactly `name`.
    pub fn count_named(&self, name: &str) -> usize {
        let start = self.items.partition_point(|e| e.name() < name);
        let end = self.items.partition_point(|e| e.name() <= name);
        end - start
    }

    /// Sum of wholesale costs; 0 when empty.
    ///
    /// Accumulated in `u64`, which cannot overflow for fewer than 2^32 elements.
    pub fn total_wholesale_cost(&self) -> u64 {
        self.items.iter().map(|e| u64::from(e.wholesale_cost())).sum()
    }

    /// Sum of retail values; 0 when empty.
    pub fn total_retail_value(&self) -> u64 {
        self.items.iter().map(|e| u64::from(e.retail_value())).sum()
    }
}

impl<T: Listable + PartialEq> SortedMultiset<T> {
    /// True iff some element is fully equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }

    /// Multiset containment: every element of `other` must be matched by a
    /// distinct, fully equal element of `self`.
    ///
    /// Works on a copy; the receiver is never mutated. Vacuously true for empty `other`.
    pub fn contains_all(&self, other: &SortedMultiset<T>) -> bool {
        self.first_missing(other).is_none()
    }

    /// First element of `other`, in its iteration order, that cannot be matched
    /// once earlier elements have each consumed one equal element of `self`.
    pub fn first_missing<'a>(&self, other: &'a SortedMultiset<T>) -> Option<&'a Arc<T>> {
        self.without(other).err()
    }

    /// Removes, for each element of `other`, one **fully equal** element of `self`.
    ///
    /// All or nothing: if any element of `other` is unmatched, `self` is left
    /// unchanged and that element is returned. Unlike [`remove_all`](Self::remove_all)
    /// this never takes a same-named element with different prices.
    pub fn take_all<'a>(&mut self, other: &'a SortedMultiset<T>) -> Result<(), &'a Arc<T>> {
        *self = self.without(other)?;
        Ok(())
    }

    /// Copy of `self` with one equal element consumed per element of `other`.
    #[instrument(level = "debug", skip_all, fields(len = self.len(), other = other.len()))]
    fn without<'a>(&self, other: &'a SortedMultiset<T>) -> Result<Self, &'a Arc<T>> {
        let mut remaining = self.clone();
        for item in other.iter() {
            match remaining.position_of(item) {
                Some(pos) => {
                    remaining.items.remove(pos);
                }
                None => {
                    trace!(name = item.name(), "missing");
                    return Err(item);
                }
            }
        }
        Ok(remaining)
    }

    fn position_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|e| **e == *item)
    }
}

impl<T: fmt::Display> fmt::Display for SortedMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.items.iter().join(", "))
    }
}

impl<'a, T> IntoIterator for &'a SortedMultiset<T> {
    type Item = &'a Arc<T>;
    type IntoIter = std::slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Listable> Extend<Arc<T>> for SortedMultiset<T> {
    fn extend<I: IntoIterator<Item = Arc<T>>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Listable> FromIterator<Arc<T>> for SortedMultiset<T> {
    fn from_iter<I: IntoIterator<Item = Arc<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
