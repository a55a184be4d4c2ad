//! Method syntax for the slice operations.

use std::hash::Hash;

use super::{
    IndexOutOfRangeError, contains_all, contains_all_by, contains_any, contains_any_by,
    contains_by, insert, remove,
};

/// Extension methods on slices.
///
/// Each method delegates to the free function of the same meaning in
/// [`crate::slice`]; none of them modifies `self`.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::SliceExt;
///
/// let numbers = vec![1, 4, 6, 2];
/// let longer = numbers.with_inserted(2, 5).unwrap();
/// assert_eq!(longer, vec![1, 4, 5, 6, 2]);
///
/// let (shorter, removed) = longer.with_removed(0).unwrap();
/// assert_eq!(shorter, vec![4, 5, 6, 2]);
/// assert_eq!(removed, 1);
///
/// assert!(numbers.contains_all(&[2, 1]));
/// assert!(!numbers.contains_any(&[3, 5]));
/// ```
pub trait SliceExt<T> {
    /// See [`insert`](crate::slice::insert).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRangeError`] when `index > self.len()`.
    fn with_inserted(&self, index: usize, element: T) -> Result<Vec<T>, IndexOutOfRangeError>
    where
        T: Clone;

    /// See [`remove`](crate::slice::remove).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRangeError`] when `index >= self.len()`.
    fn with_removed(&self, index: usize) -> Result<(Vec<T>, T), IndexOutOfRangeError>
    where
        T: Clone;

    /// See [`contains_by`](crate::slice::contains_by).
    fn contains_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// See [`contains_any`](crate::slice::contains_any).
    fn contains_any(&self, targets: &[T]) -> bool
    where
        T: Eq + Hash;

    /// See [`contains_any_by`](crate::slice::contains_any_by).
    fn contains_any_by<F>(&self, targets: &[T], equal: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`contains_all`](crate::slice::contains_all).
    fn contains_all(&self, targets: &[T]) -> bool
    where
        T: Eq + Hash;

    /// See [`contains_all_by`](crate::slice::contains_all_by).
    fn contains_all_by<F>(&self, targets: &[T], equal: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;
}

impl<T> SliceExt<T> for [T] {
    fn with_inserted(&self, index: usize, element: T) -> Result<Vec<T>, IndexOutOfRangeError>
    where
        T: Clone,
    {
        insert(self, element, index)
    }

    fn with_removed(&self, index: usize) -> Result<(Vec<T>, T), IndexOutOfRangeError>
    where
        T: Clone,
    {
        remove(self, index)
    }

    fn contains_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        contains_by(self, predicate)
    }

    fn contains_any(&self, targets: &[T]) -> bool
    where
        T: Eq + Hash,
    {
        contains_any(self, targets)
    }

    fn contains_any_by<F>(&self, targets: &[T], equal: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        contains_any_by(self, targets, equal)
    }

    fn contains_all(&self, targets: &[T]) -> bool
    where
        T: Eq + Hash,
    {
        contains_all(self, targets)
    }

    fn contains_all_by<F>(&self, targets: &[T], equal: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        contains_all_by(self, targets, equal)
    }
}
