//! Positional removal.

use super::IndexOutOfRangeError;

/// Returns a new vector without the element at `index`, together with that
/// element.
///
/// Elements before `index` keep their positions, elements after it move one
/// place earlier. Removing the only element of a one-element slice yields an
/// empty vector. `source` itself is left untouched, so the removed element is
/// a clone.
///
/// # Errors
///
/// Returns [`IndexOutOfRangeError`] when `index >= source.len()`. An empty
/// slice has no valid index.
///
/// # Complexity
///
/// O(N)
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::{remove, IndexOutOfRangeError};
///
/// assert_eq!(remove(&[123, 100], 0), Ok((vec![100], 123)));
/// assert_eq!(remove(&[123], 0), Ok((vec![], 123)));
/// assert_eq!(remove::<i32>(&[], 0), Err(IndexOutOfRangeError::new(0, 0)));
/// ```
pub fn remove<T: Clone>(source: &[T], index: usize) -> Result<(Vec<T>, T), IndexOutOfRangeError> {
    let length = source.len();
    let Some(removed) = source.get(index) else {
        return Err(IndexOutOfRangeError::new(length, index));
    };

    let mut result = Vec::with_capacity(length - 1);
    result.extend_from_slice(&source[..index]);
    result.extend_from_slice(&source[index + 1..]);
    Ok((result, removed.clone()))
}
