//! Positional insertion.

use super::IndexOutOfRangeError;

/// Returns a new vector with `element` placed at `index`.
///
/// Elements before `index` keep their positions, elements from `index`
/// onward move one place later. An `index` equal to `source.len()` appends.
/// The returned vector has capacity for exactly `source.len() + 1` elements
/// and shares no storage with `source`.
///
/// # Errors
///
/// Returns [`IndexOutOfRangeError`] when `index > source.len()`.
///
/// # Complexity
///
/// O(N)
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::{insert, IndexOutOfRangeError};
///
/// let source = [123, 100];
/// assert_eq!(insert(&source, 233, 0), Ok(vec![233, 123, 100]));
/// assert_eq!(insert(&source, 233, 2), Ok(vec![123, 100, 233]));
/// assert_eq!(insert(&source, 233, 12), Err(IndexOutOfRangeError::new(2, 12)));
/// assert_eq!(source, [123, 100]); // Original unchanged
/// ```
pub fn insert<T: Clone>(
    source: &[T],
    element: T,
    index: usize,
) -> Result<Vec<T>, IndexOutOfRangeError> {
    let length = source.len();
    if index > length {
        return Err(IndexOutOfRangeError::new(length, index));
    }

    let (front, back) = source.split_at(index);
    let mut result = Vec::with_capacity(length + 1);
    result.extend_from_slice(front);
    result.push(element);
    result.extend_from_slice(back);
    Ok(result)
}
