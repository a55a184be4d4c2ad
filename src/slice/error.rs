//! Error types for the slice operations.
//!
//! Only the positional edits ([`insert`](super::insert) and
//! [`remove`](super::remove)) can fail. Membership tests and shrinking
//! always produce a value.

/// Represents an index that falls outside the valid range of a sequence.
///
/// `insert` accepts indices in `0..=length` and `remove` accepts indices in
/// `0..length`. Any other index yields this error, carrying the length of the
/// sequence and the rejected index.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::IndexOutOfRangeError;
///
/// let error = IndexOutOfRangeError::new(2, 12);
/// assert_eq!(
///     format!("{error}"),
///     "index out of range: length 2, index 12"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRangeError {
    /// The length of the sequence the index was checked against.
    pub length: usize,
    /// The offending index.
    pub index: usize,
}

impl IndexOutOfRangeError {
    /// Creates a new error for the given sequence length and index.
    #[must_use]
    pub const fn new(length: usize, index: usize) -> Self {
        Self { length, index }
    }
}

impl std::fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index out of range: length {}, index {}",
            self.length, self.index
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}
