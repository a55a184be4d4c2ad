//! Pure operations over ordered sequences.
//!
//! This module provides:
//!
//! - [`insert`] / [`remove`]: bounds-checked positional edits returning a
//!   new `Vec`
//! - [`contains`], [`contains_any`], [`contains_all`] and their `_by`
//!   variants: membership tests
//! - [`shrink`] / [`shrink_with`]: capacity reclamation for any
//!   [`Shrinkable`] container
//! - [`SliceExt`]: the same operations as methods on slices
//!
//! # Immutability
//!
//! No operation modifies a borrowed input. `insert` and `remove` allocate a
//! fresh vector; `shrink` takes ownership and either hands the same
//! container back or moves its elements into a smaller allocation.
//!
//! ```rust
//! use slicekit::slice::{insert, remove};
//!
//! let original = vec![1, 2, 3];
//! let inserted = insert(&original, 0, 0).unwrap();
//! let (removed, element) = remove(&inserted, 0).unwrap();
//!
//! assert_eq!(original, vec![1, 2, 3]);      // Original unchanged
//! assert_eq!(inserted, vec![0, 1, 2, 3]);   // New version
//! assert_eq!((removed, element), (original.clone(), 0));
//! ```

mod contains;
mod error;
mod ext;
mod index;
mod insert;
mod remove;
mod shrink;

pub use contains::contains;
pub use contains::contains_all;
pub use contains::contains_all_by;
pub use contains::contains_any;
pub use contains::contains_any_by;
pub use contains::contains_by;
pub use error::IndexOutOfRangeError;
pub use ext::SliceExt;
pub use insert::insert;
pub use remove::remove;
pub use shrink::ShrinkPolicy;
pub use shrink::Shrinkable;
pub use shrink::shrink;
pub use shrink::shrink_target;
pub use shrink::shrink_with;
