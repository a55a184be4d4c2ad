//! # slicekit
//!
//! Small, pure helpers for working with ordered sequences in Rust.
//!
//! ## Overview
//!
//! The standard library already gives slices and vectors their storage,
//! growth and iteration. This crate adds a thin layer of policy on top:
//!
//! - **Insert / Remove**: bounds-checked edits that return a new `Vec`
//!   and leave the input slice untouched
//! - **Membership**: `contains`, `contains_any` and `contains_all`, each with
//!   a hash-indexed version for `Eq + Hash` elements and a pairwise `_by`
//!   version for caller supplied predicates
//! - **Shrink**: a tiered heuristic that reallocates over-allocated
//!   containers to a smaller capacity
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash` for the membership index
//! - `ahash`: use `ahash` for the membership index
//! - `smallvec`: implement [`Shrinkable`](slice::Shrinkable) for `SmallVec`
//! - `tracing`: emit a `trace!` event whenever a shrink reallocates
//! - `full`: `smallvec`, `fxhash` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let numbers = [123, 100];
//! let inserted = insert(&numbers, 233, 0).unwrap();
//! assert_eq!(inserted, vec![233, 123, 100]);
//!
//! let (remaining, removed) = remove(&inserted, 0).unwrap();
//! assert_eq!(remaining, numbers);
//! assert_eq!(removed, 233);
//!
//! assert!(contains_all(&[1, 4, 6, 2, 6], &[1, 4, 6, 2]));
//!
//! let mut sparse = Vec::with_capacity(4096);
//! sparse.extend(0..100);
//! assert_eq!(shrink(sparse).capacity(), 2560);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation, trait and error type of the crate.
///
/// # Usage
///
/// ```rust
/// use slicekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::slice::*;
}

pub mod slice;
