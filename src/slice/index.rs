//! Hash index used by the membership fast paths.
//!
//! The hasher is selected by cargo features:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState`
//! - neither: the standard library's `RandomState`
//!
//! When both features are enabled `fxhash` takes precedence. The choice only
//! affects speed, never the answer of a membership test.

use std::collections::HashSet;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHasher = std::collections::hash_map::RandomState;

/// Set of borrowed elements for O(1) average lookups.
pub(crate) type MembershipIndex<'a, T> = HashSet<&'a T, IndexHasher>;

/// Builds a lookup index over every element of `source`.
pub(crate) fn build_index<T: Eq + Hash>(source: &[T]) -> MembershipIndex<'_, T> {
    let mut index = HashSet::with_capacity_and_hasher(source.len(), IndexHasher::default());
    index.extend(source);
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_build_index_deduplicates() {
        let index = build_index(&[1, 4, 6, 2, 6]);
        assert_eq!(index.len(), 4);
        assert!(index.contains(&6));
        assert!(!index.contains(&7));
    }

    #[rstest]
    fn test_build_index_empty() {
        let index = build_index::<String>(&[]);
        assert!(index.is_empty());
    }
}
