//! Capacity reclamation for over-allocated containers.
//!
//! Growable containers keep their capacity after elements are removed.
//! [`shrink`] hands back a container whose capacity better fits its length,
//! following a tiered policy:
//!
//! | Capacity `c`    | Fires when (`l` = length) | New capacity      |
//! |-----------------|---------------------------|-------------------|
//! | `c <= 64`       | never                     | unchanged         |
//! | `c > 2048`      | `c / l >= 2`              | `floor(c * 5/8)`  |
//! | `64 < c <= 2048`| `c / l >= 4`              | `c / 2`           |
//!
//! Divisions are integer divisions and both ratio comparisons are inclusive.
//! Between the tiers there is a band where nothing fires, which keeps a
//! container that hovers near a threshold from being reallocated over and
//! over.
//!
//! A single pass is not a fixed point: a very sparse container may shrink
//! again on the next call. Each pass only ever lowers the capacity and never
//! below the length, under any [`ShrinkPolicy`], so repeated calls converge.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::slice::shrink;
//!
//! let mut sparse: Vec<u64> = Vec::with_capacity(2048);
//! sparse.extend(0..100);
//!
//! let shrunk = shrink(sparse);
//! assert_eq!(shrunk.capacity(), 1024);
//! assert_eq!(shrunk.len(), 100);
//! ```

use std::collections::VecDeque;

/// Tunable thresholds of the shrink policy.
///
/// [`ShrinkPolicy::default`] is the policy used by [`shrink`]. A custom
/// policy can be applied through [`shrink_with`].
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::ShrinkPolicy;
///
/// let policy = ShrinkPolicy::default();
/// assert_eq!(policy.target(4096, 100), Some(2560));
/// assert_eq!(policy.target(2048, 100), Some(1024));
/// assert_eq!(policy.target(32, 3), None);
///
/// let eager = ShrinkPolicy { small_capacity: 0, ..ShrinkPolicy::default() };
/// assert_eq!(eager.target(32, 3), Some(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShrinkPolicy {
    /// Capacities at or below this are never shrunk.
    pub small_capacity: usize,
    /// Capacities above this use the large tier.
    pub large_capacity: usize,
    /// Minimum `capacity / length` for the large tier to fire.
    pub large_ratio: usize,
    /// Minimum `capacity / length` for the medium tier to fire.
    pub medium_ratio: usize,
    /// Numerator of the fraction of capacity kept by the large tier.
    pub large_retain_numerator: usize,
    /// Denominator of the fraction of capacity kept by the large tier.
    /// Zero disables the large tier.
    pub large_retain_denominator: usize,
}

impl ShrinkPolicy {
    /// The default policy: no shrink up to 64, keep 5/8 above 2048 when at
    /// most half used, halve otherwise when at most a quarter used.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            small_capacity: 64,
            large_capacity: 2048,
            large_ratio: 2,
            medium_ratio: 4,
            large_retain_numerator: 5,
            large_retain_denominator: 8,
        }
    }

    /// Returns the capacity a container of the given `capacity` and `length`
    /// should be reallocated to, or `None` if it should be left alone.
    ///
    /// An empty container is never shrunk. A policy whose tier would land
    /// below `length`, or would not lower `capacity` at all, yields `None`,
    /// as does a zero `large_retain_denominator`.
    #[must_use]
    pub const fn target(&self, capacity: usize, length: usize) -> Option<usize> {
        if length == 0 || capacity <= self.small_capacity {
            return None;
        }
        let ratio = capacity / length;
        let target = if capacity > self.large_capacity {
            if ratio < self.large_ratio || self.large_retain_denominator == 0 {
                return None;
            }
            self.retain(capacity)
        } else if ratio >= self.medium_ratio {
            capacity / 2
        } else {
            return None;
        };
        if target < length || target >= capacity {
            None
        } else {
            Some(target)
        }
    }

    /// `floor(capacity * numerator / denominator)` without overflowing on
    /// large capacities. `denominator` is non-zero.
    const fn retain(&self, capacity: usize) -> usize {
        let numerator = self.large_retain_numerator;
        let denominator = self.large_retain_denominator;
        capacity / denominator * numerator + capacity % denominator * numerator / denominator
    }
}

impl Default for ShrinkPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the capacity [`shrink`] would reallocate to, or `None` if it
/// would return its input unchanged.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::shrink_target;
///
/// assert_eq!(shrink_target(4096, 100), Some(2560));
/// assert_eq!(shrink_target(100, 3), Some(50));
/// assert_eq!(shrink_target(2048, 600), None);
/// assert_eq!(shrink_target(4096, 0), None);
/// ```
#[must_use]
pub const fn shrink_target(capacity: usize, length: usize) -> Option<usize> {
    ShrinkPolicy::new().target(capacity, length)
}

/// A growable container whose length and capacity can be inspected and
/// whose storage can be replaced by a fresh allocation.
pub trait Shrinkable: Sized {
    /// The element type.
    type Item;

    /// Number of live elements.
    fn length(&self) -> usize;

    /// Number of elements the current storage can hold.
    fn capacity(&self) -> usize;

    /// Moves every element, in order, into new storage of the given
    /// capacity and returns it. The old storage is released.
    ///
    /// `capacity` is never less than [`length`](Shrinkable::length).
    #[must_use]
    fn reallocate(self, capacity: usize) -> Self;
}

impl<T> Shrinkable for Vec<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn reallocate(self, capacity: usize) -> Self {
        let mut reallocated = Self::with_capacity(capacity);
        reallocated.extend(self);
        reallocated
    }
}

impl<T> Shrinkable for VecDeque<T> {
    type Item = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn reallocate(self, capacity: usize) -> Self {
        let mut reallocated = Self::with_capacity(capacity);
        reallocated.extend(self);
        reallocated
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Shrinkable for smallvec::SmallVec<A> {
    type Item = A::Item;

    fn length(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    // Inline storage cannot be released, so only spilled vectors move.
    fn reallocate(self, capacity: usize) -> Self {
        if !self.spilled() {
            return self;
        }
        let mut reallocated = Self::with_capacity(capacity);
        reallocated.extend(self);
        reallocated
    }
}

/// Shrinks the capacity of `sequence` according to the default
/// [`ShrinkPolicy`].
///
/// When the policy fires, the elements are moved in order into a new
/// allocation of exactly the target capacity. Otherwise `sequence` is
/// returned as is, with its original storage.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::shrink;
///
/// let mut small = Vec::with_capacity(32);
/// small.extend([1, 2, 3]);
/// assert_eq!(shrink(small).capacity(), 32);
///
/// let mut sparse = Vec::with_capacity(4096);
/// sparse.extend(0..100);
/// let shrunk = shrink(sparse);
/// assert_eq!(shrunk.capacity(), 2560);
/// assert!(shrunk.iter().copied().eq(0..100));
/// ```
#[must_use]
pub fn shrink<S: Shrinkable>(sequence: S) -> S {
    shrink_with(sequence, &ShrinkPolicy::default())
}

/// Shrinks the capacity of `sequence` according to `policy`.
///
/// Containers of zero-sized elements own no storage and are returned
/// unchanged.
#[must_use]
pub fn shrink_with<S: Shrinkable>(sequence: S, policy: &ShrinkPolicy) -> S {
    if size_of::<S::Item>() == 0 {
        return sequence;
    }
    let capacity = sequence.capacity();
    let length = sequence.length();
    let Some(target) = policy.target(capacity, length) else {
        return sequence;
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(capacity, length, target, "reallocating over-allocated sequence");

    sequence.reallocate(target)
}
