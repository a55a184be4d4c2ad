//! Membership tests.
//!
//! Every test comes in two flavours:
//!
//! - built-in equality (`contains`, `contains_any`, `contains_all`), where
//!   the multi-target versions index `source` in a hash set first
//! - caller supplied predicate (`contains_by`, `contains_any_by`,
//!   `contains_all_by`), which compare pairwise
//!
//! # Time Complexity
//!
//! | Operation         | Complexity            |
//! |-------------------|-----------------------|
//! | `contains`        | O(S)                  |
//! | `contains_by`     | O(S)                  |
//! | `contains_any`    | O(S + T) expected     |
//! | `contains_any_by` | O(S * T)              |
//! | `contains_all`    | O(S + T) expected     |
//! | `contains_all_by` | O(S * T)              |
//!
//! where S is the length of `source` and T the length of `targets`.
//!
//! An empty `targets` makes the `all` tests vacuously true. An empty
//! `source` makes every other test false.

use std::hash::Hash;

use super::index::build_index;

/// Returns `true` if some element of `source` equals `target`.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// assert!(!contains::<i32>(&[], &1));
/// ```
pub fn contains<T: PartialEq>(source: &[T], target: &T) -> bool {
    contains_by(source, |element| element == target)
}

/// Returns `true` if `predicate` holds for some element of `source`.
///
/// Elements are visited in order and the search stops at the first match.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::contains_by;
///
/// let words = ["apple", "banana", "cherry"];
/// assert!(contains_by(&words, |word| word.starts_with('b')));
/// assert!(!contains_by(&words, |word| word.is_empty()));
/// ```
pub fn contains_by<T, F>(source: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    source.iter().any(predicate)
}

/// Returns `true` if any element of `targets` is present in `source`.
///
/// `source` is indexed in a hash set, so the whole test runs in expected
/// O(S + T) time.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::contains_any;
///
/// assert!(contains_any(&[1, 4, 6, 2, 6], &[7, 0, 6]));
/// assert!(!contains_any(&[1, 4, 6, 2, 6], &[7, 0]));
/// assert!(!contains_any::<i32>(&[], &[]));
/// ```
pub fn contains_any<T: Eq + Hash>(source: &[T], targets: &[T]) -> bool {
    if source.is_empty() || targets.is_empty() {
        return false;
    }
    let index = build_index(source);
    targets.iter().any(|target| index.contains(target))
}

/// Returns `true` if any element of `targets` is present in `source`
/// according to `equal`.
///
/// `equal` receives an element of `source` first and an element of
/// `targets` second. Since an arbitrary equivalence cannot be hashed, every
/// pair is compared in the worst case.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::contains_any_by;
///
/// let names = ["Alice", "Bob"];
/// let wanted = ["carol", "bob"];
/// assert!(contains_any_by(&names, &wanted, |name, want| name.eq_ignore_ascii_case(want)));
/// ```
pub fn contains_any_by<T, F>(source: &[T], targets: &[T], mut equal: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    targets
        .iter()
        .any(|target| source.iter().any(|element| equal(element, target)))
}

/// Returns `true` if every element of `targets` is present in `source`.
///
/// An empty `targets` is always contained, even in an empty `source`.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::contains_all;
///
/// assert!(contains_all(&[1, 4, 6, 2, 6], &[1, 4, 6, 2]));
/// assert!(!contains_all(&[1, 4, 6, 2, 6], &[1, 4, 6, 2, 6, 7]));
/// assert!(contains_all::<i32>(&[], &[]));
/// ```
pub fn contains_all<T: Eq + Hash>(source: &[T], targets: &[T]) -> bool {
    if targets.is_empty() {
        return true;
    }
    let index = build_index(source);
    targets.iter().all(|target| index.contains(target))
}

/// Returns `true` if every element of `targets` is present in `source`
/// according to `equal`.
///
/// `equal` receives an element of `source` first and an element of
/// `targets` second.
///
/// # Examples
///
/// ```rust
/// use slicekit::slice::contains_all_by;
///
/// let source = [1.0_f64, 2.5, 4.0];
/// let close = |a: &f64, b: &f64| (a - b).abs() < 0.01;
/// assert!(contains_all_by(&source, &[2.501, 0.999], close));
/// assert!(!contains_all_by(&source, &[3.0], close));
/// ```
pub fn contains_all_by<T, F>(source: &[T], targets: &[T], mut equal: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    targets
        .iter()
        .all(|target| source.iter().any(|element| equal(element, target)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    #[rstest]
    #[case(vec![1, 4, 6, 2, 6], 4, true)]
    #[case(vec![1, 4, 6, 2, 6], 3, false)]
    #[case(vec![], 1, false)]
    fn test_contains(#[case] source: Vec<i32>, #[case] target: i32, #[case] expected: bool) {
        assert_eq!(contains(&source, &target), expected);
    }

    #[rstest]
    fn test_contains_by_short_circuits() {
        let mut visited = Vec::new();
        let found = contains_by(&[1, 2, 3, 4], |element| {
            visited.push(*element);
            *element == 2
        });
        assert!(found);
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    #[case(vec![1, 4, 6, 2, 6], vec![1, 4, 6, 2], true)]
    #[case(vec![1, 4, 6, 2, 6], vec![7, 0], false)]
    #[case(vec![1, 4, 6, 2, 6], vec![], false)]
    #[case(vec![], vec![1], false)]
    #[case(vec![], vec![], false)]
    fn test_contains_any(
        #[case] source: Vec<i32>,
        #[case] targets: Vec<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(contains_any(&source, &targets), expected);
        assert_eq!(
            contains_any_by(&source, &targets, |a, b| a == b),
            expected
        );
    }

    #[rstest]
    #[case(vec![1, 4, 6, 2, 6], vec![1, 4, 6, 2], true)]
    #[case(vec![1, 4, 6, 2, 6], vec![1, 4, 6, 2, 6, 7], false)]
    #[case(vec![1, 4, 6, 2, 6], vec![], true)]
    #[case(vec![], vec![1], false)]
    #[case(vec![], vec![], true)]
    fn test_contains_all(
        #[case] source: Vec<i32>,
        #[case] targets: Vec<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(contains_all(&source, &targets), expected);
        assert_eq!(
            contains_all_by(&source, &targets, |a, b| a == b),
            expected
        );
    }

    #[rstest]
    fn test_contains_all_by_custom_equivalence() {
        let people = [
            Person { name: "Alice", age: 30 },
            Person { name: "Bob", age: 25 },
        ];
        let wanted = [Person { name: "Bob", age: 99 }];
        let same_name = |a: &Person, b: &Person| a.name == b.name;

        assert!(contains_all_by(&people, &wanted, same_name));
        assert!(!contains_all(&people, &wanted));
    }

    #[rstest]
    fn test_contains_any_by_argument_order() {
        let mut pairs = Vec::new();
        contains_any_by(&[1, 2], &[10], |source, target| {
            pairs.push((*source, *target));
            false
        });
        assert_eq!(pairs, vec![(1, 10), (2, 10)]);
    }
}
