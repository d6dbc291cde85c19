use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

/// Multiset equality: position is ignored, duplicate counts are not.
///
/// Counts the occurrences in `first`, then takes one away per element of
/// `second`. An element of `second` never seen in `first` fails right away;
/// otherwise the two are equal iff every count ends at zero.
pub(crate) fn multiset_eq<'a, 'b, T, A, B>(first: A, second: B) -> bool
where
    T: Eq + Hash + 'a + 'b,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'b T>,
{
    let mut counts: HashMap<&T, isize> = HashMap::new();
    for item in first {
        *counts.entry(item).or_insert(0) += 1;
    }
    for item in second {
        match counts.get_mut(item) {
            Some(count) => *count -= 1,
            None => return false,
        }
    }
    counts.values().all(|&count| count == 0)
}

/// Ordered equality: same length, pairwise equal by position.
pub(crate) fn sequence_eq<'a, 'b, T, A, B>(first: A, second: B) -> bool
where
    T: PartialEq + 'a + 'b,
    A: IntoIterator<Item = &'a T>,
    B: IntoIterator<Item = &'b T>,
{
    first.into_iter().eq(second)
}
