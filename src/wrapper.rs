use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use tracing::trace;

use crate::container::{Container, Sequenced};
use crate::error::{CollectionError, Result};
use crate::hash::hash_unordered;
use crate::multiset::{multiset_eq, sequence_eq};
use crate::order::OrderMode;

/// A container that compares by the values of its elements.
///
/// The wrapper owns whatever it is given. Wrap a `&mut` borrow to keep
/// mutations visible in the caller's container, or reach the container
/// through [`get_mut`](ValueEq::get_mut).
///
/// Two wrappers compare position by position only when both are
/// [`OrderMode::Consider`]; otherwise they compare as multisets. A
/// non-sequenced container is always wrapped as [`OrderMode::Ignore`].
/// Comparing wrappers of mixed modes is therefore not transitive:
/// `[1, 2, 3]` and `[2, 1, 3]` (both ordered) differ, yet each equals
/// `[2, 1, 3]` ignoring order.
///
/// The hash ignores both element order and the ordering mode, so wrappers
/// that compare equal always hash equal.
pub struct ValueEq<C> {
    container: C,
    ordering: OrderMode,
}

impl<C: Container> ValueEq<C> {
    /// Wraps `container`, downgrading `ordering` to [`OrderMode::Ignore`]
    /// when the container is not sequenced.
    pub fn new(container: C, ordering: OrderMode) -> Self {
        let ordering = if C::SEQUENCED {
            ordering
        } else {
            if ordering.is_considered() {
                trace!("container is not sequenced, ignoring order");
            }
            OrderMode::Ignore
        };
        Self {
            container,
            ordering,
        }
    }

    pub fn ordered(container: C) -> Self {
        Self::new(container, OrderMode::Consider)
    }

    pub fn unordered(container: C) -> Self {
        Self::new(container, OrderMode::Ignore)
    }

    /// The effective mode, after any downgrade at construction.
    pub fn ordering(&self) -> OrderMode {
        self.ordering
    }

    pub fn get_ref(&self) -> &C {
        &self.container
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_inner(self) -> C {
        self.container
    }

    pub fn iter(&self) -> C::Iter<'_> {
        self.container.iter()
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn contains(&self, item: &C::Item) -> bool {
        self.container.contains(item)
    }

    pub fn add(&mut self, item: C::Item) -> Result<()> {
        self.container.add(item)
    }

    pub fn remove(&mut self, item: &C::Item) -> Result<bool> {
        self.container.remove(item)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.container.clear()
    }

    pub fn is_read_only(&self) -> bool {
        self.container.is_read_only()
    }

    /// Clones the elements, in iteration order, into `dest` from `index` on.
    pub fn copy_to(&self, dest: &mut [C::Item], index: usize) -> Result<()>
    where
        C::Item: Clone,
    {
        let needed = self.len();
        let available = dest.len().saturating_sub(index);
        if index > dest.len() || needed > available {
            return Err(CollectionError::InsufficientSpace { needed, available });
        }
        for (slot, item) in dest[index..].iter_mut().zip(self.iter()) {
            slot.clone_from(item);
        }
        Ok(())
    }

    // Same address and same size means the very same wrapper; a wrapper
    // nested inside another may share its address but never its size.
    fn is_same<C2>(&self, other: &ValueEq<C2>) -> bool {
        mem::size_of::<Self>() == mem::size_of::<ValueEq<C2>>()
            && std::ptr::addr_eq(self as *const Self, other as *const ValueEq<C2>)
    }
}

impl<C: Sequenced> ValueEq<C> {
    pub fn get(&self, index: usize) -> Option<&C::Item> {
        self.container.get(index)
    }
}

/// Extension methods to wrap any container in place.
pub trait IntoValueEq: Container + Sized {
    /// Wraps `self`, ignoring order in comparisons.
    fn into_value_eq(self) -> ValueEq<Self> {
        ValueEq::unordered(self)
    }

    /// Wraps `self`, considering order against other ordered wrappers.
    fn into_ordered_value_eq(self) -> ValueEq<Self> {
        ValueEq::ordered(self)
    }
}

impl<C: Container> IntoValueEq for C {}

impl<C, C2> PartialEq<ValueEq<C2>> for ValueEq<C>
where
    C: Container,
    C2: Container<Item = C::Item>,
    C::Item: Eq + Hash,
{
    fn eq(&self, other: &ValueEq<C2>) -> bool {
        if self.is_same(other) {
            return true;
        }
        if self.ordering.shared(other.ordering).is_considered() && C::SEQUENCED && C2::SEQUENCED {
            trace!("comparing in order");
            return sequence_eq(self.iter(), other.iter());
        }
        trace!(
            left = %self.ordering,
            right = %other.ordering,
            "comparing as multisets"
        );
        self.len() == other.len() && multiset_eq(self.iter(), other.iter())
    }
}

impl<C> Eq for ValueEq<C>
where
    C: Container,
    C::Item: Eq + Hash,
{
}

impl<C> Hash for ValueEq<C>
where
    C: Container,
    C::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_unordered(self.iter(), state)
    }
}

impl<C: Clone> Clone for ValueEq<C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            ordering: self.ordering,
        }
    }
}

impl<C> fmt::Debug for ValueEq<C>
where
    C: Container,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Elements<'a, C>(&'a C);

        impl<C> fmt::Debug for Elements<'_, C>
        where
            C: Container,
            C::Item: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("ValueEq")
            .field("ordering", &self.ordering)
            .field("elements", &Elements(&self.container))
            .finish()
    }
}

impl<C> fmt::Display for ValueEq<C>
where
    C: Container,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueEq[ordering={}](", self.ordering)?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<'a, C: Container> IntoIterator for &'a ValueEq<C> {
    type Item = &'a C::Item;
    type IntoIter = C::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Wrapping a wrapper iterates the inner one like any other container.
impl<C: Container> Container for ValueEq<C> {
    type Item = C::Item;
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a;

    const SEQUENCED: bool = C::SEQUENCED;

    fn iter(&self) -> Self::Iter<'_> {
        ValueEq::iter(self)
    }

    fn len(&self) -> usize {
        ValueEq::len(self)
    }

    fn contains(&self, item: &C::Item) -> bool {
        ValueEq::contains(self, item)
    }

    fn add(&mut self, item: C::Item) -> Result<()> {
        ValueEq::add(self, item)
    }

    fn remove(&mut self, item: &C::Item) -> Result<bool> {
        ValueEq::remove(self, item)
    }

    fn clear(&mut self) -> Result<()> {
        ValueEq::clear(self)
    }

    fn is_read_only(&self) -> bool {
        ValueEq::is_read_only(self)
    }
}

impl<C: Sequenced> Sequenced for ValueEq<C> {
    fn get(&self, index: usize) -> Option<&C::Item> {
        ValueEq::get(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

    fn assert_equal<C1, C2>(left: &ValueEq<C1>, right: &ValueEq<C2>, equal: bool)
    where
        C1: Container,
        C2: Container<Item = C1::Item>,
        C1::Item: Eq + Hash,
    {
        assert_eq!(left == right, equal);
        assert_eq!(left != right, !equal);
        assert_eq!(right == left, equal);
        if equal {
            assert_eq!(hash_of(left), hash_of(right));
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn set(items: &[i32]) -> HashSet<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_equal_vecs_equal() {
        let wrapper1 = vec![1, 2, 3].into_ordered_value_eq();
        let wrapper2 = vec![1, 2, 3].into_ordered_value_eq();
        assert_equal(&wrapper1, &wrapper2, true);
    }

    #[test]
    fn test_considers_ordering_of_elements() {
        let wrapper1 = vec![1, 2, 3].into_ordered_value_eq();
        let wrapper2 = vec![2, 1, 3].into_ordered_value_eq();
        assert_equal(&wrapper1, &wrapper2, false);
    }

    #[test]
    fn test_handles_sets() {
        let wrapper1 = set(&[1, 2, 3]).into_value_eq();
        let wrapper2 = set(&[2, 1, 3]).into_value_eq();
        assert_equal(&wrapper1, &wrapper2, true);
    }

    #[test]
    fn test_handles_sets_mixed_with_vecs() {
        let wrapper1 = set(&[1, 2, 3]).into_value_eq();
        let wrapper2 = vec![2, 1, 3].into_ordered_value_eq();
        assert_eq!(wrapper2.ordering(), OrderMode::Consider);
        assert_equal(&wrapper1, &wrapper2, true);
    }

    #[test]
    fn test_ordered_set_is_downgraded() {
        let wrapper1 = set(&[1, 2, 3]).into_ordered_value_eq();
        let wrapper2 = vec![2, 1, 3].into_ordered_value_eq();
        assert_eq!(wrapper1.ordering(), OrderMode::Ignore);
        assert_equal(&wrapper1, &wrapper2, true);

        let list: LinkedList<i32> = [3, 2, 1].into_iter().collect();
        assert_eq!(list.into_ordered_value_eq().ordering(), OrderMode::Ignore);
    }

    #[test]
    fn test_ignore_ordering() {
        for ignore1 in [true, false] {
            for ignore2 in [true, false] {
                let wrap = |data: Vec<i32>, ignore: bool| {
                    if ignore {
                        data.into_value_eq()
                    } else {
                        data.into_ordered_value_eq()
                    }
                };
                let wrapper1 = wrap(vec![1, 2, 3], ignore1);
                let wrapper2 = wrap(vec![2, 1, 3], ignore2);
                assert_eq!(wrapper1.ordering().is_considered(), !ignore1);
                assert_eq!(wrapper2.ordering().is_considered(), !ignore2);
                assert_equal(&wrapper1, &wrapper2, ignore1 || ignore2);
            }
        }
    }

    #[test]
    fn test_duplicate_elements() {
        for ignore1 in [true, false] {
            for ignore2 in [true, false] {
                let wrapper1 = ValueEq::new(
                    vec![1, 2, 3],
                    if ignore1 { OrderMode::Ignore } else { OrderMode::Consider },
                );
                let wrapper2 = ValueEq::new(
                    vec![1, 2, 3, 3],
                    if ignore2 { OrderMode::Ignore } else { OrderMode::Consider },
                );
                assert_equal(&wrapper1, &wrapper2, false);
            }
        }
    }

    #[test]
    fn test_recursive_wrapper() {
        let wrapper1 = set(&[1, 2, 3]).into_value_eq().into_value_eq();
        let wrapper2 = vec![2, 1, 3].into_ordered_value_eq();
        assert_equal(&wrapper1, &wrapper2, true);

        let nested = vec![1, 2, 3].into_ordered_value_eq().into_ordered_value_eq();
        assert_eq!(nested.ordering(), OrderMode::Consider);
        assert_equal(&nested, &vec![1, 2, 3].into_ordered_value_eq(), true);
        assert_equal(&nested, &vec![2, 1, 3].into_ordered_value_eq(), false);
    }

    #[test]
    fn test_mixed_container_kinds() {
        let deque: VecDeque<i32> = [3, 1, 2].into_iter().collect();
        let tree: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        assert_equal(&deque.into_value_eq(), &tree.into_value_eq(), true);
        assert_equal(&[1, 2, 3].into_ordered_value_eq(), &vec![1, 2, 3].into_ordered_value_eq(), true);
    }

    #[test]
    fn test_reflexive() {
        let wrapper = vec![1, 2, 3].into_ordered_value_eq();
        assert_equal(&wrapper, &wrapper, true);
        let empty: Vec<i32> = Vec::new();
        assert_equal(&empty.into_value_eq(), &HashSet::<i32>::new().into_value_eq(), true);
    }

    #[test]
    fn test_mutation_is_visible_in_source() {
        let mut data = vec![1, 2];
        {
            let mut wrapper = ValueEq::unordered(&mut data);
            wrapper.add(3).unwrap();
            assert_eq!(wrapper.remove(&1), Ok(true));
        }
        assert_eq!(data, vec![2, 3]);

        let mut wrapper = ValueEq::ordered(&mut data);
        wrapper.get_mut().push(4);
        assert!(wrapper.contains(&4));
        assert_eq!(wrapper.len(), 3);
        assert_eq!(wrapper.get(2), Some(&4));
        wrapper.clear().unwrap();
        assert!(wrapper.is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn test_read_only_passes_error_through() {
        let mut wrapper = [1, 2, 3].into_value_eq();
        assert!(wrapper.is_read_only());
        assert_eq!(wrapper.add(4), Err(CollectionError::ReadOnly));
        assert_eq!(wrapper.len(), 3);
    }

    #[test]
    fn test_copy_to() {
        let wrapper = vec![1, 2, 3].into_ordered_value_eq();
        let mut dest = [0; 5];
        wrapper.copy_to(&mut dest, 1).unwrap();
        assert_eq!(dest, [0, 1, 2, 3, 0]);
        assert_eq!(
            wrapper.copy_to(&mut dest, 3),
            Err(CollectionError::InsufficientSpace {
                needed: 3,
                available: 2
            })
        );
        assert_eq!(
            wrapper.copy_to(&mut dest, 9),
            Err(CollectionError::InsufficientSpace {
                needed: 3,
                available: 0
            })
        );
    }

    #[test]
    fn test_hash_ignores_ordering_mode() {
        let ordered = vec![3, 2, 1].into_ordered_value_eq();
        let unordered = set(&[1, 2, 3]).into_value_eq();
        assert_eq!(hash_of(&ordered), hash_of(&unordered));
    }

    #[test]
    fn test_usable_as_set_member() {
        let mut seen = HashSet::new();
        assert!(seen.insert(vec![1, 2, 3].into_value_eq()));
        assert!(!seen.insert(vec![3, 2, 1].into_value_eq()));
        assert!(seen.insert(vec![3, 2, 1, 1].into_value_eq()));
    }

    #[test]
    fn test_display() {
        let wrapper = vec![1, 2, 3].into_ordered_value_eq();
        assert_eq!(wrapper.to_string(), "ValueEq[ordering=Consider]([1, 2, 3])");
        assert_eq!(
            format!("{:?}", [4].into_value_eq()),
            "ValueEq { ordering: Ignore, elements: [4] }"
        );
    }

    #[test]
    fn test_into_iterator() {
        let wrapper = vec![1, 2, 3].into_ordered_value_eq();
        let sum: i32 = (&wrapper).into_iter().sum();
        assert_eq!(sum, 6);
        let mut seen = Vec::new();
        for item in &wrapper {
            seen.push(*item);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(wrapper.into_inner(), vec![1, 2, 3]);
    }
}
