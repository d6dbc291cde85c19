//! Capability traits for the containers a [`ValueEq`](crate::ValueEq) can wrap.
//!
//! [`Container`] is the baseline: iterate, count, test membership and
//! mutate. [`Sequenced`] marks containers with positional access, whose
//! iteration order is meaningful. Only sequenced containers ever compare
//! position by position.

use std::collections::{
    btree_set, hash_set, linked_list, vec_deque, BTreeSet, HashSet, LinkedList, VecDeque,
};
use std::hash::{BuildHasher, Hash};
use std::slice;

use crate::error::{CollectionError, Result};

pub trait Container {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Whether this type implements [`Sequenced`].
    ///
    /// Must be `true` exactly for implementors of [`Sequenced`]; the
    /// ordering mode of a wrapper is derived from it at construction.
    const SEQUENCED: bool = false;

    fn iter(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &Self::Item) -> bool;

    fn add(&mut self, item: Self::Item) -> Result<()>;

    /// Removes one occurrence of `item`, returning whether it was present.
    fn remove(&mut self, item: &Self::Item) -> Result<bool>;

    fn clear(&mut self) -> Result<()>;

    fn is_read_only(&self) -> bool {
        false
    }
}

/// A container with positional access. Iteration follows index order.
pub trait Sequenced: Container {
    fn get(&self, index: usize) -> Option<&Self::Item>;
}

impl<T: PartialEq> Container for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    const SEQUENCED: bool = true;

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        match <[T]>::iter(self).position(|x| x == item) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<()> {
        Vec::clear(self);
        Ok(())
    }
}

impl<T: PartialEq> Sequenced for Vec<T> {
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T: PartialEq> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    const SEQUENCED: bool = true;

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        VecDeque::contains(self, item)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push_back(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        match VecDeque::iter(self).position(|x| x == item) {
            Some(index) => Ok(VecDeque::remove(self, index).is_some()),
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<()> {
        VecDeque::clear(self);
        Ok(())
    }
}

impl<T: PartialEq> Sequenced for VecDeque<T> {
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

// fixed size, so every mutation is refused
impl<T: PartialEq, const N: usize> Container for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    const SEQUENCED: bool = true;

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn len(&self) -> usize {
        N
    }

    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }

    fn add(&mut self, _item: T) -> Result<()> {
        Err(CollectionError::ReadOnly)
    }

    fn remove(&mut self, _item: &T) -> Result<bool> {
        Err(CollectionError::ReadOnly)
    }

    fn clear(&mut self) -> Result<()> {
        Err(CollectionError::ReadOnly)
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl<T: PartialEq, const N: usize> Sequenced for [T; N] {
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

#[cfg(feature = "smallvec")]
impl<A> Container for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: PartialEq,
{
    type Item = A::Item;
    type Iter<'a>
        = slice::Iter<'a, A::Item>
    where
        Self: 'a;

    const SEQUENCED: bool = true;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    fn contains(&self, item: &A::Item) -> bool {
        self.as_slice().contains(item)
    }

    fn add(&mut self, item: A::Item) -> Result<()> {
        self.push(item);
        Ok(())
    }

    fn remove(&mut self, item: &A::Item) -> Result<bool> {
        match self.as_slice().iter().position(|x| x == item) {
            Some(index) => {
                smallvec::SmallVec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<()> {
        smallvec::SmallVec::clear(self);
        Ok(())
    }
}

#[cfg(feature = "smallvec")]
impl<A> Sequenced for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: PartialEq,
{
    fn get(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Container for HashSet<T, S> {
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.insert(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        Ok(HashSet::remove(self, item))
    }

    fn clear(&mut self) -> Result<()> {
        HashSet::clear(self);
        Ok(())
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.insert(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        Ok(BTreeSet::remove(self, item))
    }

    fn clear(&mut self) -> Result<()> {
        BTreeSet::clear(self);
        Ok(())
    }
}

// Iterates in insertion order but has no positional access, so it is not
// sequenced.
impl<T: PartialEq> Container for LinkedList<T> {
    type Item = T;
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        LinkedList::contains(self, item)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push_back(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        let index = match LinkedList::iter(self).position(|x| x == item) {
            Some(index) => index,
            None => return Ok(false),
        };
        let mut tail = self.split_off(index);
        tail.pop_front();
        self.append(&mut tail);
        Ok(true)
    }

    fn clear(&mut self) -> Result<()> {
        LinkedList::clear(self);
        Ok(())
    }
}

/// A writable view: mutations land in the borrowed container.
impl<C: Container> Container for &mut C {
    type Item = C::Item;
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a;

    const SEQUENCED: bool = C::SEQUENCED;

    fn iter(&self) -> Self::Iter<'_> {
        C::iter(&**self)
    }

    fn len(&self) -> usize {
        C::len(&**self)
    }

    fn contains(&self, item: &C::Item) -> bool {
        C::contains(&**self, item)
    }

    fn add(&mut self, item: C::Item) -> Result<()> {
        C::add(&mut **self, item)
    }

    fn remove(&mut self, item: &C::Item) -> Result<bool> {
        C::remove(&mut **self, item)
    }

    fn clear(&mut self) -> Result<()> {
        C::clear(&mut **self)
    }

    fn is_read_only(&self) -> bool {
        C::is_read_only(&**self)
    }
}

impl<C: Sequenced> Sequenced for &mut C {
    fn get(&self, index: usize) -> Option<&C::Item> {
        C::get(&**self, index)
    }
}

/// A read-only view over a shared borrow.
impl<C: Container> Container for &C {
    type Item = C::Item;
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a;

    const SEQUENCED: bool = C::SEQUENCED;

    fn iter(&self) -> Self::Iter<'_> {
        C::iter(*self)
    }

    fn len(&self) -> usize {
        C::len(*self)
    }

    fn contains(&self, item: &C::Item) -> bool {
        C::contains(*self, item)
    }

    fn add(&mut self, _item: C::Item) -> Result<()> {
        Err(CollectionError::ReadOnly)
    }

    fn remove(&mut self, _item: &C::Item) -> Result<bool> {
        Err(CollectionError::ReadOnly)
    }

    fn clear(&mut self) -> Result<()> {
        Err(CollectionError::ReadOnly)
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl<C: Sequenced> Sequenced for &C {
    fn get(&self, index: usize) -> Option<&C::Item> {
        C::get(*self, index)
    }
}
