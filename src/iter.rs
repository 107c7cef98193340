//! Contains all iterator types and implementations.
//!
//! This is in its own module to not pollute the top-level namespace.

use std::{iter::FusedIterator, slice, vec};


/// Iterator over immutable references to a store's elements.
///
/// Use the method [`CompactingStore::iter`][crate::CompactingStore::iter] or
/// the `IntoIterator` impl of `&CompactingStore` to obtain an iterator of
/// this kind.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
    count: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], count: usize) -> Self {
        Self {
            slots: slots.iter(),
            count,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        next(&mut self.count, self.slots.by_ref().map(Option::as_ref))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        next(&mut self.count, self.slots.by_ref().rev().map(Option::as_ref))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.count
    }
}

impl<T> FusedIterator for Iter<'_, T> {}


/// Iterator over mutable references to a store's elements.
///
/// Use the method [`CompactingStore::iter_mut`][crate::CompactingStore::iter_mut]
/// or the `IntoIterator` impl of `&mut CompactingStore` to obtain an
/// iterator of this kind.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
    count: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>], count: usize) -> Self {
        Self {
            slots: slots.iter_mut(),
            count,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        next(&mut self.count, self.slots.by_ref().map(Option::as_mut))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        next(&mut self.count, self.slots.by_ref().rev().map(Option::as_mut))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.count
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}


/// Iterator over owned elements of a `CompactingStore`.
///
/// Use the method `CompactingStore::into_iter` to obtain an iterator of this
/// kind.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
    count: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Option<T>>, count: usize) -> Self {
        Self {
            slots: slots.into_iter(),
            count,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        next(&mut self.count, self.slots.by_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        next(&mut self.count, self.slots.by_ref().rev())
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}


/// The actual logic for all `next()` and `next_back()` iterator methods:
/// skips empty slots until a filled one is found.
fn next<I, E>(count: &mut usize, mut slots: I) -> Option<E>
where
    I: Iterator<Item = Option<E>>,
{
    if *count == 0 {
        return None;
    }

    let elem = slots
        .find_map(|slot| slot)
        .expect("bug in CompactingStore iterator: no next filled slot");

    *count -= 1;
    Some(elem)
}
