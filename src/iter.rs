use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::array_list::DynamicArrayList;

/// Iterator over references to the elements of a `DynamicArrayList`
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

// Manual impl: cloning the iterator must not require `T: Clone`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynamicArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the elements of a `DynamicArrayList`
pub struct IntoIter<T> {
    slots: alloc::vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: Box<[Option<T>]>, length: usize) -> Self {
        let mut slots = buffer.into_vec();
        slots.truncate(length);
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
