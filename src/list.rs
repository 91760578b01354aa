use alloc::boxed::Box;
use core::cmp::Ordering;

use crate::error::Result;

/// The operation set of an ordered, index-addressable list.
///
/// Positional operations address elements by zero-based index. Operations
/// that search by value use `PartialEq`; to store absent elements, use an
/// `Option` element type and search for `None`.
pub trait List<T> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the list contains an element equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to `value`,
    /// or `None` if there is no such element.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns a snapshot of the elements in order, independent of the list.
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Appends `value` to the end of the list. Always returns `true`.
    fn add(&mut self, value: T) -> bool;

    /// Inserts `value` at `index`, shifting later elements to the right.
    ///
    /// # Errors
    ///
    /// Returns `ListError::BoundaryFault` if `index > len()`.
    fn add_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes the first element equal to `value`.
    /// Returns whether an element was removed.
    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes and returns the element at `index`, shifting later elements to the left.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index >= len()`.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    fn clear(&mut self);

    /// Sorts the elements in place with the given comparator.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}
