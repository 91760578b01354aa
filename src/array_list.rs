use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;

use crate::error::{ListError, Result};
use crate::iter::{IntoIter, Iter};
use crate::list::List;

/// Capacity of a list created with `DynamicArrayList::new`
pub const DEFAULT_CAPACITY: usize = 10;

/// A resizable list backed by a single owned buffer
///
/// Slots `[0, len)` hold the elements in order, slots `[len, capacity)` are
/// always `None`. The buffer grows by half of its capacity when full and only
/// shrinks on an explicit `trim_to_size`.
#[derive(Clone)]
pub struct DynamicArrayList<T> {
    buffer: Box<[Option<T>]>,
    length: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> DynamicArrayList<T> {
    /// Creates an empty list with the default capacity (10).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: empty_slots(DEFAULT_CAPACITY),
            length: 0,
        }
    }

    /// Creates an empty list with the given initial capacity.
    ///
    /// A capacity of 0 is allowed; the first insertion grows the buffer.
    ///
    /// # Errors
    ///
    /// Returns `ListError::InvalidArgument` if `initial_capacity` is negative.
    pub fn with_capacity(initial_capacity: isize) -> Result<Self> {
        let capacity = usize::try_from(initial_capacity).map_err(|_| ListError::InvalidArgument {
            capacity: initial_capacity,
        })?;
        Ok(Self {
            buffer: empty_slots(capacity),
            length: 0,
        })
    }

    /// Number of allocated slots.
    ///
    /// Exposed for inspecting the growth policy; not part of the `List` operations.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Grows the buffer so that it holds at least `min_capacity` elements.
    ///
    /// The new capacity is the larger of `min_capacity` and 1.5 times the
    /// current capacity. Does nothing if the buffer is already large enough.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        let capacity = self.capacity();
        if capacity < min_capacity {
            let grown = capacity.saturating_add(capacity / 2);
            self.reallocate(grown.max(min_capacity));
        }
    }

    /// Shrinks the buffer to exactly the number of elements.
    pub fn trim_to_size(&mut self) {
        if self.length < self.capacity() {
            self.reallocate(self.length);
        }
    }

    /// Sorts the elements in their natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Returns an iterator over the elements in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.occupied())
    }

    // Moves the elements into a fresh buffer; `new_capacity` must be >= length.
    fn reallocate(&mut self, new_capacity: usize) {
        let mut buffer = empty_slots(new_capacity);
        for (dst, src) in buffer.iter_mut().zip(self.occupied_mut()) {
            *dst = src.take();
        }
        self.buffer = buffer;
    }

    fn occupied(&self) -> &[Option<T>] {
        &self.buffer[..self.length]
    }

    fn occupied_mut(&mut self) -> &mut [Option<T>] {
        &mut self.buffer[..self.length]
    }

    // Caller guarantees `index < length`.
    #[allow(clippy::expect_used)]
    fn take_at(&mut self, index: usize) -> T {
        let slots = &mut self.buffer[index..self.length];
        let removed = slots[0].take().expect("Slots below length are occupied");
        // The emptied slot travels to the end of the occupied range
        slots.rotate_left(1);
        self.length -= 1;
        removed
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            length: self.length,
        }
    }
}

impl<T> List<T> for DynamicArrayList<T> {
    fn len(&self) -> usize {
        self.length
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        // For `Option` elements, `None` compares by variant only
        self.iter().position(|element| element == value)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.occupied()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn add(&mut self, value: T) -> bool {
        self.ensure_capacity(self.length + 1);
        self.buffer[self.length] = Some(value);
        self.length += 1;
        true
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.length {
            return Err(ListError::BoundaryFault {
                index,
                length: self.length,
            });
        }
        self.ensure_capacity(self.length + 1);
        let slots = &mut self.buffer[index..=self.length];
        slots.rotate_right(1);
        slots[0] = Some(value);
        self.length += 1;
        Ok(())
    }

    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.take_at(index);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.length {
            return Err(self.out_of_range(index));
        }
        Ok(self.take_at(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let length = self.length;
        match self.occupied_mut().get_mut(index).and_then(Option::as_mut) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(ListError::IndexOutOfRange { index, length }),
        }
    }

    fn clear(&mut self) {
        self.occupied_mut().fill_with(|| None);
        self.length = 0;
    }

    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.occupied_mut().sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        });
    }
}

impl<T> Default for DynamicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynamicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for DynamicArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DynamicArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> IntoIterator for DynamicArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buffer, self.length)
    }
}
