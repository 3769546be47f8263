// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-element construction.
//!
//! Everything in here follows the same two steps: append all elements to a list that nobody
//! else can observe yet, then publish that list in one go.
//! For a fresh list, publishing is returning it.
//! For an existing list, publishing is a [`LinkedList::swap`], which cannot fail.
//! If producing an element fails or panics in between, the partially built list is dropped
//! (freeing every node it got so far exactly once) and the caller's list remains untouched.

use super::base::LinkedList;
use super::cursor::Cursor;

impl<T> LinkedList<T> {
    /// Replaces the contents of the list with the elements of `iter`.
    ///
    /// The new contents are built into a temporary list first and then swapped in.
    /// If the iterator panics, the list keeps its previous contents.
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut temporary = iter.into_iter().collect::<Self>();
        self.swap(&mut temporary);
    }

    /// Creates a list from clones of the elements in the range from `begin` up to, but excluding,
    /// `end`.
    ///
    /// Both cursors should belong to the same list, with `end` reachable from `begin` by moving
    /// forward.
    /// Otherwise, all elements from `begin` to the end of its list are taken.
    ///
    /// ```
    /// use sentinel_list::list;
    /// use sentinel_list::LinkedList;
    ///
    /// let source = list![1, 2, 3, 4, 5];
    /// let copy = LinkedList::from_range(source.cursor_front() + 1, source.cursor_end() - 1);
    ///
    /// assert_eq!(copy, list![2, 3, 4]);
    /// ```
    pub fn from_range(begin: Cursor<'_, T>, end: Cursor<'_, T>) -> Self
    where
        T: Clone,
    {
        begin.range_to(end).cloned().collect()
    }

    /// Replaces the contents of the list with the successful elements of `iter`.
    ///
    /// If `iter` yields an error, that error is returned and the list keeps its previous
    /// contents.
    /// All elements taken from `iter` until then are dropped.
    pub fn try_assign<I, E>(&mut self, iter: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut temporary = Self::try_from_iter(iter)?;
        self.swap(&mut temporary);
        Ok(())
    }

    /// Creates a list from the successful elements of `iter`, or returns the first error
    /// yielded by `iter`.
    pub fn try_from_iter<I, E>(iter: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut list = Self::new();

        for element in iter {
            list.push_back(element?);
        }

        Ok(list)
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replaces the contents of the list with clones of the elements of `source`.
    ///
    /// If cloning any element panics, the list keeps its previous contents.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.iter().cloned());
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedList<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}
