// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use super::base::LinkedList;

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    /// Two lists are equal if they have the same length and pairwise equal elements.
    ///
    /// Lists of different lengths are rejected without looking at any element, and the
    /// comparison stops at the first mismatching pair.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);

        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// Walks to the element at position `index`.
    ///
    /// This operation computes in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    /// Walks to the element at position `index`.
    ///
    /// This operation computes in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();

        match self.get_mut(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}
