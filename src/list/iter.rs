// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::base::LinkedList;
use super::node::Node;

/// Iterator over the elements of a [`LinkedList`].
///
/// This iterator is returned from the [`LinkedList::iter`] function.
pub struct Iter<'a, T> {
    front: *mut Node<T>,
    back: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

impl<'a, T> Iter<'a, T> {
    pub(crate) unsafe fn new(front: *mut Node<T>, back: *mut Node<T>, len: usize) -> Self {
        Self {
            front,
            back,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // The remaining count guards against crossing the other end of the iterator.
        (self.len > 0).then(|| unsafe {
            let node = self.front;
            self.front = (*node).next;
            self.len -= 1;
            Node::value(node)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        (self.len > 0).then(|| unsafe {
            let node = self.back;
            self.back = (*node).prev;
            self.len -= 1;
            Node::value(node)
        })
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Mutable iterator over the elements of a [`LinkedList`].
///
/// This iterator is returned from the [`LinkedList::iter_mut`] function.
pub struct IterMut<'a, T> {
    front: *mut Node<T>,
    back: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(crate) unsafe fn new(front: *mut Node<T>, back: *mut Node<T>, len: usize) -> Self {
        Self {
            front,
            back,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        (self.len > 0).then(|| unsafe {
            let node = self.front;
            self.front = (*node).next;
            self.len -= 1;
            Node::value_mut(node)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        (self.len > 0).then(|| unsafe {
            let node = self.back;
            self.back = (*node).prev;
            self.len -= 1;
            Node::value_mut(node)
        })
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// Owning iterator over the elements of a [`LinkedList`].
///
/// This iterator is returned from the `into_iter` function of the list.
/// Elements not consumed by the iterator are dropped together with it.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::base::verify_all_links;
    use alloc::vec::Vec;

    #[test]
    fn test_iter() {
        let mut list = LinkedList::new();

        for i in 0..10 {
            list.push_back(i);
        }

        let mut iter = list.iter();
        assert_eq!(iter.len(), 10);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.len(), 8);

        assert!(iter.clone().copied().eq(1..9));
        assert_eq!(iter.rev().copied().collect::<Vec<_>>(), (1..9).rev().collect::<Vec<_>>());
        assert_eq!(list.iter().last(), Some(&9));
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let mut list = LinkedList::new();

        for i in 0..3 {
            list.push_back(i);
        }

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_mut() {
        let mut list = LinkedList::new();

        for i in 0..5 {
            list.push_back(i);
        }

        for element in &mut list {
            *element *= 10;
        }

        if let Some(last) = list.iter_mut().next_back() {
            *last += 1;
        }

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 10, 20, 30, 41]);
        verify_all_links(&list);
    }

    #[test]
    fn test_into_iter() {
        let mut list = LinkedList::new();

        for i in 0..5 {
            list.push_back(i);
        }

        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_iterators_cross_threads() {
        fn assert_send_sync<I: Send + Sync>(_: &I) {}

        let mut list = LinkedList::from([1, 2, 3]);
        assert_send_sync(&list.iter());
        assert_send_sync(&list.iter_mut());
        assert_send_sync(&list.into_iter());
    }

    #[test]
    fn test_empty() {
        let list = LinkedList::<i32>::new();

        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
        assert_eq!((&list).into_iter().len(), 0);
        assert_eq!(list.into_iter().next(), None);
    }
}
