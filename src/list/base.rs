// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::marker::PhantomData;
use core::mem;

use alloc::boxed::Box;
use moveit::new::{New, TryNew};

use super::cursor::{Cursor, CursorMut};
use super::iter::{Iter, IterMut};
use super::node::Node;

/// A doubly linked list bounded by a head sentinel and a tail sentinel.
///
/// Both sentinels are allocated in [`LinkedList::new`] and live until the list is dropped.
/// They never hold a value.
/// Every element lives in its own heap-allocated node, which the list owns exclusively.
///
/// See the [module-level documentation](crate::list) for more details.
pub struct LinkedList<T> {
    pub(crate) head: *mut Node<T>,
    pub(crate) tail: *mut Node<T>,
    pub(crate) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates an empty list, allocating and cross-linking its two sentinels.
    pub fn new() -> Self {
        let head = Node::sentinel();
        let tail = Node::sentinel();

        unsafe {
            (*head).next = tail;
            (*tail).prev = head;
        }

        Self {
            head,
            tail,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Provides a reference to the last element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        (!self.is_empty()).then(|| unsafe { Node::value((*self.tail).prev) })
    }

    /// Provides a mutable reference to the last element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        (!self.is_empty()).then(|| unsafe { Node::value_mut((*self.tail).prev) })
    }

    /// Removes all elements from the list, dropping their values and deallocating their nodes.
    ///
    /// Nodes are removed from the front, one at a time.
    /// Each node is unlinked before its value is dropped.
    /// If dropping an element panics, the list stays consistent and keeps the elements not
    /// reached yet.
    /// Dropping the list later drops them as well, and so does a panic in the middle of
    /// dropping the list itself.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            unsafe {
                let first = (*self.head).next;
                drop(self.unlink(first).into_value());
            }
        }
    }

    /// Returns a read-only cursor at the first element.
    ///
    /// For an empty list, this is the same position as [`LinkedList::cursor_end`].
    pub fn cursor_front(&self) -> Cursor<T> {
        unsafe { Cursor::new((*self.head).next, self.head, self.tail) }
    }

    /// Returns a read-write cursor at the first element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<T> {
        unsafe { CursorMut::new((*self.head).next, self.head, self.tail) }
    }

    /// Returns a read-only cursor at the tail sentinel, one past the last element.
    pub fn cursor_end(&self) -> Cursor<T> {
        unsafe { Cursor::new(self.tail, self.head, self.tail) }
    }

    /// Returns a read-write cursor at the tail sentinel, one past the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<T> {
        unsafe { CursorMut::new(self.tail, self.head, self.tail) }
    }

    /// Appends an element constructed in place by `n` to the back of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn emplace_back<N>(&mut self, n: N)
    where
        N: New<Output = T>,
        T: Unpin,
    {
        unsafe {
            let node = Node::emplace((*self.tail).prev, n, self.tail);
            self.link(node);
        }
    }

    /// Prepends an element constructed in place by `n` to the front of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn emplace_front<N>(&mut self, n: N)
    where
        N: New<Output = T>,
        T: Unpin,
    {
        unsafe {
            let node = Node::emplace(self.head, n, (*self.head).next);
            self.link(node);
        }
    }

    /// Provides a reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        (!self.is_empty()).then(|| unsafe { Node::value((*self.head).next) })
    }

    /// Provides a mutable reference to the first element, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        (!self.is_empty()).then(|| unsafe { Node::value_mut((*self.head).next) })
    }

    /// Returns a reference to the element at position `index`, or `None` if `index` is out of
    /// bounds.
    ///
    /// The list has no random access, so this walks `index` nodes from the front.
    /// This operation computes in *O*(*n*) time.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a mutable reference to the element at position `index`, or `None` if `index` is
    /// out of bounds.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Returns `true` if the list contains no elements, i.e. the head sentinel is directly
    /// followed by the tail sentinel.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator yielding references to each element of the list.
    pub fn iter(&self) -> Iter<T> {
        unsafe { Iter::new((*self.head).next, (*self.tail).prev, self.len) }
    }

    /// Returns an iterator yielding mutable references to each element of the list.
    pub fn iter_mut(&mut self) -> IterMut<T> {
        unsafe { IterMut::new((*self.head).next, (*self.tail).prev, self.len) }
    }

    /// Returns the number of elements in the list.
    ///
    /// The count is maintained on every insertion and removal, so this operation computes in
    /// *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Makes the neighbors of a freshly allocated node point to it and accounts for it.
    unsafe fn link(&mut self, node: *mut Node<T>) {
        Node::link(node);
        self.len += 1;
    }

    /// Removes the last element from the list and returns it, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_back(&mut self) -> Option<T> {
        (!self.is_empty()).then(|| unsafe {
            let last = (*self.tail).prev;
            self.unlink(last).into_value()
        })
    }

    /// Removes the first element from the list and returns it, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<T> {
        (!self.is_empty()).then(|| unsafe {
            let first = (*self.head).next;
            self.unlink(first).into_value()
        })
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_back(&mut self, value: T) {
        unsafe {
            let node = Node::new((*self.tail).prev, value, self.tail);
            self.link(node);
        }
    }

    /// Prepends an element to the front of the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, value: T) {
        unsafe {
            let node = Node::new(self.head, value, (*self.head).next);
            self.link(node);
        }
    }

    /// Retains only the elements specified by the predicate, passing a mutable reference to it.
    ///
    /// In other words, remove all elements `e` for which `f(&mut e)` returns `false`.
    /// This method operates in place, visiting each element exactly once in the original order,
    /// and preserves the order of the retained elements.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut current = unsafe { (*self.head).next };

        while current != self.tail {
            unsafe {
                let next = (*current).next;

                if !f(Node::value_mut(current)) {
                    drop(self.unlink(current).into_value());
                }

                current = next;
            }
        }
    }

    /// Exchanges the contents of two lists.
    ///
    /// Only the sentinel pointers and the counts are swapped.
    /// No element is moved, copied or dropped, and this operation cannot fail.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.tail, &mut other.tail);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Appends an element constructed in place by the fallible initializer `n` to the back of
    /// the list.
    ///
    /// If `n` fails, its error is returned and the list is left exactly as it was.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn try_emplace_back<N>(&mut self, n: N) -> Result<(), N::Error>
    where
        N: TryNew<Output = T>,
        T: Unpin,
    {
        unsafe {
            let node = Node::try_emplace((*self.tail).prev, n, self.tail)?;
            self.link(node);
        }

        Ok(())
    }

    /// Prepends an element constructed in place by the fallible initializer `n` to the front of
    /// the list.
    ///
    /// If `n` fails, its error is returned and the list is left exactly as it was.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn try_emplace_front<N>(&mut self, n: N) -> Result<(), N::Error>
    where
        N: TryNew<Output = T>,
        T: Unpin,
    {
        unsafe {
            let node = Node::try_emplace(self.head, n, (*self.head).next)?;
            self.link(node);
        }

        Ok(())
    }

    unsafe fn unlink(&mut self, node: *mut Node<T>) -> Box<Node<T>> {
        debug_assert!(node != self.head && node != self.tail);
        self.len -= 1;
        Node::unlink(node)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        struct DropGuard<'a, T>(&'a mut LinkedList<T>);

        impl<'a, T> Drop for DropGuard<'a, T> {
            fn drop(&mut self) {
                // Only has elements left when one of them panicked in its `Drop`.
                // Another panic from here aborts.
                self.0.clear();

                unsafe {
                    Node::free_sentinel(self.0.head);
                    Node::free_sentinel(self.0.tail);
                }
            }
        }

        let guard = DropGuard(self);
        guard.0.clear();
    }
}

/// Walks the list in both directions and checks that every `next` link is mirrored by a `prev`
/// link, that both walks meet the opposite sentinel, and that `len` matches the node count.
#[cfg(test)]
pub(crate) fn verify_all_links<T>(list: &LinkedList<T>) {
    use alloc::vec::Vec;

    // Traverse the list in forward direction and collect all nodes.
    let mut forward_nodes = Vec::<*mut Node<T>>::new();
    let mut current = unsafe { (*list.head).next };

    while current != list.tail {
        assert!(!current.is_null(), "forward walk left the chain");

        // Verify that the previous node is referenced by this node's `prev`.
        let expected_prev = forward_nodes.last().copied().unwrap_or(list.head);
        assert_eq!(expected_prev, unsafe { (*current).prev });

        forward_nodes.push(current);
        current = unsafe { (*current).next };
    }

    // Traverse the list in backward direction and collect all nodes.
    let mut backward_nodes = Vec::<*mut Node<T>>::with_capacity(forward_nodes.len());
    current = unsafe { (*list.tail).prev };

    while current != list.head {
        assert!(!current.is_null(), "backward walk left the chain");

        // Verify that the previous node is referenced by this node's `next`.
        let expected_next = backward_nodes.last().copied().unwrap_or(list.tail);
        assert_eq!(expected_next, unsafe { (*current).next });

        backward_nodes.push(current);
        current = unsafe { (*current).prev };
    }

    // The outer links of the sentinels must never be set.
    unsafe {
        assert!((*list.head).prev.is_null());
        assert!((*list.tail).next.is_null());
    }

    // Verify that `backward_nodes` is the exact reverse of `forward_nodes`.
    assert_eq!(forward_nodes.len(), list.len);
    assert_eq!(forward_nodes.len(), backward_nodes.len());

    for (fe, be) in forward_nodes.iter().zip(backward_nodes.iter().rev()) {
        assert_eq!(fe, be);
    }
}
