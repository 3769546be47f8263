// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use super::node::Node;
use crate::traits::{Access, Exclusive, Shared};

/// A position inside a [`LinkedList`], pointing either at an element, at one of the two
/// sentinels, or nowhere at all (detached).
///
/// The cursor is a structural reference: it never owns the node it points to.
/// It borrows the list for `'a` instead, so the node it points to cannot be freed while the
/// cursor exists.
///
/// Navigation is identical for both access modes:
/// * [`Cursor`] (`Cursor<'a, T, Shared>`) is `Copy` and hands out references living for `'a`.
/// * [`CursorMut`] (`Cursor<'a, T, Exclusive>`) additionally provides mutable access to the
///   current element and can be turned into a [`Cursor`], but not the other way round.
///
/// Moving forward from the last element lands on the tail sentinel ([`is_end`]), moving
/// backward from the first element lands on the head sentinel ([`is_rend`]).
/// Moving further than that detaches the cursor.
///
/// Both access modes share one type definition, so a cursor is invariant in `T` even in
/// [`Shared`] mode.
/// A cursor over a `LinkedList<&'static str>` therefore stays a `Cursor<'a, &'static str>` and
/// cannot be passed where a cursor over shorter-lived elements is expected:
///
/// ```compile_fail
/// use sentinel_list::list::Cursor;
///
/// fn shorten<'a>(cursor: Cursor<'a, &'static str>) -> Cursor<'a, &'a str> {
///     cursor
/// }
/// ```
///
/// Shorten the elements instead, e.g. `cursor.current().copied()` yields an
/// `Option<&'static str>` that coerces freely.
///
/// [`LinkedList`]: super::LinkedList
/// [`is_end`]: Cursor::is_end
/// [`is_rend`]: Cursor::is_rend
pub struct Cursor<'a, T, M: Access = Shared> {
    node: *mut Node<T>,
    head: *mut Node<T>,
    tail: *mut Node<T>,
    marker: PhantomData<(&'a mut T, M)>,
}

/// A [`Cursor`] with read-write access to the current element.
pub type CursorMut<'a, T> = Cursor<'a, T, Exclusive>;

unsafe impl<'a, T: Sync> Send for Cursor<'a, T, Shared> {}
unsafe impl<'a, T: Sync> Sync for Cursor<'a, T, Shared> {}
unsafe impl<'a, T: Send> Send for Cursor<'a, T, Exclusive> {}
unsafe impl<'a, T: Sync> Sync for Cursor<'a, T, Exclusive> {}

impl<'a, T, M: Access> Cursor<'a, T, M> {
    /// Creates a cursor at `node` of the list bounded by `head` and `tail`.
    ///
    /// The caller must hold the appropriate borrow of that list for `'a`.
    pub(crate) unsafe fn new(node: *mut Node<T>, head: *mut Node<T>, tail: *mut Node<T>) -> Self {
        Self {
            node,
            head,
            tail,
            marker: PhantomData,
        }
    }

    /// Moves the cursor forward by `n` positions, one node at a time.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn advance(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.move_next();
        }

        self
    }

    /// Counts the single forward steps needed to get from `begin` to this cursor.
    ///
    /// Returns `None` if this cursor cannot be reached by moving `begin` forward, i.e. the walk
    /// leaves the list past the tail sentinel first, or if this cursor is detached.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn distance_from<N: Access>(&self, begin: &Cursor<'_, T, N>) -> Option<usize> {
        if self.is_detached() {
            return None;
        }

        let mut current = begin.node;
        let mut steps = 0;

        while current != self.node {
            if current.is_null() {
                return None;
            }

            current = unsafe { (*current).next };
            steps += 1;
        }

        Some(steps)
    }

    /// Returns `true` if the cursor points nowhere.
    ///
    /// This is the case for a default-constructed cursor and for a cursor that has been moved
    /// beyond one of the sentinels.
    pub fn is_detached(&self) -> bool {
        self.node.is_null()
    }

    /// Returns `true` if the cursor is at the tail sentinel, one past the last element.
    pub fn is_end(&self) -> bool {
        !self.is_detached() && self.node == self.tail
    }

    /// Returns `true` if the cursor is at the head sentinel, one before the first element.
    pub fn is_rend(&self) -> bool {
        !self.is_detached() && self.node == self.head
    }

    /// Moves the cursor to the next node and returns it for chaining.
    ///
    /// The cursor must not be detached.
    pub fn move_next(&mut self) -> &mut Self {
        debug_assert!(!self.is_detached(), "cannot move a detached cursor");

        if !self.is_detached() {
            self.node = unsafe { (*self.node).next };
        }

        self
    }

    /// Moves the cursor to the previous node and returns it for chaining.
    ///
    /// The cursor must not be detached.
    pub fn move_prev(&mut self) -> &mut Self {
        debug_assert!(!self.is_detached(), "cannot move a detached cursor");

        if !self.is_detached() {
            self.node = unsafe { (*self.node).prev };
        }

        self
    }

    /// Moves the cursor backward by `n` positions, one node at a time.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn retreat(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.move_prev();
        }

        self
    }

    /// Returns the node of the current element, or `None` at a sentinel or when detached.
    fn element_node(&self) -> Option<*mut Node<T>> {
        (!self.is_detached() && self.node != self.head && self.node != self.tail)
            .then(|| self.node)
    }
}

impl<'a, T> Cursor<'a, T, Shared> {
    /// Returns a reference to the current element, or `None` at a sentinel or when detached.
    pub fn current(&self) -> Option<&'a T> {
        self.element_node().map(|node| unsafe { Node::value(node) })
    }

    /// Moves the cursor to the next node and returns the position it had before.
    pub fn post_next(&mut self) -> Self {
        let old = *self;
        self.move_next();
        old
    }

    /// Moves the cursor to the previous node and returns the position it had before.
    pub fn post_prev(&mut self) -> Self {
        let old = *self;
        self.move_prev();
        old
    }

    /// Returns an iterator over the elements from this cursor up to, but excluding, `end`.
    ///
    /// Sentinels are skipped.
    /// The iteration also stops if it leaves the list before reaching `end`.
    pub fn range_to(self, end: Self) -> Range<'a, T> {
        Range { current: self, end }
    }
}

impl<'a, T> Cursor<'a, T, Exclusive> {
    /// Returns a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        unsafe { Cursor::new(self.node, self.head, self.tail) }
    }

    /// Returns a reference to the current element, or `None` at a sentinel or when detached.
    pub fn current(&self) -> Option<&T> {
        self.element_node().map(|node| unsafe { Node::value(node) })
    }

    /// Returns a mutable reference to the current element, or `None` at a sentinel or when
    /// detached.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.element_node()
            .map(|node| unsafe { Node::value_mut(node) })
    }
}

impl<'a, T> Clone for Cursor<'a, T, Shared> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T, Shared> {}

impl<'a, T, M: Access> Default for Cursor<'a, T, M> {
    /// Creates a detached cursor, which must neither be dereferenced nor moved.
    fn default() -> Self {
        unsafe { Self::new(ptr::null_mut(), ptr::null_mut(), ptr::null_mut()) }
    }
}

impl<'a, T: fmt::Debug, M: Access> fmt::Debug for Cursor<'a, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position: &dyn fmt::Debug = if self.is_detached() {
            &"detached"
        } else if self.is_rend() {
            &"head sentinel"
        } else if self.is_end() {
            &"tail sentinel"
        } else {
            unsafe { Node::<T>::value(self.node) }
        };

        f.debug_tuple("Cursor").field(position).finish()
    }
}

impl<'a, T> From<Cursor<'a, T, Exclusive>> for Cursor<'a, T, Shared> {
    fn from(cursor: Cursor<'a, T, Exclusive>) -> Self {
        unsafe { Self::new(cursor.node, cursor.head, cursor.tail) }
    }
}

impl<'a, 'b, T, M: Access, N: Access> PartialEq<Cursor<'b, T, N>> for Cursor<'a, T, M> {
    /// Two cursors are equal if they point to the very same node.
    fn eq(&self, other: &Cursor<'b, T, N>) -> bool {
        self.node == other.node
    }
}

impl<'a, T, M: Access> Eq for Cursor<'a, T, M> {}

impl<'a, 'b, T, M: Access, N: Access> PartialOrd<Cursor<'b, T, N>> for Cursor<'a, T, M> {
    /// Compares the addresses of the nodes.
    ///
    /// This order is stable, but unrelated to the order of the elements in the list.
    fn partial_cmp(&self, other: &Cursor<'b, T, N>) -> Option<Ordering> {
        Some(self.node.cmp(&other.node))
    }
}

impl<'a, T, M: Access> Ord for Cursor<'a, T, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node.cmp(&other.node)
    }
}

impl<'a, T> Add<usize> for Cursor<'a, T, Shared> {
    type Output = Self;

    fn add(mut self, n: usize) -> Self {
        self.advance(n);
        self
    }
}

impl<'a, T> Sub<usize> for Cursor<'a, T, Shared> {
    type Output = Self;

    fn sub(mut self, n: usize) -> Self {
        self.retreat(n);
        self
    }
}

impl<'a, T, M: Access> AddAssign<usize> for Cursor<'a, T, M> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<'a, T, M: Access> SubAssign<usize> for Cursor<'a, T, M> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

/// Iterator over the elements between two cursors.
///
/// This iterator is returned from the [`Cursor::range_to`] function.
pub struct Range<'a, T> {
    current: Cursor<'a, T>,
    end: Cursor<'a, T>,
}

impl<'a, T> Range<'a, T> {
    fn terminate(&mut self) {
        self.current = self.end;
    }
}

impl<'a, T> Clone for Range<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            end: self.end,
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while self.current != self.end {
            if self.current.is_detached() {
                // We have left the list without meeting `end` and must not iterate any further.
                self.terminate();
                break;
            }

            let position = self.current.post_next();
            if let Some(element) = position.current() {
                return Some(element);
            }
        }

        None
    }
}

impl<'a, T> FusedIterator for Range<'a, T> {}
