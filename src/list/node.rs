// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::mem::MaybeUninit;
use core::pin::Pin;
use core::ptr;

use alloc::boxed::Box;
use moveit::new::{New, TryNew};

/// A single heap-allocated link of the chain.
///
/// `prev` and `next` are structural links only: they never own the node they point to.
/// Ownership of every node lies with the [`LinkedList`] that allocated it.
///
/// Sentinels are nodes whose `value` is never initialized.
/// The outer links of the sentinels (`prev` of the head sentinel, `next` of the tail sentinel)
/// stay null for the whole lifetime of a list.
///
/// [`LinkedList`]: super::LinkedList
pub(crate) struct Node<T> {
    pub(crate) prev: *mut Node<T>,
    pub(crate) next: *mut Node<T>,
    pub(crate) value: MaybeUninit<T>,
}

impl<T> Node<T> {
    /// Allocates a value-less sentinel node with null links.
    pub(crate) fn sentinel() -> *mut Self {
        Box::into_raw(Box::new(Self {
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
            value: MaybeUninit::uninit(),
        }))
    }

    /// Allocates a node holding `value` between `prev` and `next`.
    ///
    /// The neighbors are not touched yet, so the node is unreachable until [`Node::link`] is called.
    pub(crate) fn new(prev: *mut Self, value: T, next: *mut Self) -> *mut Self {
        Box::into_raw(Box::new(Self {
            prev,
            next,
            value: MaybeUninit::new(value),
        }))
    }

    /// Allocates a node between `prev` and `next` and constructs its value in place.
    ///
    /// The initializer writes directly into the heap allocation of the node.
    pub(crate) fn emplace<N>(prev: *mut Self, n: N, next: *mut Self) -> *mut Self
    where
        N: New<Output = T>,
        T: Unpin,
    {
        let mut node = Self::unfilled(prev, next);
        unsafe { n.new(Pin::new_unchecked(&mut node.value)) };
        Box::into_raw(node)
    }

    /// Fallible variant of [`Node::emplace`].
    ///
    /// If the initializer fails, the allocation is released again and the error is returned.
    /// Nothing outside the new node has been modified at that point.
    pub(crate) fn try_emplace<N>(prev: *mut Self, n: N, next: *mut Self) -> Result<*mut Self, N::Error>
    where
        N: TryNew<Output = T>,
        T: Unpin,
    {
        let mut node = Self::unfilled(prev, next);
        unsafe { n.try_new(Pin::new_unchecked(&mut node.value))? };
        Ok(Box::into_raw(node))
    }

    fn unfilled(prev: *mut Self, next: *mut Self) -> Box<Self> {
        Box::new(Self {
            prev,
            next,
            value: MaybeUninit::uninit(),
        })
    }

    /// Makes the neighbors recorded in `node` point to `node`.
    pub(crate) unsafe fn link(node: *mut Self) {
        (*(*node).prev).next = node;
        (*(*node).next).prev = node;
    }

    /// Removes `node` from the chain by connecting its neighbors with each other and hands the
    /// allocation back to the caller.
    ///
    /// The value of the node is still initialized and must be taken out via [`Node::into_value`].
    pub(crate) unsafe fn unlink(node: *mut Self) -> Box<Self> {
        let old_prev = (*node).prev;
        let old_next = (*node).next;
        (*old_next).prev = old_prev;
        (*old_prev).next = old_next;

        Box::from_raw(node)
    }

    /// Frees a sentinel allocated by [`Node::sentinel`].
    pub(crate) unsafe fn free_sentinel(node: *mut Self) {
        drop(Box::from_raw(node));
    }

    pub(crate) unsafe fn value<'a>(node: *const Self) -> &'a T {
        &*(*node).value.as_ptr()
    }

    pub(crate) unsafe fn value_mut<'a>(node: *mut Self) -> &'a mut T {
        &mut *(*node).value.as_mut_ptr()
    }

    /// Moves the value out of an unlinked real node and frees the node.
    pub(crate) unsafe fn into_value(self: Box<Self>) -> T {
        let node = *self;
        node.value.assume_init()
    }
}
