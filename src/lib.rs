// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A doubly linked list bounded by two permanently allocated sentinel nodes.
//!
//! [`LinkedList`] owns every node it allocates, including a value-less head sentinel and a
//! value-less tail sentinel.
//! The tail sentinel doubles as the canonical "end" position of the list, which keeps insertion
//! and cursor navigation free of special cases for the empty list.
//!
//! Positions inside a list are expressed through [`Cursor`] (read-only) and [`CursorMut`]
//! (read-write), two flavors of one cursor type that only differ in their access mode.
//!
//! Multi-step constructions (from a range, from a literal sequence, from fallible initializers)
//! are built into a temporary list and published through a single [`LinkedList::swap`],
//! so a failure halfway through never leaves a half-built list behind.
//!
//! ```
//! use sentinel_list::list;
//!
//! let mut numbers = list![1, 2, 3];
//! numbers.push_front(0);
//! numbers.push_back(4);
//!
//! assert_eq!(numbers.len(), 5);
//! assert_eq!(numbers[2], 2);
//! assert!(numbers.iter().copied().eq(0..=4));
//! ```
//!
//! [`Cursor`]: crate::list::Cursor
//! [`CursorMut`]: crate::list::CursorMut

#![no_std]

extern crate alloc;

// `catch_unwind` and `Rc` for the instrumented element types of the tests.
#[cfg(test)]
extern crate std;

pub mod list;
mod private;
mod traits;

pub use list::LinkedList;
pub use traits::*;

/// Creates a [`LinkedList`] containing the given elements in order.
///
/// Like every multi-element construction, the list is built into a temporary first and only
/// handed out once every element has been appended.
///
/// ```
/// use sentinel_list::list;
///
/// let words = list!["alpha", "beta"];
/// assert_eq!(words.front(), Some(&"alpha"));
/// assert_eq!(words.back(), Some(&"beta"));
///
/// let empty: sentinel_list::LinkedList<u8> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::LinkedList::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::list::LinkedList::from([$($element),+])
    };
}
