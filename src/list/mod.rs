// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A doubly linked list bounded by a head sentinel and a tail sentinel.
//!
//! Every [`LinkedList`] allocates two value-less sentinel nodes when it is created and frees them
//! when it is dropped.
//! Elements are stored in individually boxed nodes between them:
//!
//! ```text
//!  head sentinel <-> element 0 <-> element 1 <-> ... <-> tail sentinel
//! ```
//!
//! The list is empty if the head sentinel is directly followed by the tail sentinel.
//! As the sentinels are always present, insertion at either end never needs to special-case
//! an empty list, and the tail sentinel serves as the "end" position for cursors.
//!
//! Positions are expressed through [`Cursor`] and [`CursorMut`]:
//!
//! ```
//! use sentinel_list::list;
//!
//! let mut list = list![1, 2, 3];
//!
//! let begin = list.cursor_front();
//! let end = list.cursor_end();
//! assert_eq!(end.distance_from(&begin), Some(3));
//! assert_eq!((begin + 1).current(), Some(&2));
//!
//! let mut cursor = list.cursor_end_mut();
//! cursor.move_prev();
//! *cursor.current_mut().unwrap() = 30;
//! assert_eq!(list.back(), Some(&30));
//! ```
//!
//! Elements can also be constructed in place inside their node with the initializers of the
//! [`moveit`] crate.
//! A fallible initializer ([`TryNew`]) that fails leaves the list exactly as it was:
//!
//! ```
//! use moveit::new;
//! use sentinel_list::LinkedList;
//!
//! let mut list = LinkedList::<String>::new();
//! list.emplace_back(new::of(String::from("first")));
//!
//! let result: Result<(), &str> = list.try_emplace_back(new::try_by(|| Ok(String::from("second"))));
//! assert!(result.is_ok());
//!
//! let result = list.try_emplace_front(new::try_by(|| Err::<String, _>("no memory left")));
//! assert_eq!(result, Err("no memory left"));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! [`TryNew`]: moveit::new::TryNew

mod base;
mod commit;
mod cursor;
mod impls;
mod iter;
mod node;

pub use base::*;
pub use cursor::*;
pub use iter::*;
