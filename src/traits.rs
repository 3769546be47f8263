// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::private::Sealed;

/// Designates an empty enum as the access mode of a [`Cursor`].
///
/// A cursor navigates the same way regardless of its mode.
/// The mode only decides whether the element under the cursor can be borrowed mutably
/// ([`Exclusive`]) or whether the cursor can be freely copied ([`Shared`]).
///
/// This trait is sealed and implemented by exactly these two modes.
///
/// [`Cursor`]: crate::list::Cursor
pub trait Access: Sealed {}

/// Read-only access mode.
///
/// Cursors of this mode are `Copy` and hand out shared references that live as long as the
/// borrow of the list.
pub enum Shared {}
impl Access for Shared {}
impl Sealed for Shared {}

/// Read-write access mode.
///
/// Cursors of this mode hold the exclusive borrow of their list and cannot be copied, but can be
/// turned into a [`Shared`] cursor at the same position.
pub enum Exclusive {}
impl Access for Exclusive {}
impl Sealed for Exclusive {}
