// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Prevents foreign implementations of [`Access`](crate::Access).
pub trait Sealed {}
