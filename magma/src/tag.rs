/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Magma identity.
//!
//! Every value type names the family of interchangeable
//! representations it belongs to through [`Tagged::Tag`]. Dispatch
//! happens on the tag, never on the concrete representation, so a
//! single-symbol value and a general symbol sequence can both be
//! hashed, compared, and converted as members of the same magma.
//!
//! References and boxes are transparent: `&T`, `&mut T` and `Box<T>`
//! carry exactly the tag of `T`.

use std::any::TypeId;

/// A type that belongs to a magma.
///
/// The tag is a compile-time label; two types with the same `Tag` are
/// interchangeable representations of one magma.
///
/// ```
/// use magma::Tagged;
/// use magma::same_magma;
///
/// assert!(same_magma::<&i64, Box<i64>>());
/// assert!(!same_magma::<i64, i32>());
/// ```
pub trait Tagged {
    /// The magma this type belongs to.
    type Tag: 'static;
}

impl<T: Tagged + ?Sized> Tagged for &T {
    type Tag = T::Tag;
}

impl<T: Tagged + ?Sized> Tagged for &mut T {
    type Tag = T::Tag;
}

impl<T: Tagged + ?Sized> Tagged for Box<T> {
    type Tag = T::Tag;
}

/// The tag of `T`, as a runtime value.
pub fn tag_of<T: Tagged + ?Sized>() -> TypeId {
    TypeId::of::<T::Tag>()
}

/// Human-readable name of `T`'s tag, for diagnostics.
pub fn tag_name<T: Tagged + ?Sized>() -> &'static str {
    std::any::type_name::<T::Tag>()
}

/// Whether `A` and `B` belong to the same magma.
pub fn same_magma<A: Tagged + ?Sized, B: Tagged + ?Sized>() -> bool {
    tag_of::<A>() == tag_of::<B>()
}
