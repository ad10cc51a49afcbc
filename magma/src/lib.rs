/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Algebraic structures as explicit capabilities, and a checker that
//! holds implementations to the laws they claim.
//!
//! A value type joins a magma by implementing [`Magma`] (membership
//! and equality, plus optional order, reversal and printing). For
//! each binary operation it supports ([`Multiply`], [`Add`],
//! [`Choose`]) it implements [`Implements<Op>`], declaring identity,
//! annihilator, inverses and the [`Markers`] for the laws it claims.
//! Absent capabilities are `None`; generic code asks instead of
//! assuming.
//!
//! # Quick Start
//!
//! ```rust
//! use magma::Add;
//! use magma::Checker;
//! use magma::Direction;
//! use magma::Multiply;
//!
//! assert_eq!(magma::multiply(&6i64, &7i64), 42);
//! assert!(magma::property::is_semiring::<i64, Multiply, Add>(Direction::Either));
//!
//! // Exercise every claimed law on a handful of examples.
//! let report = Checker::default()
//!     .check_semiring::<i64, Multiply, Add>(Direction::Either, &[-2, -1, 0, 1, 2]);
//! assert!(report.success(), "{report}");
//! ```
//!
//! # Core Concepts
//!
//! - **Tag**: the magma a type belongs to ([`Tagged`]). Narrow and
//!   general representations of one magma share a tag; references
//!   and boxes are transparent.
//!
//! - **Registry**: [`Magma`], [`Implements`] and [`Ordered`], with
//!   free functions ([`multiply`], [`divide`], [`one`], ...) and
//!   capability queries ([`has_identity`], [`has_inverse`], ...).
//!
//! - **Property predicates** ([`property`]): associativity,
//!   commutativity, monoid, distributivity, semiring, as boolean
//!   functions of types.
//!
//! - **Checker** ([`Checker`]): exercises the laws on example values
//!   and records the outcome per property in a [`Checklist`].
//!
//! # Provided Types
//!
//! - `i32`, `i64`: wrapping integer semiring.
//! - `f64`: approximate real semiring; division by zero is undefined.
//! - `bool`: `&&`/`||` semiring.
//! - [`Max<T>`], [`Min<T>`]: order-driven `choose`.
//! - [`Sequence<S>`], [`Symbol<S>`]: concatenation and longest common
//!   prefix, a left semiring.
//! - [`LogFloat`]: log-domain non-negative reals.
//! - [`Product<A, B>`]: componentwise pairs.

mod check;
mod checklist;
mod config;
mod error;
mod log_float;
mod operation;
mod primitives;
mod product;
pub mod property;
mod registry;
mod sequence;
#[cfg(test)]
mod strategy;
mod tag;

// Re-export the checker
pub use check::Checker;
pub use check::MagmaChecklists;
pub use check::PairChecklists;
pub use check::laws::DistributivityProperty;
pub use check::laws::EqualityProperty;
pub use check::laws::HashProperty;
pub use check::laws::MagmaProperty;
pub use check::laws::OperationProperty;
pub use checklist::Checklist;
pub use checklist::Failure;
pub use checklist::Property;
pub use checklist::PropertyState;
pub use checklist::Reporter;
pub use checklist::log_failure;
pub use checklist::logging_reporter;
pub use config::CheckerConfig;
pub use config::ConfigError;
pub use config::LOG_REPORTS_ENV;
pub use config::TOLERANCE_ENV;
pub use error::OperationError;
// Re-export concrete magmas
pub use log_float::LogFloat;
pub use operation::Add;
pub use operation::Choose;
pub use operation::Direction;
pub use operation::Markers;
pub use operation::Multiply;
pub use operation::Operation;
pub use operation::OperationId;
pub use operation::Side;
pub use primitives::Max;
pub use primitives::Min;
pub use product::Product;
// Re-export the registry
pub use registry::Implements;
pub use registry::Magma;
pub use registry::Ordered;
pub use registry::add;
pub use registry::annihilator;
pub use registry::apply;
pub use registry::approximately_equal;
pub use registry::choose;
pub use registry::compare;
pub use registry::divide;
pub use registry::has_annihilator;
pub use registry::has_compare;
pub use registry::has_identity;
pub use registry::has_inverse;
pub use registry::has_invert;
pub use registry::has_native;
pub use registry::has_native_equality;
pub use registry::has_native_inequality;
pub use registry::has_non_member;
pub use registry::has_order;
pub use registry::has_print;
pub use registry::has_reverse;
pub use registry::identity;
pub use registry::identity_accessor;
pub use registry::inverse;
pub use registry::invert;
pub use registry::is_annihilator;
pub use registry::multiply;
pub use registry::not_equal;
pub use registry::one;
pub use registry::print;
pub use registry::reverse;
pub use registry::subtract;
pub use registry::zero;
pub use sequence::Sequence;
pub use sequence::Symbol;
pub use tag::Tagged;
pub use tag::same_magma;
pub use tag::tag_name;
pub use tag::tag_of;
