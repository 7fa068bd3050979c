// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Shape Style: presentation attributes and layered defaults for
//! scene-graph shapes.
//!
//! Shapes carry a fixed set of presentation attributes (fill, stroke, stroke
//! width, dashing, caps, joins, opacity, drop shadow) that are independent of
//! their geometry. This crate defines that vocabulary and the registry of
//! per-variant default values. The shape node itself, with change tracking
//! and context application, lives in `understory_shape`.
//!
//! ## Core Concepts
//!
//! - [`StyleAttr`] names an attribute; [`AttrSet`] is a compact set of them.
//! - [`StyleValue`] is the typed value of one attribute.
//! - [`DefaultsTable`] is an ordered attribute → default mapping.
//! - [`DefaultsRegistry`] holds one table per variant, linked to its parent
//!   variant. Each variant's resolved table is its own table layered over
//!   its parent's resolved table, so the most-derived declaration wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_shape_style::{Color, DefaultsRegistry, DefaultsTable, StyleAttr, StyleValue};
//!
//! let mut registry = DefaultsRegistry::new();
//!
//! // The root declares every attribute.
//! let shape = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
//!
//! // A variant declares only what it changes.
//! let marker = registry.declare_defaults(
//!     "Marker",
//!     Some(shape),
//!     DefaultsTable::new()
//!         .with(StyleValue::Fill(Some(Color::WHITE)))
//!         .with(StyleValue::StrokeWidth(1.5)),
//! );
//!
//! let resolved = registry.resolve(marker).unwrap();
//! assert_eq!(resolved.get(StyleAttr::Fill), Some(&StyleValue::Fill(Some(Color::WHITE))));
//! assert_eq!(resolved.get(StyleAttr::Opacity), Some(&StyleValue::Opacity(1.0)));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `libm` instead of the
//! default `std` feature on targets without `std`.

#![no_std]

extern crate alloc;

mod attr;
mod log;
mod registry;
mod table;
mod value;

pub use attr::{AttrSet, StyleAttr};
pub use registry::{DefaultsRegistry, UnknownVariant, VariantId};
pub use table::DefaultsTable;
pub use value::{DashPattern, DropShadow, StyleValue, dash_eq};

pub use kurbo::{Cap, Join};
pub use peniko::Color;
