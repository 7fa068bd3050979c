// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Shape: change-tracked style state for scene-graph shapes.
//!
//! A [`Shape`] holds the presentation attributes defined by
//! `understory_shape_style`, initialized from its variant's resolved
//! defaults. This crate adds what a render pipeline needs on top:
//!
//! - **Change tracking**: setters arm the node's dirty flag only when the
//!   stored value actually changes.
//! - **Resets**: restore a variant's own, all, or overridden defaults.
//! - **Context application**: [`Shape::apply_attributes`] writes the current
//!   attributes onto a [`StyleSink`] in a fixed order, skipping values that
//!   equal the context's initial state.
//! - **Hit testing**: the [`HitTest`] contract, with [`RectShape`] and
//!   [`CircleShape`] as reference implementations.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_shape::{HitTest, RecordingSink, RectShape, SinkOp};
//! use understory_shape_style::{Color, DefaultsRegistry, DefaultsTable};
//! use kurbo::{Point, Rect};
//!
//! let mut registry = DefaultsRegistry::new();
//! let base = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
//! let rect_variant = RectShape::declare(&mut registry, base);
//!
//! let mut rect = RectShape::new(rect_variant, &registry, Rect::new(0., 0., 10., 10.)).unwrap();
//! assert!(!rect.shape().is_dirty());
//!
//! // Only real changes arm dirty.
//! assert!(!rect.shape_mut().set_fill(Some(Color::BLACK)));
//! assert!(rect.shape_mut().set_stroke(Some(Color::WHITE)));
//! assert!(rect.shape().is_dirty());
//!
//! let mut sink = RecordingSink::new();
//! rect.shape().apply_attributes(&mut sink);
//! assert_eq!(
//!     sink.ops(),
//!     &[
//!         SinkOp::FillStyle(Color::BLACK),
//!         SinkOp::StrokeStyle(Color::WHITE),
//!         SinkOp::LineWidth(1.0),
//!     ]
//! );
//!
//! // Node picking consults the fill only.
//! assert!(rect.is_point_in_node(Point::new(5., 5.)));
//! assert!(rect.is_in_stroke(Point::new(10., 5.)));
//!
//! // Put everything back.
//! let changed = rect.shape_mut().restore_all_styles(&registry).unwrap();
//! assert_eq!(rect.shape().stroke(), None);
//! assert!(!changed.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): use `std` float functions through `kurbo`.
//! - `libm`: use `libm` for `no_std` targets.
//! - `tracing`: emit `tracing` events for resets and dirty arming.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod apply;
mod hit;
mod log;
mod node;
mod restore;
mod shape;
mod sink;
mod variants;

pub use hit::HitTest;
pub use node::NodeState;
pub use shape::Shape;
pub use sink::{RecordingSink, SinkOp, StyleSink};
pub use variants::{CircleShape, RectShape};
