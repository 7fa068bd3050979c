// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference shape variants with concrete geometry.
//!
//! These pair a [`Shape`] with a `kurbo` primitive and implement [`HitTest`]
//! for it. The outline test takes the shape's [`Shape::stroke_style`],
//! measures the distance to the geometric outline and compares it against
//! half the stroke width. It does not model joins, caps or dashing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Line, ParamCurveNearest, Point, Rect};
use peniko::Color;
use understory_shape_style::{
    DefaultsRegistry, DefaultsTable, StyleValue, UnknownVariant, VariantId,
};

use crate::hit::HitTest;
use crate::shape::Shape;

/// An axis-aligned rectangle.
#[derive(Clone, Debug)]
pub struct RectShape {
    shape: Shape,
    rect: Rect,
}

impl RectShape {
    /// Declares the `Rect` variant under `parent`.
    ///
    /// The variant overrides `strokeWidth` to `1`, so that setting only a
    /// stroke paint produces a visible outline.
    ///
    /// # Panics
    ///
    /// Panics if a `Rect` variant is already declared or `parent` is unknown.
    pub fn declare(registry: &mut DefaultsRegistry, parent: VariantId) -> VariantId {
        registry.declare_defaults(
            "Rect",
            Some(parent),
            DefaultsTable::new().with(StyleValue::StrokeWidth(1.0)),
        )
    }

    /// Creates a rectangle of `variant` covering `rect`.
    ///
    /// The rectangle is normalized to positive width and height.
    pub fn new(
        variant: VariantId,
        registry: &DefaultsRegistry,
        rect: Rect,
    ) -> Result<Self, UnknownVariant> {
        Ok(Self {
            shape: Shape::new(variant, registry)?,
            rect: rect.abs(),
        })
    }

    /// Returns the style state.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the style state mutably.
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Returns the rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the rectangle, arming dirty if it changed.
    pub fn set_rect(&mut self, rect: Rect) -> bool {
        let rect = rect.abs();
        let changed = self.rect != rect;
        if changed {
            self.rect = rect;
            self.shape.node_mut().mark_dirty();
        }
        changed
    }

    fn edges(&self) -> [Line; 4] {
        let Rect { x0, y0, x1, y1 } = self.rect;
        [
            Line::new((x0, y0), (x1, y0)),
            Line::new((x1, y0), (x1, y1)),
            Line::new((x1, y1), (x0, y1)),
            Line::new((x0, y1), (x0, y0)),
        ]
    }
}

impl HitTest for RectShape {
    fn is_in_fill(&self, pt: Point) -> bool {
        self.rect.contains(pt)
    }

    fn is_in_stroke(&self, pt: Point) -> bool {
        let Some(stroke) = self.shape.stroke_style() else {
            return false;
        };
        let half_width = stroke.width * 0.5;
        self.edges()
            .iter()
            .any(|edge| edge.nearest(pt, 0.).distance_sq.sqrt() <= half_width)
    }
}

/// A circle.
#[derive(Clone, Debug)]
pub struct CircleShape {
    shape: Shape,
    circle: Circle,
}

impl CircleShape {
    /// Declares the `Circle` variant under `parent`.
    ///
    /// Circles are outlined by default: the variant sets a black stroke paint
    /// with a width of `1`.
    ///
    /// # Panics
    ///
    /// Panics if a `Circle` variant is already declared or `parent` is
    /// unknown.
    pub fn declare(registry: &mut DefaultsRegistry, parent: VariantId) -> VariantId {
        registry.declare_defaults(
            "Circle",
            Some(parent),
            DefaultsTable::new()
                .with(StyleValue::Stroke(Some(Color::BLACK)))
                .with(StyleValue::StrokeWidth(1.0)),
        )
    }

    /// Creates a circle of `variant`. A negative radius is treated as its
    /// magnitude.
    pub fn new(
        variant: VariantId,
        registry: &DefaultsRegistry,
        circle: Circle,
    ) -> Result<Self, UnknownVariant> {
        Ok(Self {
            shape: Shape::new(variant, registry)?,
            circle: Circle::new(circle.center, circle.radius.abs()),
        })
    }

    /// Returns the style state.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the style state mutably.
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Returns the circle.
    #[must_use]
    pub fn circle(&self) -> Circle {
        self.circle
    }

    /// Replaces the circle, arming dirty if it changed.
    pub fn set_circle(&mut self, circle: Circle) -> bool {
        let circle = Circle::new(circle.center, circle.radius.abs());
        let changed = self.circle.center != circle.center || self.circle.radius != circle.radius;
        if changed {
            self.circle = circle;
            self.shape.node_mut().mark_dirty();
        }
        changed
    }
}

impl HitTest for CircleShape {
    fn is_in_fill(&self, pt: Point) -> bool {
        (pt - self.circle.center).hypot() < self.circle.radius
    }

    fn is_in_stroke(&self, pt: Point) -> bool {
        let Some(stroke) = self.shape.stroke_style() else {
            return false;
        };
        let dist = (pt - self.circle.center).hypot();
        (dist - self.circle.radius).abs() <= stroke.width * 0.5
    }
}
