// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shape node and its change-tracked style attributes.

use alloc::sync::Arc;
use kurbo::{Cap, Join, Stroke};
use peniko::Color;
use understory_shape_style::{
    DashPattern, DefaultsRegistry, DropShadow, StyleAttr, StyleValue, UnknownVariant, VariantId,
    dash_eq,
};

use crate::log::trace;
use crate::node::NodeState;

/// A drawable scene-graph node with presentation attributes.
///
/// Every attribute setter compares the incoming value with the stored one
/// and only stores it, and arms the node's dirty flag, when it differs.
/// Setters return whether anything changed.
///
/// Equality is per attribute:
/// - paints, widths, offsets, caps and joins compare by value;
/// - the dash pattern compares element by element ([`dash_eq`]);
/// - opacity is clamped to `[0, 1]` first (NaN becomes `0`), and the clamped
///   value is compared;
/// - the shadow compares by [`Arc`] identity.
///
/// # Example
///
/// ```rust
/// use understory_shape::Shape;
/// use understory_shape_style::{DefaultsRegistry, DefaultsTable};
///
/// let mut registry = DefaultsRegistry::new();
/// let base = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
///
/// let mut shape = Shape::new(base, &registry).unwrap();
/// assert!(!shape.is_dirty());
///
/// // Same contents in a fresh allocation: no change.
/// shape.set_line_dash(Some(&[4.0, 2.0]));
/// shape.node_mut().clear_dirty();
/// assert!(!shape.set_line_dash(Some(&[4.0, 2.0])));
/// assert!(!shape.is_dirty());
///
/// // Out-of-range opacity clamps.
/// assert!(shape.set_opacity(-0.2));
/// assert_eq!(shape.opacity(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Shape {
    node: NodeState,
    variant: VariantId,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
    line_dash: Option<DashPattern>,
    line_dash_offset: f64,
    line_cap: Cap,
    line_join: Join,
    opacity: f64,
    shadow: Option<Arc<DropShadow>>,
}

impl Shape {
    /// Creates a shape of `variant`, initialized from its resolved defaults.
    ///
    /// Attributes the resolved table does not mention keep the base shape
    /// values (see [`DefaultsTable::shape_base`]). The new shape is clean.
    ///
    /// [`DefaultsTable::shape_base`]: understory_shape_style::DefaultsTable::shape_base
    pub fn new(variant: VariantId, registry: &DefaultsRegistry) -> Result<Self, UnknownVariant> {
        let defaults = registry.resolve(variant)?;
        let mut shape = Self {
            node: NodeState::new(),
            variant,
            fill: Some(Color::BLACK),
            stroke: None,
            stroke_width: 0.0,
            line_dash: None,
            line_dash_offset: 0.0,
            line_cap: Cap::Butt,
            line_join: Join::Miter,
            opacity: 1.0,
            shadow: None,
        };
        for value in defaults.values() {
            shape.set_attr(value.clone());
        }
        // Initialization is not a change.
        shape.node.clear_dirty();
        Ok(shape)
    }

    /// Returns the variant this shape was created as.
    #[must_use]
    #[inline]
    pub fn variant(&self) -> VariantId {
        self.variant
    }

    /// Returns the node state.
    #[must_use]
    #[inline]
    pub fn node(&self) -> &NodeState {
        &self.node
    }

    /// Returns the node state mutably, for the render pipeline to clear the
    /// dirty flag.
    #[inline]
    pub fn node_mut(&mut self) -> &mut NodeState {
        &mut self.node
    }

    /// Shorthand for `self.node().is_dirty()`.
    #[must_use]
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.node.is_dirty()
    }

    /// Interior paint, if any.
    #[must_use]
    #[inline]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Sets the interior paint.
    pub fn set_fill(&mut self, fill: Option<Color>) -> bool {
        let changed = self.fill != fill;
        if changed {
            self.fill = fill;
        }
        self.commit(StyleAttr::Fill, changed)
    }

    /// Outline paint, if any. `None` means the shape has no stroke at all.
    #[must_use]
    #[inline]
    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    /// Sets the outline paint.
    pub fn set_stroke(&mut self, stroke: Option<Color>) -> bool {
        let changed = self.stroke != stroke;
        if changed {
            self.stroke = stroke;
        }
        self.commit(StyleAttr::Stroke, changed)
    }

    /// Outline width.
    #[must_use]
    #[inline]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Sets the outline width. Negative and NaN widths become `0`.
    pub fn set_stroke_width(&mut self, width: f64) -> bool {
        let width = width.max(0.0);
        let changed = self.stroke_width != width;
        if changed {
            self.stroke_width = width;
        }
        self.commit(StyleAttr::StrokeWidth, changed)
    }

    /// Dash pattern, if any.
    #[must_use]
    #[inline]
    pub fn line_dash(&self) -> Option<&[f64]> {
        self.line_dash.as_deref()
    }

    /// Sets the dash pattern.
    ///
    /// A pattern with the same lengths as the current one is not a change,
    /// regardless of where it was allocated.
    pub fn set_line_dash(&mut self, dash: Option<&[f64]>) -> bool {
        let changed = !dash_eq(self.line_dash.as_deref(), dash);
        if changed {
            self.line_dash = dash.map(DashPattern::from_slice);
        }
        self.commit(StyleAttr::LineDash, changed)
    }

    /// Dash phase offset.
    #[must_use]
    #[inline]
    pub fn line_dash_offset(&self) -> f64 {
        self.line_dash_offset
    }

    /// Sets the dash phase offset. A NaN offset becomes `0`.
    pub fn set_line_dash_offset(&mut self, offset: f64) -> bool {
        let offset = if offset.is_nan() { 0.0 } else { offset };
        let changed = self.line_dash_offset != offset;
        if changed {
            self.line_dash_offset = offset;
        }
        self.commit(StyleAttr::LineDashOffset, changed)
    }

    /// Cap style; [`Cap::Butt`] is the unset value.
    #[must_use]
    #[inline]
    pub fn line_cap(&self) -> Cap {
        self.line_cap
    }

    /// Sets the cap style.
    pub fn set_line_cap(&mut self, cap: Cap) -> bool {
        let changed = self.line_cap != cap;
        if changed {
            self.line_cap = cap;
        }
        self.commit(StyleAttr::LineCap, changed)
    }

    /// Join style; [`Join::Miter`] is the unset value.
    #[must_use]
    #[inline]
    pub fn line_join(&self) -> Join {
        self.line_join
    }

    /// Sets the join style.
    pub fn set_line_join(&mut self, join: Join) -> bool {
        let changed = self.line_join != join;
        if changed {
            self.line_join = join;
        }
        self.commit(StyleAttr::LineJoin, changed)
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Sets the opacity, clamping it to `[0, 1]`. NaN becomes `0`.
    ///
    /// Only the clamped value is compared, so `1.5` on a fully opaque shape
    /// is not a change.
    pub fn set_opacity(&mut self, opacity: f64) -> bool {
        let opacity = clamp_opacity(opacity);
        let changed = self.opacity != opacity;
        if changed {
            self.opacity = opacity;
        }
        self.commit(StyleAttr::Opacity, changed)
    }

    /// Drop shadow, if any.
    #[must_use]
    #[inline]
    pub fn shadow(&self) -> Option<&Arc<DropShadow>> {
        self.shadow.as_ref()
    }

    /// Sets the drop shadow. Shadows compare by identity, not contents.
    pub fn set_shadow(&mut self, shadow: Option<Arc<DropShadow>>) -> bool {
        let changed = match (&self.shadow, &shadow) {
            (None, None) => false,
            (Some(old), Some(new)) => !Arc::ptr_eq(old, new),
            _ => true,
        };
        if changed {
            self.shadow = shadow;
        }
        self.commit(StyleAttr::Shadow, changed)
    }

    /// Sets whichever attribute `value` belongs to.
    ///
    /// Follows the same change rules as the typed setters.
    pub fn set_attr(&mut self, value: StyleValue) -> bool {
        match value {
            StyleValue::Fill(fill) => self.set_fill(fill),
            StyleValue::Stroke(stroke) => self.set_stroke(stroke),
            StyleValue::StrokeWidth(width) => self.set_stroke_width(width),
            StyleValue::LineDash(dash) => self.set_line_dash(dash.as_deref()),
            StyleValue::LineDashOffset(offset) => self.set_line_dash_offset(offset),
            StyleValue::LineCap(cap) => self.set_line_cap(cap),
            StyleValue::LineJoin(join) => self.set_line_join(join),
            StyleValue::Opacity(opacity) => self.set_opacity(opacity),
            StyleValue::Shadow(shadow) => self.set_shadow(shadow),
        }
    }

    /// Returns the current value of `attr`.
    #[must_use]
    pub fn attr(&self, attr: StyleAttr) -> StyleValue {
        match attr {
            StyleAttr::Fill => StyleValue::Fill(self.fill),
            StyleAttr::Stroke => StyleValue::Stroke(self.stroke),
            StyleAttr::StrokeWidth => StyleValue::StrokeWidth(self.stroke_width),
            StyleAttr::LineDash => StyleValue::LineDash(self.line_dash.clone()),
            StyleAttr::LineDashOffset => StyleValue::LineDashOffset(self.line_dash_offset),
            StyleAttr::LineCap => StyleValue::LineCap(self.line_cap),
            StyleAttr::LineJoin => StyleValue::LineJoin(self.line_join),
            StyleAttr::Opacity => StyleValue::Opacity(self.opacity),
            StyleAttr::Shadow => StyleValue::Shadow(self.shadow.clone()),
        }
    }

    /// Returns the outline as a kurbo stroke, or `None` without a stroke
    /// paint.
    ///
    /// A set stroke paint with zero width still yields a stroke.
    #[must_use]
    pub fn stroke_style(&self) -> Option<Stroke> {
        if self.stroke.is_none() {
            return None;
        }
        let mut style = Stroke::new(self.stroke_width)
            .with_caps(self.line_cap)
            .with_join(self.line_join);
        if let Some(dash) = &self.line_dash {
            style = style.with_dashes(self.line_dash_offset, dash.iter().copied());
        }
        Some(style)
    }

    #[cfg_attr(
        not(feature = "tracing"),
        expect(unused_variables, reason = "attr is only logged")
    )]
    #[inline]
    fn commit(&mut self, attr: StyleAttr, changed: bool) -> bool {
        if changed {
            trace!(%attr, variant = ?self.variant, "shape style changed");
            self.node.mark_dirty();
        }
        changed
    }
}

/// Clamps an opacity into `[0, 1]`, mapping NaN to `0`.
#[inline]
fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}
