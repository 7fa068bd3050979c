// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing a shape's current attributes onto a drawing context.

use kurbo::{Cap, Join};

use crate::shape::Shape;
use crate::sink::StyleSink;

impl Shape {
    /// Writes the current attributes onto `sink`.
    ///
    /// Order and conditions:
    ///
    /// 1. Fill paint, when set.
    /// 2. When a stroke paint is set: the stroke paint and line width, then
    ///    the dash pattern when set, the dash offset when non-zero, the cap
    ///    when not butt, and the join when not miter.
    /// 3. Global alpha, when opacity is below 1.
    /// 4. Shadow color, x offset, y offset and blur, when a shadow is set.
    ///
    /// Outline attributes are never written without a stroke paint. A stroke
    /// paint with zero width still writes both the paint and the width:
    /// "no stroke" and "invisible stroke" are different states.
    ///
    /// ```rust
    /// use understory_shape::{RecordingSink, Shape, SinkOp};
    /// use understory_shape_style::{Color, DefaultsRegistry, DefaultsTable};
    ///
    /// let mut registry = DefaultsRegistry::new();
    /// let base = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
    /// let mut shape = Shape::new(base, &registry).unwrap();
    /// shape.set_stroke_width(5.0);
    ///
    /// let mut sink = RecordingSink::new();
    /// shape.apply_attributes(&mut sink);
    /// assert_eq!(sink.ops(), &[SinkOp::FillStyle(Color::BLACK)]);
    /// ```
    pub fn apply_attributes<S: StyleSink + ?Sized>(&self, sink: &mut S) {
        if let Some(fill) = self.fill() {
            sink.set_fill_style(fill);
        }

        if let Some(stroke) = self.stroke() {
            sink.set_stroke_style(stroke);
            sink.set_line_width(self.stroke_width());
            if let Some(dash) = self.line_dash() {
                sink.set_line_dash(dash);
            }
            if self.line_dash_offset() != 0.0 {
                sink.set_line_dash_offset(self.line_dash_offset());
            }
            if self.line_cap() != Cap::Butt {
                sink.set_line_cap(self.line_cap());
            }
            if self.line_join() != Join::Miter {
                sink.set_line_join(self.line_join());
            }
        }

        if self.opacity() < 1.0 {
            sink.set_global_alpha(self.opacity());
        }

        if let Some(shadow) = self.shadow() {
            sink.set_shadow_color(shadow.color);
            sink.set_shadow_offset_x(shadow.offset.x);
            sink.set_shadow_offset_y(shadow.offset.y);
            sink.set_shadow_blur(shadow.blur);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shape::Shape;
    use crate::sink::{RecordingSink, SinkOp};
    use alloc::sync::Arc;
    use kurbo::{Cap, Join, Vec2};
    use peniko::Color;
    use understory_shape_style::{
        DashPattern, DefaultsRegistry, DefaultsTable, DropShadow, StyleValue,
    };

    fn shape_with(own: DefaultsTable) -> Shape {
        let mut registry = DefaultsRegistry::new();
        let base = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
        let variant = registry.declare_defaults("Variant", Some(base), own);
        Shape::new(variant, &registry).unwrap()
    }

    fn applied(shape: &Shape) -> alloc::vec::Vec<SinkOp> {
        let mut sink = RecordingSink::new();
        shape.apply_attributes(&mut sink);
        sink.take_ops()
    }

    #[test]
    fn defaults_write_only_the_fill() {
        let shape = shape_with(DefaultsTable::new());
        assert_eq!(applied(&shape), [SinkOp::FillStyle(Color::BLACK)]);
    }

    #[test]
    fn no_fill_writes_nothing() {
        let shape = shape_with(DefaultsTable::new().with(StyleValue::Fill(None)));
        assert!(applied(&shape).is_empty());
    }

    #[test]
    fn outline_attrs_need_a_stroke_paint() {
        let mut shape = shape_with(DefaultsTable::new());
        shape.set_stroke_width(5.0);
        shape.set_line_dash(Some(&[2.0, 2.0]));
        shape.set_line_dash_offset(1.0);
        shape.set_line_cap(Cap::Round);
        shape.set_line_join(Join::Round);

        let ops = applied(&shape);
        assert_eq!(ops, [SinkOp::FillStyle(Color::BLACK)]);
        assert!(!ops.iter().any(|op| matches!(op, SinkOp::LineWidth(_))));
    }

    #[test]
    fn zero_width_stroke_is_written() {
        let mut shape = shape_with(DefaultsTable::new());
        shape.set_fill(None);
        shape.set_stroke(Some(Color::WHITE));

        assert_eq!(
            applied(&shape),
            [SinkOp::StrokeStyle(Color::WHITE), SinkOp::LineWidth(0.0)]
        );
    }

    #[test]
    fn default_cap_join_and_offset_are_skipped() {
        let mut shape = shape_with(DefaultsTable::new());
        shape.set_fill(None);
        shape.set_stroke(Some(Color::BLACK));
        shape.set_stroke_width(2.0);
        shape.set_line_dash(Some(&[4.0, 1.0]));

        assert_eq!(
            applied(&shape),
            [
                SinkOp::StrokeStyle(Color::BLACK),
                SinkOp::LineWidth(2.0),
                SinkOp::LineDash(DashPattern::from_slice(&[4.0, 1.0])),
            ]
        );
    }

    #[test]
    fn full_order() {
        let shadow = Arc::new(DropShadow::new(Color::BLACK, Vec2::new(3.0, -1.0), 6.0));
        let mut shape = shape_with(DefaultsTable::new());
        shape.set_fill(Some(Color::WHITE));
        shape.set_stroke(Some(Color::BLACK));
        shape.set_stroke_width(1.5);
        shape.set_line_dash(Some(&[5.0, 3.0]));
        shape.set_line_dash_offset(2.0);
        shape.set_line_cap(Cap::Square);
        shape.set_line_join(Join::Bevel);
        shape.set_opacity(0.4);
        shape.set_shadow(Some(shadow));

        assert_eq!(
            applied(&shape),
            [
                SinkOp::FillStyle(Color::WHITE),
                SinkOp::StrokeStyle(Color::BLACK),
                SinkOp::LineWidth(1.5),
                SinkOp::LineDash(DashPattern::from_slice(&[5.0, 3.0])),
                SinkOp::LineDashOffset(2.0),
                SinkOp::LineCap(Cap::Square),
                SinkOp::LineJoin(Join::Bevel),
                SinkOp::GlobalAlpha(0.4),
                SinkOp::ShadowColor(Color::BLACK),
                SinkOp::ShadowOffsetX(3.0),
                SinkOp::ShadowOffsetY(-1.0),
                SinkOp::ShadowBlur(6.0),
            ]
        );
    }

    #[test]
    fn transparent_shape_writes_zero_alpha() {
        let shape = shape_with(DefaultsTable::new().with(StyleValue::Opacity(0.0)));
        assert_eq!(
            applied(&shape),
            [SinkOp::FillStyle(Color::BLACK), SinkOp::GlobalAlpha(0.0)]
        );
    }

    #[test]
    fn apply_does_not_touch_dirty() {
        let mut shape = shape_with(DefaultsTable::new());
        shape.set_opacity(0.5);
        shape.node_mut().clear_dirty();
        let _ = applied(&shape);
        assert!(!shape.is_dirty());
    }
}
