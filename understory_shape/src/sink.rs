// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-context sinks that receive style attributes.

use alloc::vec::Vec;
use kurbo::{Cap, Join};
use peniko::Color;
use understory_shape_style::DashPattern;

/// A drawing context that accepts style property assignments.
///
/// This mirrors the state setters of a Canvas 2D context. A sink only
/// receives assignments; how it later draws is up to the backend.
pub trait StyleSink {
    /// Set the interior paint.
    fn set_fill_style(&mut self, color: Color);
    /// Set the outline paint.
    fn set_stroke_style(&mut self, color: Color);
    /// Set the outline width.
    fn set_line_width(&mut self, width: f64);
    /// Set the dash pattern.
    fn set_line_dash(&mut self, pattern: &[f64]);
    /// Set the dash phase offset.
    fn set_line_dash_offset(&mut self, offset: f64);
    /// Set the cap style.
    fn set_line_cap(&mut self, cap: Cap);
    /// Set the join style.
    fn set_line_join(&mut self, join: Join);
    /// Set the global alpha applied to subsequent drawing.
    fn set_global_alpha(&mut self, alpha: f64);
    /// Set the shadow color.
    fn set_shadow_color(&mut self, color: Color);
    /// Set the horizontal shadow offset.
    fn set_shadow_offset_x(&mut self, x: f64);
    /// Set the vertical shadow offset.
    fn set_shadow_offset_y(&mut self, y: f64);
    /// Set the shadow blur.
    fn set_shadow_blur(&mut self, blur: f64);
}

/// One assignment received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkOp {
    /// [`StyleSink::set_fill_style`].
    FillStyle(Color),
    /// [`StyleSink::set_stroke_style`].
    StrokeStyle(Color),
    /// [`StyleSink::set_line_width`].
    LineWidth(f64),
    /// [`StyleSink::set_line_dash`].
    LineDash(DashPattern),
    /// [`StyleSink::set_line_dash_offset`].
    LineDashOffset(f64),
    /// [`StyleSink::set_line_cap`].
    LineCap(Cap),
    /// [`StyleSink::set_line_join`].
    LineJoin(Join),
    /// [`StyleSink::set_global_alpha`].
    GlobalAlpha(f64),
    /// [`StyleSink::set_shadow_color`].
    ShadowColor(Color),
    /// [`StyleSink::set_shadow_offset_x`].
    ShadowOffsetX(f64),
    /// [`StyleSink::set_shadow_offset_y`].
    ShadowOffsetY(f64),
    /// [`StyleSink::set_shadow_blur`].
    ShadowBlur(f64),
}

/// A sink that records every assignment in order.
///
/// It does not draw anything. It is intended for tests and debugging that
/// want to assert on exactly what was written to a context.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    ops: Vec<SinkOp>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded assignments.
    #[must_use]
    pub fn ops(&self) -> &[SinkOp] {
        &self.ops
    }

    /// Takes the recorded assignments, leaving the sink empty.
    pub fn take_ops(&mut self) -> Vec<SinkOp> {
        core::mem::take(&mut self.ops)
    }

    /// Clears the recorded assignments.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl StyleSink for RecordingSink {
    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(SinkOp::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ops.push(SinkOp::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SinkOp::LineWidth(width));
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.ops.push(SinkOp::LineDash(DashPattern::from_slice(pattern)));
    }

    fn set_line_dash_offset(&mut self, offset: f64) {
        self.ops.push(SinkOp::LineDashOffset(offset));
    }

    fn set_line_cap(&mut self, cap: Cap) {
        self.ops.push(SinkOp::LineCap(cap));
    }

    fn set_line_join(&mut self, join: Join) {
        self.ops.push(SinkOp::LineJoin(join));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(SinkOp::GlobalAlpha(alpha));
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.ops.push(SinkOp::ShadowColor(color));
    }

    fn set_shadow_offset_x(&mut self, x: f64) {
        self.ops.push(SinkOp::ShadowOffsetX(x));
    }

    fn set_shadow_offset_y(&mut self, y: f64) {
        self.ops.push(SinkOp::ShadowOffsetY(y));
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ops.push(SinkOp::ShadowBlur(blur));
    }
}
