// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-shape queries.

use kurbo::Point;

/// Geometry-specific point queries for a shape variant.
///
/// Implementors answer [`is_in_fill`](Self::is_in_fill) and
/// [`is_in_stroke`](Self::is_in_stroke) in the shape's local coordinates.
/// The generic [`is_point_in_node`](Self::is_point_in_node) query consults
/// only the fill region; a caller that also wants outline hits asks for
/// them explicitly.
pub trait HitTest {
    /// Returns `true` if `pt` lies in the interior region.
    fn is_in_fill(&self, pt: Point) -> bool;

    /// Returns `true` if `pt` lies on the outline, given the current stroke.
    ///
    /// Implementations return `false` when no stroke paint is set.
    fn is_in_stroke(&self, pt: Point) -> bool;

    /// Generic containment query used by scene-graph picking.
    fn is_point_in_node(&self, pt: Point) -> bool {
        self.is_in_fill(pt)
    }

    /// Convenience for [`is_point_in_node`](Self::is_point_in_node) with
    /// separate coordinates.
    fn hit_test_xy(&self, x: f64, y: f64) -> bool {
        self.is_point_in_node(Point::new(x, y))
    }
}
