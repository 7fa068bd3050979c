// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed attribute values.
//!
//! [`StyleValue`] carries the value of exactly one [`StyleAttr`], so default
//! tables can hold heterogeneous attributes without type erasure.

use alloc::sync::Arc;
use kurbo::{Cap, Join, Vec2};
use peniko::Color;
use smallvec::SmallVec;

use crate::attr::StyleAttr;

/// A dash pattern: alternating dash and gap lengths.
///
/// Same inline capacity as [`kurbo::Dashes`], so typical patterns do not
/// allocate.
pub type DashPattern = SmallVec<[f64; 4]>;

/// A drop shadow cast by a shape.
///
/// Shadows are caller-owned values; shapes hold them through an [`Arc`] and
/// compare them by identity.
#[derive(Clone, Debug, PartialEq)]
pub struct DropShadow {
    /// Shadow color.
    pub color: Color,
    /// Shadow offset in local units.
    pub offset: Vec2,
    /// Blur radius in local units.
    pub blur: f64,
}

impl DropShadow {
    /// Creates a new drop shadow.
    #[must_use]
    pub const fn new(color: Color, offset: Vec2, blur: f64) -> Self {
        Self {
            color,
            offset,
            blur,
        }
    }
}

/// The value of one style attribute.
///
/// Equality follows the change rules shapes apply in their setters: dash
/// patterns compare with [`dash_eq`] and shadows compare by [`Arc`]
/// identity, so `a == b` exactly when assigning `b` over `a` is not a change.
#[derive(Clone, Debug)]
pub enum StyleValue {
    /// Interior paint; `None` means no fill.
    Fill(Option<Color>),
    /// Outline paint; `None` means no stroke at all.
    Stroke(Option<Color>),
    /// Outline width.
    StrokeWidth(f64),
    /// Dash pattern; `None` means a solid outline.
    LineDash(Option<DashPattern>),
    /// Dash phase offset.
    LineDashOffset(f64),
    /// Cap style.
    LineCap(Cap),
    /// Join style.
    LineJoin(Join),
    /// Opacity in `[0, 1]`.
    Opacity(f64),
    /// Drop shadow, compared by identity.
    Shadow(Option<Arc<DropShadow>>),
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fill(a), Self::Fill(b)) | (Self::Stroke(a), Self::Stroke(b)) => a == b,
            (Self::StrokeWidth(a), Self::StrokeWidth(b))
            | (Self::LineDashOffset(a), Self::LineDashOffset(b))
            | (Self::Opacity(a), Self::Opacity(b)) => a == b,
            (Self::LineDash(a), Self::LineDash(b)) => dash_eq(a.as_deref(), b.as_deref()),
            (Self::LineCap(a), Self::LineCap(b)) => a == b,
            (Self::LineJoin(a), Self::LineJoin(b)) => a == b,
            (Self::Shadow(a), Self::Shadow(b)) => match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            },
            _ => false,
        }
    }
}

impl StyleValue {
    /// Returns the attribute this value belongs to.
    #[must_use]
    pub const fn attr(&self) -> StyleAttr {
        match self {
            Self::Fill(_) => StyleAttr::Fill,
            Self::Stroke(_) => StyleAttr::Stroke,
            Self::StrokeWidth(_) => StyleAttr::StrokeWidth,
            Self::LineDash(_) => StyleAttr::LineDash,
            Self::LineDashOffset(_) => StyleAttr::LineDashOffset,
            Self::LineCap(_) => StyleAttr::LineCap,
            Self::LineJoin(_) => StyleAttr::LineJoin,
            Self::Opacity(_) => StyleAttr::Opacity,
            Self::Shadow(_) => StyleAttr::Shadow,
        }
    }

    /// Builds a [`StyleValue::LineDash`] from a slice of lengths.
    #[must_use]
    pub fn line_dash(pattern: &[f64]) -> Self {
        Self::LineDash(Some(SmallVec::from_slice(pattern)))
    }
}

/// Compares two optional dash patterns element by element.
///
/// Two patterns are equal when both are unset, or both are set with the same
/// length and pairwise-equal lengths. Distinct allocations with the same
/// contents compare equal, and a NaN length equals another NaN length.
///
/// ```rust
/// use understory_shape_style::dash_eq;
///
/// assert!(dash_eq(Some(&[1.0, 2.0, 3.0]), Some(&[1.0, 2.0, 3.0])));
/// assert!(!dash_eq(Some(&[1.0, 2.0, 3.0]), Some(&[1.0, 2.0, 4.0])));
/// assert!(!dash_eq(Some(&[1.0, 2.0]), None));
/// assert!(dash_eq(None, None));
/// assert!(dash_eq(Some(&[f64::NAN]), Some(&[f64::NAN])));
/// ```
#[must_use]
pub fn dash_eq(a: Option<&[f64]>, b: Option<&[f64]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| len_eq(*x, *y)),
        _ => false,
    }
}

#[inline]
fn len_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_name_their_attr() {
        assert_eq!(StyleValue::Fill(None).attr(), StyleAttr::Fill);
        assert_eq!(StyleValue::StrokeWidth(2.0).attr(), StyleAttr::StrokeWidth);
        assert_eq!(StyleValue::line_dash(&[4.0]).attr(), StyleAttr::LineDash);
        assert_eq!(StyleValue::LineCap(Cap::Round).attr(), StyleAttr::LineCap);
        assert_eq!(StyleValue::Shadow(None).attr(), StyleAttr::Shadow);
    }

    #[test]
    fn dash_eq_is_deep() {
        let a: DashPattern = SmallVec::from_slice(&[1.0, 2.0, 3.0]);
        let b: DashPattern = SmallVec::from_slice(&[1.0, 2.0, 3.0]);
        assert!(dash_eq(Some(&a), Some(&b)));
        assert!(!dash_eq(Some(&a), Some(&[1.0, 2.0])));
        assert!(!dash_eq(None, Some(&b)));
    }

    #[test]
    fn empty_pattern_is_not_unset() {
        assert!(!dash_eq(Some(&[]), None));
        assert!(dash_eq(Some(&[]), Some(&[])));
    }

    #[test]
    fn dash_eq_matches_nan_lengths() {
        assert!(dash_eq(Some(&[f64::NAN, 2.0]), Some(&[f64::NAN, 2.0])));
        assert!(!dash_eq(Some(&[f64::NAN]), Some(&[1.0])));
        assert_eq!(
            StyleValue::line_dash(&[f64::NAN]),
            StyleValue::line_dash(&[f64::NAN])
        );
    }

    #[test]
    fn shadow_values_compare_by_identity() {
        let shadow = DropShadow::new(Color::BLACK, Vec2::new(2.0, 2.0), 4.0);
        let shared = Arc::new(shadow.clone());
        let a = StyleValue::Shadow(Some(shared.clone()));
        let b = StyleValue::Shadow(Some(Arc::new(shadow)));
        assert_ne!(a, b);
        assert_eq!(a, StyleValue::Shadow(Some(shared)));
        assert_eq!(StyleValue::Shadow(None), StyleValue::Shadow(None));
        assert_ne!(a, StyleValue::Shadow(None));
    }

    #[test]
    fn values_of_different_attrs_differ() {
        assert_ne!(StyleValue::StrokeWidth(1.0), StyleValue::LineDashOffset(1.0));
        assert_ne!(StyleValue::Fill(None), StyleValue::Stroke(None));
    }
}
