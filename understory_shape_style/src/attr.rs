// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style attribute names and attribute sets.

use core::fmt;

/// Names one presentation attribute of a shape.
///
/// The set is closed: every shape carries exactly these attributes, and
/// default tables are keyed by them. Variants are declared in the order the
/// attributes are written to a drawing context.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum StyleAttr {
    /// Interior paint.
    Fill = 0,
    /// Outline paint.
    Stroke = 1,
    /// Outline width.
    StrokeWidth = 2,
    /// Dash pattern for the outline.
    LineDash = 3,
    /// Phase offset into the dash pattern.
    LineDashOffset = 4,
    /// Cap style for open outline ends.
    LineCap = 5,
    /// Join style for outline corners.
    LineJoin = 6,
    /// Group opacity in `[0, 1]`.
    Opacity = 7,
    /// Drop shadow.
    Shadow = 8,
}

impl StyleAttr {
    /// Every attribute, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Fill,
        Self::Stroke,
        Self::StrokeWidth,
        Self::LineDash,
        Self::LineDashOffset,
        Self::LineCap,
        Self::LineJoin,
        Self::Opacity,
        Self::Shadow,
    ];

    /// Returns the dense index of this attribute (`0..9`).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the canvas-style name of this attribute, e.g. `"strokeWidth"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::StrokeWidth => "strokeWidth",
            Self::LineDash => "lineDash",
            Self::LineDashOffset => "lineDashOffset",
            Self::LineCap => "lineCap",
            Self::LineJoin => "lineJoin",
            Self::Opacity => "opacity",
            Self::Shadow => "shadow",
        }
    }

    /// Converts this attribute into a single-element [`AttrSet`].
    #[must_use]
    #[inline]
    pub const fn flag(self) -> AttrSet {
        AttrSet::from_bits_retain(1 << self as u16)
    }
}

impl fmt::Display for StyleAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A compact set of [`StyleAttr`]s.
    ///
    /// Used for the keys of a default table, the override set of a variant,
    /// and the attributes a reset actually changed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AttrSet: u16 {
        /// [`StyleAttr::Fill`].
        const FILL = 1 << 0;
        /// [`StyleAttr::Stroke`].
        const STROKE = 1 << 1;
        /// [`StyleAttr::StrokeWidth`].
        const STROKE_WIDTH = 1 << 2;
        /// [`StyleAttr::LineDash`].
        const LINE_DASH = 1 << 3;
        /// [`StyleAttr::LineDashOffset`].
        const LINE_DASH_OFFSET = 1 << 4;
        /// [`StyleAttr::LineCap`].
        const LINE_CAP = 1 << 5;
        /// [`StyleAttr::LineJoin`].
        const LINE_JOIN = 1 << 6;
        /// [`StyleAttr::Opacity`].
        const OPACITY = 1 << 7;
        /// [`StyleAttr::Shadow`].
        const SHADOW = 1 << 8;
    }
}

impl AttrSet {
    /// Returns `true` if `attr` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains_attr(self, attr: StyleAttr) -> bool {
        self.contains(attr.flag())
    }

    /// Adds `attr` to the set.
    #[inline]
    pub fn insert_attr(&mut self, attr: StyleAttr) {
        self.insert(attr.flag());
    }

    /// Iterates the attributes in the set, in declaration order.
    pub fn attrs(self) -> impl Iterator<Item = StyleAttr> {
        StyleAttr::ALL
            .into_iter()
            .filter(move |attr| self.contains_attr(*attr))
    }
}

impl From<StyleAttr> for AttrSet {
    #[inline]
    fn from(attr: StyleAttr) -> Self {
        attr.flag()
    }
}

impl FromIterator<StyleAttr> for AttrSet {
    fn from_iter<I: IntoIterator<Item = StyleAttr>>(iter: I) -> Self {
        let mut set = Self::empty();
        for attr in iter {
            set.insert_attr(attr);
        }
        set
    }
}
