// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default-style tables.
//!
//! A [`DefaultsTable`] is the set of attribute defaults one variant declares,
//! or, once resolved, the merged view of a variant and all its ancestors.

use kurbo::{Cap, Join};
use peniko::Color;
use smallvec::SmallVec;

use crate::attr::{AttrSet, StyleAttr};
use crate::value::StyleValue;

/// Inline capacity: one slot per attribute, so no table ever spills.
const INLINE_CAPACITY: usize = StyleAttr::ALL.len();

/// An ordered mapping from [`StyleAttr`] to its default [`StyleValue`].
///
/// Entries are kept sorted by attribute and hold at most one value per
/// attribute, the same sorted-vector layout `understory_style::Style` uses
/// for property setters.
///
/// # Example
///
/// ```rust
/// use understory_shape_style::{DefaultsTable, StyleAttr, StyleValue};
///
/// let table = DefaultsTable::new()
///     .with(StyleValue::StrokeWidth(2.0))
///     .with(StyleValue::Fill(None));
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(StyleAttr::StrokeWidth), Some(&StyleValue::StrokeWidth(2.0)));
/// // Iteration follows attribute order, not insertion order.
/// assert_eq!(table.values().next().map(|v| v.attr()), Some(StyleAttr::Fill));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultsTable {
    entries: SmallVec<[StyleValue; INLINE_CAPACITY]>,
}

impl DefaultsTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The base shape defaults every shape hierarchy starts from.
    ///
    /// Black fill, no stroke, zero stroke width, solid outline with zero dash
    /// offset, butt caps, miter joins, full opacity, and no shadow.
    #[must_use]
    pub fn shape_base() -> Self {
        Self::new()
            .with(StyleValue::Fill(Some(Color::BLACK)))
            .with(StyleValue::Stroke(None))
            .with(StyleValue::StrokeWidth(0.0))
            .with(StyleValue::LineDash(None))
            .with(StyleValue::LineDashOffset(0.0))
            .with(StyleValue::LineCap(Cap::Butt))
            .with(StyleValue::LineJoin(Join::Miter))
            .with(StyleValue::Opacity(1.0))
            .with(StyleValue::Shadow(None))
    }

    /// Returns the table with `value` set, replacing any previous value for
    /// the same attribute.
    #[must_use]
    pub fn with(mut self, value: StyleValue) -> Self {
        self.insert(value);
        self
    }

    /// Sets `value`, returning the value it replaced, if any.
    pub fn insert(&mut self, value: StyleValue) -> Option<StyleValue> {
        match self.find(value.attr()) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx], value)),
            Err(idx) => {
                self.entries.insert(idx, value);
                None
            }
        }
    }

    /// Returns the default for `attr`, if this table declares one.
    #[must_use]
    pub fn get(&self, attr: StyleAttr) -> Option<&StyleValue> {
        self.find(attr).ok().map(|idx| &self.entries[idx])
    }

    /// Returns `true` if this table declares a default for `attr`.
    #[must_use]
    #[inline]
    pub fn contains(&self, attr: StyleAttr) -> bool {
        self.find(attr).is_ok()
    }

    /// Returns the set of attributes this table declares.
    #[must_use]
    pub fn keys(&self) -> AttrSet {
        self.entries.iter().map(StyleValue::attr).collect()
    }

    /// Iterates the declared values in attribute order.
    pub fn values(&self) -> impl Iterator<Item = &StyleValue> + '_ {
        self.entries.iter()
    }

    /// Returns the number of declared attributes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Layers `self` over `base`: the result has every entry of both, with
    /// `self` winning where both declare the same attribute.
    #[must_use]
    pub fn layered_over(&self, base: &Self) -> Self {
        let mut merged = base.clone();
        for value in &self.entries {
            merged.insert(value.clone());
        }
        merged
    }

    #[inline]
    fn find(&self, attr: StyleAttr) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&attr, StyleValue::attr)
    }
}

impl FromIterator<StyleValue> for DefaultsTable {
    fn from_iter<I: IntoIterator<Item = StyleValue>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.insert(value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_declares_every_attr() {
        let base = DefaultsTable::shape_base();
        assert_eq!(base.len(), StyleAttr::ALL.len());
        assert_eq!(base.keys(), AttrSet::all());
        assert_eq!(
            base.get(StyleAttr::Fill),
            Some(&StyleValue::Fill(Some(Color::BLACK)))
        );
        assert_eq!(base.get(StyleAttr::Opacity), Some(&StyleValue::Opacity(1.0)));
    }

    #[test]
    fn insert_replaces_same_attr() {
        let mut table = DefaultsTable::new();
        assert_eq!(table.insert(StyleValue::StrokeWidth(1.0)), None);
        assert_eq!(
            table.insert(StyleValue::StrokeWidth(3.0)),
            Some(StyleValue::StrokeWidth(1.0))
        );
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(StyleAttr::StrokeWidth),
            Some(&StyleValue::StrokeWidth(3.0))
        );
    }

    #[test]
    fn entries_stay_sorted() {
        let table: DefaultsTable = [
            StyleValue::Opacity(0.5),
            StyleValue::Fill(None),
            StyleValue::LineJoin(Join::Round),
        ]
        .into_iter()
        .collect();

        let attrs: alloc::vec::Vec<_> = table.values().map(StyleValue::attr).collect();
        assert_eq!(
            attrs,
            [StyleAttr::Fill, StyleAttr::LineJoin, StyleAttr::Opacity]
        );
    }

    #[test]
    fn layering_prefers_the_derived_table() {
        let base = DefaultsTable::new()
            .with(StyleValue::Fill(Some(Color::BLACK)))
            .with(StyleValue::StrokeWidth(0.0));
        let derived = DefaultsTable::new()
            .with(StyleValue::Fill(Some(Color::WHITE)))
            .with(StyleValue::Opacity(0.5));

        let merged = derived.layered_over(&base);
        assert_eq!(merged.len(), 3);
        assert_eq!(
            merged.get(StyleAttr::Fill),
            Some(&StyleValue::Fill(Some(Color::WHITE)))
        );
        assert_eq!(
            merged.get(StyleAttr::StrokeWidth),
            Some(&StyleValue::StrokeWidth(0.0))
        );
        assert_eq!(merged.get(StyleAttr::Opacity), Some(&StyleValue::Opacity(0.5)));
    }

    #[test]
    fn layering_over_empty_is_identity() {
        let table = DefaultsTable::new().with(StyleValue::LineCap(Cap::Round));
        assert_eq!(table.layered_over(&DefaultsTable::new()), table);
    }
}
