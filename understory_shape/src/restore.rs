// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resetting a shape's attributes back to its variant's defaults.
//!
//! All three resets go through [`Shape::set_attr`], so an attribute that
//! already holds its default is left alone and does not arm dirty. Each
//! returns the set of attributes that actually changed.

use understory_shape_style::{AttrSet, DefaultsRegistry, DefaultsTable, UnknownVariant};

use crate::log::debug;
use crate::shape::Shape;

impl Shape {
    /// Resets the attributes this shape's variant declares directly.
    ///
    /// Inherited attributes the variant does not redeclare are untouched.
    pub fn restore_own_styles(
        &mut self,
        registry: &DefaultsRegistry,
    ) -> Result<AttrSet, UnknownVariant> {
        let own = registry.own_defaults(self.variant())?;
        let changed = self.restore_from(own, own.keys());
        debug!(variant = ?self.variant(), ?changed, "restored own styles");
        Ok(changed)
    }

    /// Resets every attribute the variant's resolved defaults mention, own
    /// and inherited.
    pub fn restore_all_styles(
        &mut self,
        registry: &DefaultsRegistry,
    ) -> Result<AttrSet, UnknownVariant> {
        let resolved = registry.resolve(self.variant())?;
        let changed = self.restore_from(resolved, resolved.keys());
        debug!(variant = ?self.variant(), ?changed, "restored all styles");
        Ok(changed)
    }

    /// Resets only the attributes the variant redeclares over an ancestor,
    /// to the variant's own value.
    ///
    /// On a root variant nothing is overridden, so this is a no-op.
    pub fn restore_overridden_styles(
        &mut self,
        registry: &DefaultsRegistry,
    ) -> Result<AttrSet, UnknownVariant> {
        let own = registry.own_defaults(self.variant())?;
        let overrides = registry.overrides(self.variant())?;
        let changed = self.restore_from(own, overrides);
        debug!(variant = ?self.variant(), ?changed, "restored overridden styles");
        Ok(changed)
    }

    fn restore_from(&mut self, table: &DefaultsTable, attrs: AttrSet) -> AttrSet {
        let mut changed = AttrSet::empty();
        for value in table.values() {
            let attr = value.attr();
            if attrs.contains_attr(attr) && self.set_attr(value.clone()) {
                changed.insert_attr(attr);
            }
        }
        changed
    }
}
