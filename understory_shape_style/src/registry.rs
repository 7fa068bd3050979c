// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default-style registry.
//!
//! This module provides [`DefaultsRegistry`], which maps each shape variant to
//! its own declared defaults and to the resolved view layered over its
//! ancestors.

use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::attr::{AttrSet, StyleAttr};
use crate::log::debug;
use crate::table::DefaultsTable;

/// A handle identifying a declared shape variant.
///
/// Handles are only meaningful for the registry that issued them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantId(u16);

impl VariantId {
    /// Creates a variant handle from a raw index.
    ///
    /// This is typically called by [`DefaultsRegistry::declare_defaults`]
    /// rather than directly.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VariantId").field(&self.0).finish()
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariantId({})", self.0)
    }
}

/// Error returned when a variant has no default table in the registry.
///
/// This means the variant was never declared here (or was declared in a
/// different registry). Registries are expected to be fully populated before
/// any shape exists, so this indicates a programming error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant {
    /// The variant that was looked up.
    pub variant: VariantId,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing default table for {}", self.variant)
    }
}

impl core::error::Error for UnknownVariant {}

/// One declared variant.
#[derive(Debug)]
struct VariantEntry {
    name: &'static str,
    /// Defaults declared directly by this variant.
    own: DefaultsTable,
    /// `own` layered over the parent's resolved table.
    resolved: DefaultsTable,
    /// Attributes in `own` that an ancestor also declares.
    overrides: AttrSet,
}

/// Registry of per-variant default-style tables.
///
/// Each variant declares its own defaults and names its parent; the
/// registry resolves the layered view once, at declaration time, so lookups
/// at construction and reset time are O(1). Parents must be declared before
/// their children.
///
/// # Example
///
/// ```rust
/// use understory_shape_style::{DefaultsRegistry, DefaultsTable, StyleAttr, StyleValue};
///
/// let mut registry = DefaultsRegistry::new();
/// let shape = registry.declare_defaults("Shape", None, DefaultsTable::shape_base());
/// let bar = registry.declare_defaults(
///     "Bar",
///     Some(shape),
///     DefaultsTable::new().with(StyleValue::StrokeWidth(2.0)),
/// );
///
/// let resolved = registry.resolve(bar).unwrap();
/// assert_eq!(resolved.get(StyleAttr::StrokeWidth), Some(&StyleValue::StrokeWidth(2.0)));
/// assert!(resolved.contains(StyleAttr::Fill));
///
/// assert!(registry.own_keys(bar).unwrap().contains_attr(StyleAttr::StrokeWidth));
/// assert!(!registry.own_keys(bar).unwrap().contains_attr(StyleAttr::Fill));
/// assert!(registry.is_override(bar, StyleAttr::StrokeWidth).unwrap());
/// ```
#[derive(Default)]
pub struct DefaultsRegistry {
    variants: Vec<VariantEntry>,
    by_name: HashMap<&'static str, VariantId>,
}

impl DefaultsRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variant with its own defaults, layered over `parent`.
    ///
    /// A variant without a parent is a root and layers over an empty table.
    ///
    /// # Panics
    ///
    /// Panics if a variant with the same name is already declared, if
    /// `parent` was not declared in this registry, or if more than 65,535
    /// variants are declared.
    pub fn declare_defaults(
        &mut self,
        name: &'static str,
        parent: Option<VariantId>,
        own: DefaultsTable,
    ) -> VariantId {
        assert!(
            !self.by_name.contains_key(name),
            "Variant '{name}' is already declared"
        );
        assert!(
            self.variants.len() < u16::MAX as usize,
            "Too many variants declared (max {})",
            u16::MAX
        );

        let (resolved, overrides) = match parent {
            Some(parent_id) => {
                let parent_entry = self
                    .entry(parent_id)
                    .unwrap_or_else(|| panic!("Parent {parent_id} of '{name}' is not declared"));
                (
                    own.layered_over(&parent_entry.resolved),
                    own.keys() & parent_entry.resolved.keys(),
                )
            }
            None => (own.clone(), AttrSet::empty()),
        };

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = VariantId::new(self.variants.len() as u16);

        debug!(
            variant = name,
            ?parent,
            own = ?own.keys(),
            ?overrides,
            "declared shape defaults"
        );

        self.variants.push(VariantEntry {
            name,
            own,
            resolved,
            overrides,
        });
        self.by_name.insert(name, id);
        id
    }

    /// Returns the effective defaults of `variant`: its own table layered
    /// over every ancestor's, most-derived first.
    pub fn resolve(&self, variant: VariantId) -> Result<&DefaultsTable, UnknownVariant> {
        self.lookup(variant).map(|entry| &entry.resolved)
    }

    /// Returns the defaults `variant` declared directly.
    pub fn own_defaults(&self, variant: VariantId) -> Result<&DefaultsTable, UnknownVariant> {
        self.lookup(variant).map(|entry| &entry.own)
    }

    /// Returns the attributes `variant` declared directly, excluding
    /// inherited ones.
    pub fn own_keys(&self, variant: VariantId) -> Result<AttrSet, UnknownVariant> {
        self.lookup(variant).map(|entry| entry.own.keys())
    }

    /// Returns the attributes `variant` redeclares over an ancestor.
    ///
    /// Always empty for a root variant.
    pub fn overrides(&self, variant: VariantId) -> Result<AttrSet, UnknownVariant> {
        self.lookup(variant).map(|entry| entry.overrides)
    }

    /// Returns `true` if `attr` is declared both by `variant` itself and by
    /// one of its ancestors.
    pub fn is_override(&self, variant: VariantId, attr: StyleAttr) -> Result<bool, UnknownVariant> {
        self.overrides(variant)
            .map(|overrides| overrides.contains_attr(attr))
    }

    /// Returns the number of declared variants.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if no variants are declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[inline]
    fn entry(&self, variant: VariantId) -> Option<&VariantEntry> {
        self.variants.get(variant.index() as usize)
    }

    #[inline]
    fn lookup(&self, variant: VariantId) -> Result<&VariantEntry, UnknownVariant> {
        self.entry(variant).ok_or(UnknownVariant { variant })
    }
}

impl fmt::Debug for DefaultsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultsRegistry")
            .field("count", &self.variants.len())
            .field(
                "variants",
                &self.variants.iter().map(|e| e.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
