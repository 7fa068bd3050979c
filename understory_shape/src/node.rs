// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene-graph node state shared by shapes.

/// Per-node render state.
///
/// The dirty flag signals that the node's rendered output is stale. Style
/// mutations only ever arm it; the render pipeline clears it after a
/// successful pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    dirty: bool,
}

impl NodeState {
    /// Creates a clean node state.
    #[must_use]
    pub const fn new() -> Self {
        Self { dirty: false }
    }

    /// Returns `true` if the node needs to be re-rendered.
    #[must_use]
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the node as needing a re-render.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the dirty flag after the node has been rendered.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clean_and_toggles() {
        let mut node = NodeState::new();
        assert!(!node.is_dirty());

        node.mark_dirty();
        node.mark_dirty();
        assert!(node.is_dirty());

        node.clear_dirty();
        assert!(!node.is_dirty());
    }
}
