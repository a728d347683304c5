// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extension flag set for the OBJ dialect.
///
/// Currently a placeholder; no extension changes parser behavior yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtensionFlags(u32);

impl ExtensionFlags {
    /// Strict standard grammar, no extensions.
    pub const STANDARD: Self = Self(0);
    /// Per-vertex color components on `v` statements (reserved, not yet
    /// interpreted).
    pub const VERTEX_COLOR: Self = Self(1);

    /// Whether every flag in `other` is set.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Configuration for a parse call.
///
/// The element-count hints only pre-size the output sequences; they never
/// limit how much a document can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseConfig {
    /// Expected number of objects.
    pub expected_object_count: usize,
    /// Expected number of vertices.
    pub expected_vertex_count: usize,
    /// Expected number of triangles.
    pub expected_triangle_count: usize,
    /// Enabled dialect extensions.
    pub extensions: ExtensionFlags,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            expected_object_count: 1,
            expected_vertex_count: 10_000,
            expected_triangle_count: 10_000,
            extensions: ExtensionFlags::STANDARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_set_operations() {
        let flags = ExtensionFlags::STANDARD.union(ExtensionFlags::VERTEX_COLOR);
        assert!(flags.contains(ExtensionFlags::VERTEX_COLOR));
        assert!(flags.contains(ExtensionFlags::STANDARD));
        assert!(!ExtensionFlags::STANDARD.contains(ExtensionFlags::VERTEX_COLOR));
    }
}
