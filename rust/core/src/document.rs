// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh document model
//!
//! Typed records accumulated by the grammar parsers. All sequences are
//! append-only and preserve source order; face triplets reference them with
//! 1-based indices, so `0` is free to mean "field not supplied" for the
//! optional texture-coordinate and normal slots.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Component type for geometric values.
pub type Value = f32;

/// Component type for 1-based element indices.
pub type Index = u32;

/// Geometric vertex (`v` statement).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub x: Value,
    pub y: Value,
    pub z: Value,
    /// Vertex weight, defaults to 1.0 when the statement has 3 arguments.
    pub w: Value,
}

/// Normal vector (`vn` statement). Not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Normal {
    pub x: Value,
    pub y: Value,
    pub z: Value,
}

/// Texture coordinate (`vt` statement). Omitted `v`/`w` default to 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Texcoord {
    pub u: Value,
    pub v: Value,
    pub w: Value,
}

/// One `v/vt/vn` reference of a face statement.
///
/// The vertex index is always present and non-zero. The texture-coordinate
/// and normal indices use `0` as the sentinel for "not supplied".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triplet {
    pub v: Index,
    pub vt: Index,
    pub vn: Index,
}

impl Triplet {
    pub const ABSENT: Index = 0;

    /// Texture-coordinate index, or `None` when the field was not supplied.
    #[inline]
    pub fn texcoord(&self) -> Option<Index> {
        (self.vt != Self::ABSENT).then_some(self.vt)
    }

    /// Normal index, or `None` when the field was not supplied.
    #[inline]
    pub fn normal(&self) -> Option<Index> {
        (self.vn != Self::ABSENT).then_some(self.vn)
    }
}

/// Triangular face (`f` statement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    pub triplets: [Triplet; 3],
}

/// Named element grouping opened by an `o` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object {
    /// Object name, unique within a document.
    pub name: String,
    /// 1-based positions of the faces that belong to this object.
    pub faces: Vec<Index>,
}

/// Material definition from the MTL dialect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    pub name: String,
    /// Ambient reflectivity (`Ka`).
    pub ka: [Value; 3],
    /// Diffuse reflectivity (`Kd`).
    pub kd: [Value; 3],
    /// Specular reflectivity (`Ks`).
    pub ks: [Value; 3],
    /// Transmission filter (`Tf`).
    pub tf: [Value; 3],
    /// Illumination model identifier (`illum`).
    pub illumination_model: u32,
    /// Ambient texture map path (`map_Ka`).
    pub map_ka: String,
    /// Diffuse texture map path (`map_Kd`).
    pub map_kd: String,
    /// Specular texture map path (`map_Ks`).
    pub map_ks: String,
}

impl Material {
    /// A material with the format's default reflectivities and the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ka: [0.2, 0.2, 0.2],
            kd: [0.8, 0.8, 0.8],
            ks: [1.0, 1.0, 1.0],
            tf: [0.0, 0.0, 0.0],
            illumination_model: 0,
            map_ka: String::new(),
            map_kd: String::new(),
            map_ks: String::new(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::named(String::new())
    }
}

/// Mesh data parsed from an OBJ buffer.
///
/// Owned exclusively by the parse call that produced it; sequence order is
/// the order of appearance in the input and is observable through 1-based
/// face indices.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjDocument {
    /// Geometric vertices (`v` statements).
    pub vertices: Vec<Vertex>,
    /// Normal vectors (`vn` statements).
    pub normals: Vec<Normal>,
    /// Texture coordinates (`vt` statements).
    pub texcoords: Vec<Texcoord>,
    /// Triangular faces (`f` statements).
    pub faces: Vec<Face>,
    /// Named objects (`o` statements), in document order.
    pub objects: Vec<Object>,
}

impl ObjDocument {
    /// True when no geometry statement was accepted.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.normals.is_empty()
            && self.texcoords.is_empty()
            && self.faces.is_empty()
    }
}

/// Materials parsed from an MTL buffer, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MtlDocument {
    pub materials: Vec<Material>,
}
