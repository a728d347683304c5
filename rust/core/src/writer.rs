// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grammar writer
//!
//! Serializes documents back to the line grammar the parsers accept, so that
//! parse -> write -> parse round-trips. Absent triplet fields come out as
//! empty segments (`3//1`), objects as an `o` header followed by their faces.

use std::fmt::Write;

use rustc_hash::FxHashSet;

use crate::document::{Face, Index, MtlDocument, ObjDocument, Triplet};

/// Serialize an OBJ document to the statement grammar.
///
/// Faces claimed by an object are emitted under that object's `o` header, in
/// the object's face order; unclaimed faces come first.
pub fn write_obj(doc: &ObjDocument) -> String {
    let mut out = String::new();

    for v in &doc.vertices {
        // Weight is always written out so the round-trip is exact.
        let _ = writeln!(out, "v {} {} {} {}", v.x, v.y, v.z, v.w);
    }
    for n in &doc.normals {
        let _ = writeln!(out, "vn {} {} {}", n.x, n.y, n.z);
    }
    for t in &doc.texcoords {
        let _ = writeln!(out, "vt {} {} {}", t.u, t.v, t.w);
    }

    let claimed: FxHashSet<Index> = doc
        .objects
        .iter()
        .flat_map(|o| o.faces.iter().copied())
        .collect();

    for (i, face) in doc.faces.iter().enumerate() {
        if !claimed.contains(&((i + 1) as Index)) {
            write_face(&mut out, face);
        }
    }
    for object in &doc.objects {
        let _ = writeln!(out, "o {}", object.name);
        for &index in &object.faces {
            if let Some(face) = doc.faces.get(index as usize - 1) {
                write_face(&mut out, face);
            }
        }
    }

    out
}

fn write_face(out: &mut String, face: &Face) {
    let _ = write!(out, "f");
    for triplet in &face.triplets {
        let _ = write!(out, " ");
        write_triplet(out, triplet);
    }
    let _ = writeln!(out);
}

fn write_triplet(out: &mut String, t: &Triplet) {
    let _ = write!(out, "{}/", t.v);
    if t.vt != Triplet::ABSENT {
        let _ = write!(out, "{}", t.vt);
    }
    let _ = write!(out, "/");
    if t.vn != Triplet::ABSENT {
        let _ = write!(out, "{}", t.vn);
    }
}

/// Serialize an MTL document to the statement grammar.
///
/// Attributes that still hold their defaults are written anyway; re-parsing
/// produces an equal document either way. Empty texture-map paths are
/// skipped, an empty path cannot be expressed as a token.
pub fn write_mtl(doc: &MtlDocument) -> String {
    let mut out = String::new();
    for m in &doc.materials {
        let _ = writeln!(out, "newmtl {}", m.name);
        let _ = writeln!(out, "Ka {} {} {}", m.ka[0], m.ka[1], m.ka[2]);
        let _ = writeln!(out, "Kd {} {} {}", m.kd[0], m.kd[1], m.kd[2]);
        let _ = writeln!(out, "Ks {} {} {}", m.ks[0], m.ks[1], m.ks[2]);
        let _ = writeln!(out, "Tf {} {} {}", m.tf[0], m.tf[1], m.tf[2]);
        let _ = writeln!(out, "illum {}", m.illumination_model);
        if !m.map_ka.is_empty() {
            let _ = writeln!(out, "map_Ka {}", m.map_ka);
        }
        if !m.map_kd.is_empty() {
            let _ = writeln!(out, "map_Kd {}", m.map_kd);
        }
        if !m.map_ks.is_empty() {
            let _ = writeln!(out, "map_Ks {}", m.map_ks);
        }
    }
    out
}
