// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Write-then-reparse round-trip tests

use approx::assert_relative_eq;
use obj_lite_core::{
    parse_mtl, parse_obj, write_mtl, write_obj, MtlDocument, ObjDocument, ParseConfig,
};

fn reparse_obj(doc: &ObjDocument) -> ObjDocument {
    let text = write_obj(doc);
    parse_obj(&text, &ParseConfig::default()).expect("writer output must reparse")
}

fn assert_documents_match(a: &ObjDocument, b: &ObjDocument) {
    assert_eq!(a.vertices.len(), b.vertices.len());
    for (va, vb) in a.vertices.iter().zip(&b.vertices) {
        assert_relative_eq!(va.x, vb.x, max_relative = 1e-6);
        assert_relative_eq!(va.y, vb.y, max_relative = 1e-6);
        assert_relative_eq!(va.z, vb.z, max_relative = 1e-6);
        assert_relative_eq!(va.w, vb.w, max_relative = 1e-6);
    }
    assert_eq!(a.normals.len(), b.normals.len());
    for (na, nb) in a.normals.iter().zip(&b.normals) {
        assert_relative_eq!(na.x, nb.x, max_relative = 1e-6);
        assert_relative_eq!(na.y, nb.y, max_relative = 1e-6);
        assert_relative_eq!(na.z, nb.z, max_relative = 1e-6);
    }
    assert_eq!(a.texcoords.len(), b.texcoords.len());
    for (ta, tb) in a.texcoords.iter().zip(&b.texcoords) {
        assert_relative_eq!(ta.u, tb.u, max_relative = 1e-6);
        assert_relative_eq!(ta.v, tb.v, max_relative = 1e-6);
        assert_relative_eq!(ta.w, tb.w, max_relative = 1e-6);
    }
    assert_eq!(a.faces, b.faces);
    assert_eq!(a.objects, b.objects);
}

#[test]
fn obj_roundtrip_with_single_object() {
    let source = "v 0.0 0.0 0.0\n\
                  v 1.5 0.25 0.0\n\
                  v 0.0 1.0 2.75\n\
                  vn 0.0 0.0 1.0\n\
                  vn 0.0 1.0 0.0\n\
                  vt 0.5 0.5\n\
                  vt 0.25 0.75 1.0\n\
                  o tetra\n\
                  f 1/1/1 2/2/2 3/1/1\n\
                  f 3// 2/1/ 1//2\n";
    let doc = parse_obj(source, &ParseConfig::default()).unwrap();
    assert!(!doc.is_empty());
    assert_eq!(doc.objects.len(), 1);

    let reparsed = reparse_obj(&doc);
    assert_documents_match(&doc, &reparsed);
}

#[test]
fn obj_roundtrip_with_unclaimed_faces() {
    // One face before any object header, two inside it.
    let source = "v 0 0 0\nv 0 0 1\nv 0 1 0\n\
                  f 1// 2// 3//\n\
                  o part\n\
                  f 3// 1// 2//\n\
                  f 2// 3// 1//\n";
    let doc = parse_obj(source, &ParseConfig::default()).unwrap();
    let reparsed = reparse_obj(&doc);
    assert_documents_match(&doc, &reparsed);
}

#[test]
fn obj_roundtrip_is_stable() {
    // Writing a reparsed document reproduces the text exactly.
    let source = "v 1 2 3 1\nvn 0 0 1\nvt 0.5 0 0\no cube\nf 1/1/1 1/1/1 1/1/1\n";
    let doc = parse_obj(source, &ParseConfig::default()).unwrap();
    let text = write_obj(&doc);
    assert_eq!(text, source);
}

#[test]
fn mtl_roundtrip() {
    let source = "newmtl brushed_steel\n\
                  Ka 0.25 0.25 0.25\n\
                  Kd 0.4 0.4 0.45\n\
                  Ks 0.9 0.9 0.95\n\
                  Tf 0.0 0.0 0.0\n\
                  illum 2\n\
                  map_Kd textures/steel.png\n\
                  newmtl matte\n";
    let doc = parse_mtl(source, &ParseConfig::default()).unwrap();

    let text = write_mtl(&doc);
    let reparsed: MtlDocument = parse_mtl(&text, &ParseConfig::default()).unwrap();
    assert_eq!(doc, reparsed);
}
