// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MTL grammar parser integration tests

use obj_lite_core::{parse_mtl, parse_mtl_lossy, DiagnosticKind, Material, ParseConfig};

fn parse(source: &str) -> Result<obj_lite_core::MtlDocument, obj_lite_core::Diagnostic> {
    parse_mtl(source, &ParseConfig::default())
}

#[test]
fn single_material() {
    let doc = parse("newmtl my_custom_material\n").unwrap();
    assert_eq!(doc.materials, vec![Material::named("my_custom_material")]);
}

#[test]
fn multi_material() {
    let source = "newmtl my_custom_material_001\n\
                  newmtl my_custom_material_002\n\
                  newmtl my_custom_material_003\n";
    let doc = parse(source).unwrap();
    let expected = vec![
        Material::named("my_custom_material_001"),
        Material::named("my_custom_material_002"),
        Material::named("my_custom_material_003"),
    ];
    assert_eq!(doc.materials, expected);
}

#[test]
fn color_triples_bind_to_last_material() {
    let source = "newmtl first\n\
                  Ka 0.1 0.2 0.3\n\
                  newmtl second\n\
                  Kd 0.4 0.5 0.6\n\
                  Ks 0.7 0.8 0.9\n\
                  Tf 0.1 0.1 0.1\n";
    let doc = parse(source).unwrap();
    assert_eq!(doc.materials[0].ka, [0.1, 0.2, 0.3]);
    // `first` keeps its defaults for the rest.
    assert_eq!(doc.materials[0].kd, [0.8, 0.8, 0.8]);
    assert_eq!(doc.materials[1].kd, [0.4, 0.5, 0.6]);
    assert_eq!(doc.materials[1].ks, [0.7, 0.8, 0.9]);
    assert_eq!(doc.materials[1].tf, [0.1, 0.1, 0.1]);
}

#[test]
fn illumination_and_maps() {
    let source = "newmtl wood\n\
                  illum 2\n\
                  map_Ka textures/wood_ambient.png\n\
                  map_Kd textures/wood.png\n\
                  map_Ks textures/wood_spec.png\n";
    let doc = parse(source).unwrap();
    let m = &doc.materials[0];
    assert_eq!(m.illumination_model, 2);
    assert_eq!(m.map_ka, "textures/wood_ambient.png");
    assert_eq!(m.map_kd, "textures/wood.png");
    assert_eq!(m.map_ks, "textures/wood_spec.png");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let source = "# material library\n\nnewmtl m # inline comment\n\nKa 1 1 1\n";
    let doc = parse(source).unwrap();
    assert_eq!(doc.materials.len(), 1);
    assert_eq!(doc.materials[0].ka, [1.0, 1.0, 1.0]);
}

#[test]
fn newmtl_requires_one_argument() {
    let err = parse("newmtl\n").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::InvalidArgCount);
    let err = parse("newmtl a b\n").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::InvalidArgCount);
}

#[test]
fn attribute_before_newmtl() {
    let err = parse("Kd 0.5 0.5 0.5\n").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::AttributeOutsideMaterial);
    assert_eq!((err.line, err.column), (1, 1));
}

#[test]
fn lossy_mode_skips_bad_statements() {
    let source = "newmtl good\n\
                  Ka 0.1 0.2\n\
                  Kd 0.4 0.5 0.6\n\
                  shininess 12\n";
    let (doc, diagnostics) = parse_mtl_lossy(source, &ParseConfig::default());
    assert_eq!(doc.materials.len(), 1);
    assert_eq!(doc.materials[0].kd, [0.4, 0.5, 0.6]);
    // Rejected `Ka` keeps its default.
    assert_eq!(doc.materials[0].ka, [0.2, 0.2, 0.2]);
    let kinds: Vec<DiagnosticKind> = diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::InvalidArgCount, DiagnosticKind::UnknownTag]
    );
}
