// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MTL grammar parser
//!
//! Same lexer and line dispatch as the OBJ parser, over the material
//! dialect: `newmtl` opens a material, the remaining statements set
//! attributes on the most recently opened one.

use crate::config::ParseConfig;
use crate::document::{Material, MtlDocument, Value};
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::lexer::Token;
use crate::parser::{for_each_line, for_each_line_lossy};

/// Statement tags of the MTL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    /// `newmtl name`
    NewMtl,
    /// `Ka r g b`
    Ambient,
    /// `Kd r g b`
    Diffuse,
    /// `Ks r g b`
    Specular,
    /// `Tf r g b`
    TransmissionFilter,
    /// `illum n`
    Illumination,
    /// `map_Ka path`
    AmbientMap,
    /// `map_Kd path`
    DiffuseMap,
    /// `map_Ks path`
    SpecularMap,
    Unknown,
}

impl Tag {
    fn classify(text: &str) -> Self {
        match text {
            "newmtl" => Self::NewMtl,
            "Ka" => Self::Ambient,
            "Kd" => Self::Diffuse,
            "Ks" => Self::Specular,
            "Tf" => Self::TransmissionFilter,
            "illum" => Self::Illumination,
            "map_Ka" => Self::AmbientMap,
            "map_Kd" => Self::DiffuseMap,
            "map_Ks" => Self::SpecularMap,
            _ => Self::Unknown,
        }
    }
}

/// Parse a text buffer as an MTL document, stopping at the first violation.
pub fn parse_mtl(source: &str, config: &ParseConfig) -> Result<MtlDocument> {
    let mut parser = MtlParser::new(source, config);
    for_each_line(source, |tokens| parser.statement(tokens))?;
    Ok(parser.finish())
}

/// Parse a text buffer as an MTL document in best-effort mode.
pub fn parse_mtl_lossy(source: &str, config: &ParseConfig) -> (MtlDocument, Vec<Diagnostic>) {
    let mut parser = MtlParser::new(source, config);
    let mut diagnostics = Vec::new();
    for_each_line_lossy(source, &mut diagnostics, |tokens| parser.statement(tokens));
    (parser.finish(), diagnostics)
}

struct MtlParser<'a> {
    source: &'a str,
    doc: MtlDocument,
}

impl<'a> MtlParser<'a> {
    fn new(source: &'a str, config: &ParseConfig) -> Self {
        Self {
            source,
            doc: MtlDocument {
                materials: Vec::with_capacity(config.expected_object_count),
            },
        }
    }

    fn finish(self) -> MtlDocument {
        self.doc
    }

    fn diag(&self, kind: DiagnosticKind, token: &Token<'a>) -> Diagnostic {
        Diagnostic::new(kind, self.source, token.offset())
    }

    fn statement(&mut self, tokens: &[Token<'a>]) -> Result<()> {
        let tag = &tokens[0];
        let args = &tokens[1..];
        match Tag::classify(tag.text()) {
            Tag::NewMtl => self.new_material(tag, args),
            Tag::Ambient => self.color(tag, args, |m| &mut m.ka),
            Tag::Diffuse => self.color(tag, args, |m| &mut m.kd),
            Tag::Specular => self.color(tag, args, |m| &mut m.ks),
            Tag::TransmissionFilter => self.color(tag, args, |m| &mut m.tf),
            Tag::Illumination => self.illumination(tag, args),
            Tag::AmbientMap => self.map(tag, args, |m| &mut m.map_ka),
            Tag::DiffuseMap => self.map(tag, args, |m| &mut m.map_kd),
            Tag::SpecularMap => self.map(tag, args, |m| &mut m.map_ks),
            Tag::Unknown => Err(self.diag(DiagnosticKind::UnknownTag, tag)),
        }
    }

    fn new_material(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.len() != 1 {
            return Err(self.diag(DiagnosticKind::InvalidArgCount, tag));
        }
        self.doc.materials.push(Material::named(args[0].text()));
        Ok(())
    }

    /// Attribute statements bind to the material opened last; before any
    /// `newmtl` there is nothing to bind to.
    fn open_material(&mut self, tag: &Token<'a>) -> Result<&mut Material> {
        if self.doc.materials.is_empty() {
            return Err(self.diag(DiagnosticKind::AttributeOutsideMaterial, tag));
        }
        let last = self.doc.materials.len() - 1;
        Ok(&mut self.doc.materials[last])
    }

    fn color(
        &mut self,
        tag: &Token<'a>,
        args: &[Token<'a>],
        field: impl Fn(&mut Material) -> &mut [Value; 3],
    ) -> Result<()> {
        if args.len() != 3 {
            return Err(self.diag(DiagnosticKind::InvalidArgCount, tag));
        }
        let mut rgb: [Value; 3] = [0.0; 3];
        for (slot, arg) in rgb.iter_mut().zip(args) {
            *slot = fast_float::parse(arg.text())
                .map_err(|_| self.diag(DiagnosticKind::InvalidArgFormat, arg))?;
        }
        *field(self.open_material(tag)?) = rgb;
        Ok(())
    }

    fn illumination(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.len() != 1 {
            return Err(self.diag(DiagnosticKind::InvalidArgCount, tag));
        }
        let model = lexical_core::parse::<u32>(args[0].text().as_bytes())
            .map_err(|_| self.diag(DiagnosticKind::InvalidArgFormat, &args[0]))?;
        self.open_material(tag)?.illumination_model = model;
        Ok(())
    }

    fn map(
        &mut self,
        tag: &Token<'a>,
        args: &[Token<'a>],
        field: impl Fn(&mut Material) -> &mut String,
    ) -> Result<()> {
        if args.len() != 1 {
            return Err(self.diag(DiagnosticKind::InvalidArgCount, tag));
        }
        let path = args[0].text().to_string();
        *field(self.open_material(tag)?) = path;
        Ok(())
    }
}
