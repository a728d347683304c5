// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ grammar parser
//!
//! Consumes the tokenizer's per-line output, dispatches on the statement tag
//! and accumulates an [`ObjDocument`]. Two failure modes are exposed:
//! [`parse_obj`] stops at the first violation, [`parse_obj_lossy`] skips the
//! offending statement, records a diagnostic and keeps going.

use rustc_hash::FxHashSet;

use crate::config::ParseConfig;
use crate::document::{Face, Index, Normal, ObjDocument, Object, Texcoord, Triplet, Value, Vertex};
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::lexer::{lex_line, Token, TokenBuf};

/// Statement tags of the OBJ dialect, a closed enumeration so tag handling is
/// exhaustiveness-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    /// `v x y z [w]`
    Vertex,
    /// `vn x y z`
    Normal,
    /// `vt u [v] [w]`
    Texcoord,
    /// `f v/vt/vn v/vt/vn v/vt/vn`
    Face,
    /// `o name`
    Object,
    /// Accepted and discarded without effect.
    Ignored,
    Unknown,
}

impl Tag {
    fn classify(text: &str) -> Self {
        match text {
            "v" => Self::Vertex,
            "vn" => Self::Normal,
            "vt" => Self::Texcoord,
            "f" => Self::Face,
            "o" => Self::Object,
            "g" | "s" | "usemtl" | "mtllib" | "call" | "csh" => Self::Ignored,
            _ => Self::Unknown,
        }
    }
}

/// Drive a statement handler over every non-empty line, stopping at the first
/// lexical or grammatical error.
pub(crate) fn for_each_line<'a>(
    source: &'a str,
    mut handle: impl FnMut(&[Token<'a>]) -> Result<()>,
) -> Result<()> {
    let mut tokens = TokenBuf::new();
    let mut pos = 0;
    while pos < source.len() {
        tokens.clear();
        pos = lex_line(source, pos, &mut tokens)?;
        if tokens.is_empty() {
            continue;
        }
        handle(&tokens)?;
    }
    Ok(())
}

/// Best-effort variant of [`for_each_line`]: a failed line is recorded and
/// skipped, and scanning resumes at the start of the next physical line.
pub(crate) fn for_each_line_lossy<'a>(
    source: &'a str,
    diagnostics: &mut Vec<Diagnostic>,
    mut handle: impl FnMut(&[Token<'a>]) -> Result<()>,
) {
    let bytes = source.as_bytes();
    let mut tokens = TokenBuf::new();
    let mut pos = 0;
    while pos < source.len() {
        tokens.clear();
        match lex_line(source, pos, &mut tokens) {
            Ok(next) => pos = next,
            Err(diag) => {
                // Resynchronize past the malformed byte's line.
                pos = match memchr::memchr(b'\n', &bytes[diag.offset..]) {
                    Some(i) => diag.offset + i + 1,
                    None => source.len(),
                };
                diagnostics.push(diag);
                continue;
            }
        }
        if tokens.is_empty() {
            continue;
        }
        if let Err(diag) = handle(&tokens) {
            diagnostics.push(diag);
        }
    }
}

/// Parse a text buffer as an OBJ document, stopping at the first violation.
pub fn parse_obj(source: &str, config: &ParseConfig) -> Result<ObjDocument> {
    let mut parser = ObjParser::new(source, config);
    for_each_line(source, |tokens| parser.statement(tokens))?;
    Ok(parser.finish())
}

/// Parse a text buffer as an OBJ document in best-effort mode.
///
/// Returns the partially-built document together with one diagnostic per
/// rejected statement. A rejected statement never corrupts the effects of
/// the statements accepted before it.
pub fn parse_obj_lossy(source: &str, config: &ParseConfig) -> (ObjDocument, Vec<Diagnostic>) {
    let mut parser = ObjParser::new(source, config);
    let mut diagnostics = Vec::new();
    for_each_line_lossy(source, &mut diagnostics, |tokens| parser.statement(tokens));
    (parser.finish(), diagnostics)
}

struct ObjParser<'a> {
    source: &'a str,
    doc: ObjDocument,
    /// Names already claimed by an `o` statement.
    object_names: FxHashSet<&'a str>,
}

impl<'a> ObjParser<'a> {
    fn new(source: &'a str, config: &ParseConfig) -> Self {
        let doc = ObjDocument {
            vertices: Vec::with_capacity(config.expected_vertex_count),
            normals: Vec::with_capacity(config.expected_vertex_count),
            texcoords: Vec::with_capacity(config.expected_vertex_count),
            faces: Vec::with_capacity(config.expected_triangle_count),
            objects: Vec::with_capacity(config.expected_object_count),
        };
        Self {
            source,
            doc,
            object_names: FxHashSet::default(),
        }
    }

    fn finish(self) -> ObjDocument {
        self.doc
    }

    fn diag(&self, kind: DiagnosticKind, token: &Token<'a>) -> Diagnostic {
        Diagnostic::new(kind, self.source, token.offset())
    }

    /// Dispatch one statement line. `tokens` is never empty; the first token
    /// is the tag, the rest are its arguments.
    fn statement(&mut self, tokens: &[Token<'a>]) -> Result<()> {
        let tag = &tokens[0];
        let args = &tokens[1..];
        match Tag::classify(tag.text()) {
            Tag::Vertex => self.vertex(tag, args),
            Tag::Normal => self.normal(tag, args),
            Tag::Texcoord => self.texcoord(tag, args),
            Tag::Face => self.face(tag, args),
            Tag::Object => self.object(tag, args),
            Tag::Ignored => Ok(()),
            Tag::Unknown => Err(self.diag(DiagnosticKind::UnknownTag, tag)),
        }
    }

    /// `v x y z [w]`, weight defaults to 1.0.
    fn vertex(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.len() != 3 && args.len() != 4 {
            return Err(self.diag(DiagnosticKind::VertexArgCount, tag));
        }
        let mut v: [Value; 4] = [0.0, 0.0, 0.0, 1.0];
        for (slot, arg) in v.iter_mut().zip(args) {
            *slot = self.value(arg)?;
        }
        self.doc.vertices.push(Vertex {
            x: v[0],
            y: v[1],
            z: v[2],
            w: v[3],
        });
        Ok(())
    }

    /// `vn x y z`. The vector is not required to be unit length.
    fn normal(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.len() != 3 {
            return Err(self.diag(DiagnosticKind::NormalArgCount, tag));
        }
        let mut n: [Value; 3] = [0.0; 3];
        for (slot, arg) in n.iter_mut().zip(args) {
            *slot = self.value(arg)?;
        }
        self.doc.normals.push(Normal {
            x: n[0],
            y: n[1],
            z: n[2],
        });
        Ok(())
    }

    /// `vt u [v] [w]`, omitted components default to 0.0.
    fn texcoord(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.is_empty() || args.len() > 3 {
            return Err(self.diag(DiagnosticKind::TexcoordArgCount, tag));
        }
        let mut t: [Value; 3] = [0.0; 3];
        for (slot, arg) in t.iter_mut().zip(args) {
            *slot = self.value(arg)?;
        }
        self.doc.texcoords.push(Texcoord {
            u: t[0],
            v: t[1],
            w: t[2],
        });
        Ok(())
    }

    /// `f v/vt/vn v/vt/vn v/vt/vn`. Triangles only; polygonal faces are
    /// rejected rather than triangulated.
    fn face(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.len() != 3 {
            return Err(self.diag(DiagnosticKind::FaceArgCount, tag));
        }
        let face = Face {
            triplets: [
                self.triplet(&args[0])?,
                self.triplet(&args[1])?,
                self.triplet(&args[2])?,
            ],
        };
        self.doc.faces.push(face);
        // Faces accumulate into the object opened last, if any.
        if let Some(object) = self.doc.objects.last_mut() {
            object.faces.push(self.doc.faces.len() as Index);
        }
        Ok(())
    }

    /// `o name`; names must be unique within the document.
    fn object(&mut self, tag: &Token<'a>, args: &[Token<'a>]) -> Result<()> {
        if args.len() != 1 {
            return Err(self.diag(DiagnosticKind::ObjectArgCount, tag));
        }
        let name = args[0].text();
        if !self.object_names.insert(name) {
            return Err(self.diag(DiagnosticKind::DuplicateObjectName, &args[0]));
        }
        self.doc.objects.push(Object {
            name: name.to_string(),
            faces: Vec::new(),
        });
        Ok(())
    }

    /// Parse a whole token as a floating-point value; partial conversions are
    /// rejected.
    fn value(&self, token: &Token<'a>) -> Result<Value> {
        fast_float::parse(token.text())
            .map_err(|_| self.diag(DiagnosticKind::InvalidArgFormat, token))
    }

    /// Split a face argument on `/` into its `v/vt/vn` triplet.
    ///
    /// Exactly two separators are required. The vertex index is mandatory,
    /// non-zero and range-checked against the vertices seen so far; the other
    /// two segments may be empty (the `0` sentinel) but must otherwise parse
    /// in their entirety.
    fn triplet(&self, token: &Token<'a>) -> Result<Triplet> {
        let text = token.text();
        let invalid = || self.diag(DiagnosticKind::InvalidTripletFormat, token);

        let mut segments = text.split('/');
        let (v, vt, vn) = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(v), Some(vt), Some(vn), None) => (v, vt, vn),
            _ => return Err(invalid()),
        };

        let v = lexical_core::parse::<Index>(v.as_bytes()).map_err(|_| invalid())?;
        if v == 0 {
            return Err(invalid());
        }
        if v as usize > self.doc.vertices.len() {
            return Err(self.diag(DiagnosticKind::IndexOutOfRange, token));
        }

        let vt = if vt.is_empty() {
            Triplet::ABSENT
        } else {
            lexical_core::parse::<Index>(vt.as_bytes()).map_err(|_| invalid())?
        };
        let vn = if vn.is_empty() {
            Triplet::ABSENT
        } else {
            lexical_core::parse::<Index>(vn.as_bytes()).map_err(|_| invalid())?
        };

        Ok(Triplet { v, vt, vn })
    }
}
