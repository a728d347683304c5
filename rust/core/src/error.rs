// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parse diagnostics
//!
//! Every failure is a [`Diagnostic`]: an error kind plus the source position
//! of the offending token. Messages derive from the kind alone, so error text
//! is stable and testable. All errors are deterministic functions of the
//! input; there is nothing transient to retry.

use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error taxonomy shared by the OBJ and MTL dialects.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("Multiple object names.")]
    DuplicateObjectName,

    #[error("Index out of valid range.")]
    IndexOutOfRange,

    /// Generic arity error, used by the MTL dialect.
    #[error("Invalid arguments count.")]
    InvalidArgCount,

    #[error("Invalid argument format.")]
    InvalidArgFormat,

    #[error("Tag 'v' requires 3 or 4 arguments.")]
    VertexArgCount,

    #[error("Tag 'vn' requires 3 arguments.")]
    NormalArgCount,

    #[error("Tag 'vt' requires 1 to 3 arguments.")]
    TexcoordArgCount,

    #[error("Tag 'f' requires 3 arguments.")]
    FaceArgCount,

    #[error("Tag 'o' requires one argument.")]
    ObjectArgCount,

    #[error("Invalid triplet format.")]
    InvalidTripletFormat,

    #[error("Unknown tag.")]
    UnknownTag,

    /// Byte outside every equivalence class of the lexer.
    #[error("Invalid character.")]
    InvalidCharacter,

    /// `Ka`/`Kd`/`Ks`/`Tf`/`illum`/`map_*` before any `newmtl`.
    #[error("Material attribute before 'newmtl'.")]
    AttributeOutsideMaterial,
}

/// A parse error with its source position.
///
/// `offset` is the 0-based byte index into the input buffer; `line` and
/// `column` are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: {kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Diagnostic {
    /// Build a diagnostic for the byte at `offset` in `source`.
    pub(crate) fn new(kind: DiagnosticKind, source: &str, offset: usize) -> Self {
        let (line, column) = crate::lexer::line_col(source, offset);
        Self {
            kind,
            offset,
            line,
            column,
        }
    }
}
