// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # obj-lite Core Parser
//!
//! Table-driven Wavefront OBJ/MTL parser producing an in-memory mesh
//! document plus structured diagnostics.
//!
//! ## Overview
//!
//! Parsing is a two-stage pipeline over a caller-supplied buffer:
//!
//! - **Lexing**: a deterministic finite automaton over byte equivalence
//!   classes emits zero-copy token spans, stripping whitespace and comments
//! - **Grammar**: a tag-dispatch parser turns each line of tokens into typed
//!   mesh records, with whole-token numeric validation via
//!   [fast-float](https://docs.rs/fast-float) and
//!   [lexical-core](https://docs.rs/lexical-core)
//!
//! Both stages are synchronous and allocation-light; the automaton tables
//! are built at compile time and shared read-only by all parse calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use obj_lite_core::{parse_obj, ParseConfig};
//!
//! let source = "v 0 0 0\nv 0 0 1\nv 0 1 0\nf 1// 2// 3//\n";
//! let doc = parse_obj(source, &ParseConfig::default()).unwrap();
//! assert_eq!(doc.vertices.len(), 3);
//! assert_eq!(doc.faces.len(), 1);
//! ```
//!
//! ## Failure Modes
//!
//! Every parser comes in two shapes: fail-fast ([`parse_obj`], [`parse_mtl`])
//! returns the first [`Diagnostic`]; best-effort ([`parse_obj_lossy`],
//! [`parse_mtl_lossy`]) skips rejected statements and returns the partial
//! document together with the full diagnostic list.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for document types

pub mod config;
pub mod document;
pub mod error;
pub mod lexer;
pub mod mtl;
pub mod parser;
pub mod writer;

pub use config::{ExtensionFlags, ParseConfig};
pub use document::{
    Face, Index, Material, MtlDocument, Normal, ObjDocument, Object, Texcoord, Triplet, Value,
    Vertex,
};
pub use error::{Diagnostic, DiagnosticKind, Result};
pub use lexer::{lex, lex_line, Token, TokenBuf};
pub use mtl::{parse_mtl, parse_mtl_lossy};
pub use parser::{parse_obj, parse_obj_lossy};
pub use writer::{write_mtl, write_obj};
