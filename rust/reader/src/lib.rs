// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # obj-lite Reader
//!
//! Thin file-loading facade over [`obj_lite_core`]: memory-maps a file,
//! validates it as UTF-8 and hands the whole buffer to the core parsers.
//! The core itself never performs I/O.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use thiserror::Error;
use tracing::debug;

use obj_lite_core::{
    parse_mtl, parse_mtl_lossy, parse_obj, parse_obj_lossy, Diagnostic, MtlDocument, ObjDocument,
    ParseConfig,
};

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a mesh file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Parse error: {0}")]
    Parse(#[from] Diagnostic),
}

/// Load and parse an OBJ file, stopping at the first violation.
pub fn load_obj(path: impl AsRef<Path>, config: &ParseConfig) -> Result<ObjDocument> {
    with_mapped(path.as_ref(), |text| {
        let doc = parse_obj(text, config)?;
        debug!(
            vertices = doc.vertices.len(),
            faces = doc.faces.len(),
            objects = doc.objects.len(),
            "parsed OBJ file"
        );
        Ok(doc)
    })
}

/// Load and parse an OBJ file in best-effort mode.
pub fn load_obj_lossy(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<(ObjDocument, Vec<Diagnostic>)> {
    with_mapped(path.as_ref(), |text| {
        let (doc, diagnostics) = parse_obj_lossy(text, config);
        debug!(
            vertices = doc.vertices.len(),
            faces = doc.faces.len(),
            diagnostics = diagnostics.len(),
            "parsed OBJ file (best-effort)"
        );
        Ok((doc, diagnostics))
    })
}

/// Load and parse an MTL file, stopping at the first violation.
pub fn load_mtl(path: impl AsRef<Path>, config: &ParseConfig) -> Result<MtlDocument> {
    with_mapped(path.as_ref(), |text| {
        let doc = parse_mtl(text, config)?;
        debug!(materials = doc.materials.len(), "parsed MTL file");
        Ok(doc)
    })
}

/// Load and parse an MTL file in best-effort mode.
pub fn load_mtl_lossy(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<(MtlDocument, Vec<Diagnostic>)> {
    with_mapped(path.as_ref(), |text| {
        let (doc, diagnostics) = parse_mtl_lossy(text, config);
        debug!(
            materials = doc.materials.len(),
            diagnostics = diagnostics.len(),
            "parsed MTL file (best-effort)"
        );
        Ok((doc, diagnostics))
    })
}

/// Map `path` and run `f` over its contents as text.
///
/// Empty files cannot be mapped on every platform, so they bypass the mmap.
fn with_mapped<T>(path: &Path, f: impl FnOnce(&str) -> Result<T>) -> Result<T> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return f("");
    }
    let mmap = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&mmap)?;
    f(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_obj_from_disk() {
        let file = write_temp("v 0 0 0\nv 0 0 1\nv 0 1 0\nf 1// 2// 3//\n");
        let doc = load_obj(file.path(), &ParseConfig::default()).unwrap();
        assert_eq!(doc.vertices.len(), 3);
        assert_eq!(doc.faces.len(), 1);
    }

    #[test]
    fn load_obj_lossy_reports_diagnostics() {
        let file = write_temp("v 0 0 0\nv nope 0 1\n");
        let (doc, diagnostics) = load_obj_lossy(file.path(), &ParseConfig::default()).unwrap();
        assert_eq!(doc.vertices.len(), 1);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn load_mtl_from_disk() {
        let file = write_temp("newmtl steel\nKa 0.2 0.2 0.2\n");
        let doc = load_mtl(file.path(), &ParseConfig::default()).unwrap();
        assert_eq!(doc.materials.len(), 1);
    }

    #[test]
    fn load_mtl_lossy_keeps_valid_statements() {
        let file = write_temp("newmtl steel\nKa 0.2 0.2\nKd 0.8 0.8 0.8\n");
        let (doc, diagnostics) = load_mtl_lossy(file.path(), &ParseConfig::default()).unwrap();
        assert_eq!(doc.materials.len(), 1);
        assert_eq!(doc.materials[0].kd, [0.8, 0.8, 0.8]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn empty_file_parses_to_empty_document() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let doc = load_obj(file.path(), &ParseConfig::default()).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_obj("/definitely/not/here.obj", &ParseConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn parse_errors_surface_through_the_reader() {
        let file = write_temp("xyz 1 2 3\n");
        let err = load_obj(file.path(), &ParseConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        file.flush().unwrap();
        let err = load_obj(file.path(), &ParseConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Utf8(_)));
    }
}
