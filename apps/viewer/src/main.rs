// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! obj-lite Viewer - Command-line summary printer for OBJ files.
//!
//! Parses each file given on the command line and prints its element counts.
//!
//! # Options
//!
//! - `--lossy` - best-effort parsing: print diagnostics and keep going
//! - `--dump` - echo the parsed document back in OBJ grammar

use std::process::ExitCode;

use anyhow::Context;
use obj_lite_core::{write_obj, ObjDocument, ParseConfig};
use obj_lite_reader::{load_obj, load_obj_lossy};

const USAGE: &str = "Viewer of .obj files\n\
                     Usage: obj-lite-viewer [--lossy] [--dump] [FILE ...]\n";

#[derive(Default)]
struct Options {
    lossy: bool,
    dump: bool,
}

#[derive(Default)]
struct Stats {
    success_count: usize,
    failure_count: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,obj_lite_viewer=debug".into()),
        )
        .init();

    let mut options = Options::default();
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--lossy" => options.lossy = true,
            "--dump" => options.dump = true,
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = ParseConfig::default();
    let mut stats = Stats::default();

    for path in &paths {
        tracing::info!(path, "parsing");
        match view_file(path, &options, &config) {
            Ok(()) => stats.success_count += 1,
            Err(e) => {
                eprintln!("Error: {e:#}");
                stats.failure_count += 1;
            }
        }
    }

    println!("Arguments:\t{}", paths.len());
    println!("Completed:\t{}", stats.success_count);
    println!("Failed:   \t{}", stats.failure_count);

    if stats.failure_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn view_file(path: &str, options: &Options, config: &ParseConfig) -> anyhow::Result<()> {
    let doc = if options.lossy {
        let (doc, diagnostics) =
            load_obj_lossy(path, config).with_context(|| format!("failed to load {path}"))?;
        for diag in &diagnostics {
            println!("{path}: {diag}");
        }
        doc
    } else {
        load_obj(path, config).with_context(|| format!("failed to load {path}"))?
    };

    print_summary(path, &doc);
    if options.dump {
        print!("{}", write_obj(&doc));
    }
    Ok(())
}

fn print_summary(path: &str, doc: &ObjDocument) {
    println!("{path}:");
    println!("# vertices:  {}", doc.vertices.len());
    println!("# normals:   {}", doc.normals.len());
    println!("# texcoords: {}", doc.texcoords.len());
    println!("# faces:     {}", doc.faces.len());
    println!("# objects:   {}", doc.objects.len());
    for object in &doc.objects {
        println!("\t{} ({} faces)", object.name, object.faces.len());
    }
}
