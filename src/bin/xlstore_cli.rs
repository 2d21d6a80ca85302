//! CLI tool for xlstore - builds an XLSX file from a JSON report document
//!
//! Usage:
//!   xlstore_cli <report.json>               # Write the document's filename into the current dir
//!   xlstore_cli <report.json> -o out.xlsx   # Write to out.xlsx
//!
//! Directories in the document's filename are ignored; only `-o` picks a path.
//!
//! The document looks like:
//!   {"filename": "x.xlsx", "sheets": [{"name": "Data", "rows": [["A", 1]], "currencyCols": [1]}]}
//!
//! Set `RUST_LOG=debug` to see export details.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use xlstore::export::DirTarget;
use xlstore::{export_to, ExportedFile, ReportDocument, XlstoreError};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args, Path::new(".")) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Export the report named in `args`. Without `-o` the file lands in `default_dir`.
fn run(args: &[String], default_dir: &Path) -> xlstore::Result<()> {
    let (input_path, output_path) = match args {
        [_, input] => (input, None),
        [_, input, flag, output] if flag == "-o" => (input, Some(output)),
        _ => {
            return Err(XlstoreError::Other(
                "Usage: xlstore_cli <report.json> [-o output.xlsx]".into(),
            ))
        }
    };

    let json = fs::read_to_string(input_path)?;
    let doc: ReportDocument = serde_json::from_str(&json)?;

    match output_path {
        Some(output) => {
            let mut to_output = |file: &ExportedFile| -> xlstore::Result<()> {
                fs::write(output, &file.bytes)?;
                info!(path = %output, bytes = file.bytes.len(), "xlsx export saved");
                Ok(())
            };
            export_to(&mut to_output, &doc.filename, &doc.sheets)
        }
        None => export_to(&mut DirTarget::new(default_dir), &doc.filename, &doc.sheets),
    }
}
