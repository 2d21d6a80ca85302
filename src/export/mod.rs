//! XLSX export pipeline.
//!
//! Builds every package part from the caller's sheets, wraps each part as a
//! ZIP entry and packs them with the store-only writer. Nothing is handed to a
//! [`SaveTarget`] unless the whole archive was built.

pub mod parts;
pub mod sheet_writer;
pub mod styles;
mod target;

pub use target::{DirTarget, SaveTarget};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::archive::{write_store_zip, ArchiveEntry, DosDateTime};
use crate::error::{Result, XlstoreError};
use crate::namespaces::MIME_XLSX;
use crate::types::SheetSpec;

use self::parts::{
    content_types_xml, root_rels_xml, sheet_path, workbook_rels_xml, workbook_xml,
    CONTENT_TYPES_PATH, ROOT_RELS_PATH, STYLES_PATH, WORKBOOK_PATH, WORKBOOK_RELS_PATH,
};
use self::sheet_writer::write_sheet_xml;
use self::styles::styles_xml;

/// A finished export, ready for a save routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Suggested save name, exactly as requested.
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Build an XLSX file stamped with the current local time.
///
/// # Errors
/// [`XlstoreError::NoSheets`] when `sheets` is empty.
pub fn export_xlsx(filename: &str, sheets: &[SheetSpec]) -> Result<ExportedFile> {
    export_at(filename, sheets, &Local::now().naive_local())
}

/// Build an XLSX file with every part stamped at `timestamp`.
///
/// Identical inputs give byte-identical output.
///
/// # Errors
/// [`XlstoreError::NoSheets`] when `sheets` is empty.
pub fn export_at(
    filename: &str,
    sheets: &[SheetSpec],
    timestamp: &NaiveDateTime,
) -> Result<ExportedFile> {
    let entries = build_entries(sheets, DosDateTime::from_datetime(timestamp))?;
    let bytes = write_store_zip(&entries)?;
    debug!(
        filename,
        sheets = sheets.len(),
        entries = entries.len(),
        bytes = bytes.len(),
        "xlsx export built"
    );
    Ok(ExportedFile {
        filename: filename.to_string(),
        mime: MIME_XLSX,
        bytes,
    })
}

/// Build the file and hand it to `target`. `target` is not called on failure.
///
/// # Errors
/// Build errors, or whatever `target` reports.
pub fn export_to<T: SaveTarget + ?Sized>(
    target: &mut T,
    filename: &str,
    sheets: &[SheetSpec],
) -> Result<()> {
    let file = export_xlsx(filename, sheets)?;
    target.save(&file)
}

/// All package parts, in archive order.
///
/// # Errors
/// [`XlstoreError::NoSheets`] when `sheets` is empty.
pub fn build_entries(sheets: &[SheetSpec], modified: DosDateTime) -> Result<Vec<ArchiveEntry>> {
    if sheets.is_empty() {
        warn!("xlsx export requested with no sheets");
        return Err(XlstoreError::NoSheets);
    }

    let names: Vec<&str> = sheets.iter().map(SheetSpec::display_name).collect();
    let entry = |name: &str, xml: String| ArchiveEntry::with_modified(name, xml, modified);

    let mut entries = Vec::with_capacity(5 + sheets.len());
    entries.push(entry(CONTENT_TYPES_PATH, content_types_xml(sheets.len())));
    entries.push(entry(ROOT_RELS_PATH, root_rels_xml()));
    entries.push(entry(WORKBOOK_PATH, workbook_xml(&names)));
    entries.push(entry(WORKBOOK_RELS_PATH, workbook_rels_xml(sheets.len())));
    entries.push(entry(STYLES_PATH, styles_xml()));
    for (i, sheet) in sheets.iter().enumerate() {
        entries.push(entry(&sheet_path(i), write_sheet_xml(sheet)));
    }
    Ok(entries)
}

/// Suggested file name for an export: `{prefix}_{label}.xlsx`, with every run
/// of whitespace in `label` replaced by a single `_`.
#[must_use]
pub fn export_filename(prefix: &str, label: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + label.len() + 6);
    name.push_str(prefix);
    name.push('_');
    let mut in_space = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(".xlsx");
    name
}
