//! Generates worksheet XML from a `SheetSpec`.
//!
//! Text uses inline strings (`t="inlineStr"`) so no shared string table is
//! needed. Every cell carries an explicit style index.

use crate::cell_ref::{cell_ref, col_to_letter};
use crate::namespaces::NS_SPREADSHEET;
use crate::types::{CellContent, CellValue, SheetSpec, StyleIndex};
use crate::xml::XmlWriter;

/// Write a complete worksheet XML string from a `SheetSpec`.
#[must_use]
pub fn write_sheet_xml(sheet: &SheetSpec) -> String {
    let cells: usize = sheet.rows.iter().map(Vec::len).sum();
    let mut w = XmlWriter::with_capacity(256 + cells * 48);
    w.declaration()
        .open_with("worksheet", &[("xmlns", NS_SPREADSHEET)]);

    // <dimension>
    let max_cols = sheet.rows.iter().map(Vec::len).max().unwrap_or(0);
    if let (Some(last_col), Some(last_row)) = (
        max_cols.checked_sub(1).and_then(|c| u32::try_from(c).ok()),
        u32::try_from(sheet.rows.len()).ok(),
    ) {
        let dim = format!("A1:{}{}", col_to_letter(last_col), last_row);
        w.empty("dimension", &[("ref", dim.as_str())]);
    }

    if sheet.rows.is_empty() {
        w.empty("sheetData", &[]);
    } else {
        w.open("sheetData");
        for (row_idx, row) in (0u32..).zip(&sheet.rows) {
            write_row(&mut w, sheet, row_idx, row);
        }
        w.close("sheetData");
    }

    w.close("worksheet");
    w.finish()
}

/// Style for the cell at `(row, col)` holding `value`.
///
/// Row 0 is always the header, even when it holds numbers in a currency column.
#[must_use]
pub fn cell_style(sheet: &SheetSpec, row: u32, col: u32, value: &CellValue) -> StyleIndex {
    if row == 0 {
        StyleIndex::Header
    } else if value.is_number() && sheet.is_currency_col(col) {
        StyleIndex::Currency
    } else {
        StyleIndex::Default
    }
}

fn write_row(w: &mut XmlWriter, sheet: &SheetSpec, row_idx: u32, row: &[CellValue]) {
    let r = (u64::from(row_idx) + 1).to_string();
    if row.is_empty() {
        w.empty("row", &[("r", r.as_str())]);
        return;
    }
    w.open_with("row", &[("r", r.as_str())]);
    for (col_idx, value) in (0u32..).zip(row) {
        write_cell(w, sheet, row_idx, col_idx, value);
    }
    w.close("row");
}

/// Write a single `<c>` element.
fn write_cell(w: &mut XmlWriter, sheet: &SheetSpec, row: u32, col: u32, value: &CellValue) {
    let r = cell_ref(col, row);
    let s = cell_style(sheet, row, col, value).as_str();

    match value.content() {
        CellContent::Empty => {
            w.empty("c", &[("r", r.as_str()), ("s", s)]);
        }
        CellContent::Number(n) => {
            w.open_with("c", &[("r", r.as_str()), ("s", s)])
                .number("v", n)
                .close("c");
        }
        CellContent::Text(text) => {
            w.open_with("c", &[("r", r.as_str()), ("t", "inlineStr"), ("s", s)])
                .open("is")
                .open("t")
                .text(text)
                .close("t")
                .close("is")
                .close("c");
        }
    }
}
