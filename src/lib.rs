//! xlstore - minimal XLSX export for ledger reports
//!
//! Turns a list of sheets (ragged grids of numbers, text and blanks, plus the
//! columns that hold money) into a complete `.xlsx` file:
//! - Store-only ZIP container with CRC-32 and a central directory
//! - Inline-string worksheets, bold header row, `€ #,##0.00` currency cells
//! - No compression library, no shared string table
//!
//! # Usage (Rust)
//!
//! ```
//! use xlstore::{export_xlsx, SheetSpec};
//!
//! let sheet = SheetSpec::new("Data")
//!     .row(["Category", "Amount"])
//!     .row([xlstore::CellValue::from("Food"), 12.5.into()])
//!     .currency_cols([1]);
//! let file = export_xlsx("report.xlsx", &[sheet])?;
//! assert!(file.bytes.starts_with(b"PK\x03\x04"));
//! # Ok::<(), xlstore::error::XlstoreError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { export_xlsx_js } from 'xlstore';
//! await init();
//! const bytes = export_xlsx_js("report.xlsx", [{ name: "Data", rows, currencyCols: [1] }]);
//! ```

pub mod archive;
pub mod cell_ref;
pub mod error;
pub mod export;
pub mod namespaces;
pub mod types;
pub mod xml;

use wasm_bindgen::prelude::*;

pub use error::{Result, XlstoreError};
pub use export::{export_at, export_filename, export_to, export_xlsx, ExportedFile, SaveTarget};
pub use types::*;

/// Build an XLSX file from JS sheet objects and return its bytes.
///
/// `sheets` is an array of `{ name, rows, currencyCols }`.
///
/// # Errors
/// Returns an error if `sheets` cannot be read or is empty.
#[wasm_bindgen]
pub fn export_xlsx_js(
    filename: &str,
    sheets: JsValue,
) -> std::result::Result<js_sys::Uint8Array, JsValue> {
    console_error_panic_hook::set_once();

    let sheets: Vec<SheetSpec> = serde_wasm_bindgen::from_value(sheets)
        .map_err(|e| JsValue::from_str(&format!("Invalid sheets: {e}")))?;
    let file = export_xlsx(filename, &sheets).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(js_sys::Uint8Array::from(file.bytes.as_slice()))
}

/// MIME type to tag the downloaded blob with.
#[must_use]
#[wasm_bindgen]
pub fn xlsx_mime_type() -> String {
    namespaces::MIME_XLSX.to_string()
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
