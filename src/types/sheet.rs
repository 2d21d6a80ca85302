use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::CellValue;

/// Sheet name used when the caller leaves it blank.
pub const DEFAULT_SHEET_NAME: &str = "Datos";

/// One worksheet to export: a ragged grid of values plus currency columns.
///
/// Row 0 is the header row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSpec {
    #[serde(default)]
    pub name: String,
    /// A document that omits `rows` gets a single empty row.
    #[serde(default = "default_rows")]
    pub rows: Vec<Vec<CellValue>>,
    /// Zero-based column indices rendered with the accounting format.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub currency_cols: BTreeSet<u32>,
}

impl SheetSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a row, converting each value.
    #[must_use]
    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn currency_cols(mut self, cols: impl IntoIterator<Item = u32>) -> Self {
        self.currency_cols.extend(cols);
        self
    }

    /// Name written to the workbook; blank names fall back to [`DEFAULT_SHEET_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_SHEET_NAME
        } else {
            &self.name
        }
    }

    #[must_use]
    pub fn is_currency_col(&self, col: u32) -> bool {
        self.currency_cols.contains(&col)
    }
}

/// A complete export request, as produced by the report builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default)]
    pub sheets: Vec<SheetSpec>,
}

fn default_rows() -> Vec<Vec<CellValue>> {
    vec![Vec::new()]
}

fn default_filename() -> String {
    "export.xlsx".to_string()
}
