use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// A single cell value supplied by the report builder.
///
/// Deserializes leniently: JSON `null`, booleans, arrays and objects all become
/// [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged, from = "RawCellValue")]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

/// What a cell actually renders as after leniency rules are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellContent<'a> {
    Empty,
    Number(f64),
    Text(&'a str),
}

impl CellValue {
    /// Non-finite numbers and empty strings render as empty cells.
    #[must_use]
    pub fn content(&self) -> CellContent<'_> {
        match self {
            Self::Number(n) if n.is_finite() => CellContent::Number(*n),
            Self::Text(s) if !s.is_empty() => CellContent::Text(s),
            _ => CellContent::Empty,
        }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.content(), CellContent::Number(_))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCellValue {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl From<RawCellValue> for CellValue {
    fn from(raw: RawCellValue) -> Self {
        match raw {
            RawCellValue::Number(n) => Self::Number(n),
            RawCellValue::Text(s) => Self::Text(s),
            RawCellValue::Other(_) => Self::Empty,
        }
    }
}
