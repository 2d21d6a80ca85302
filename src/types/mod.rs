//! Data types for XLSX export.

mod cell;
mod sheet;
mod style;

pub use cell::*;
pub use sheet::*;
pub use style::*;
