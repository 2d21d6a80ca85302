//! Sheet fixtures shaped like the ledger reports that feed the exporter.
#![allow(dead_code, clippy::expect_used)]

use chrono::{NaiveDate, NaiveDateTime};
use xlstore::{CellValue, SheetSpec};

/// Fixed timestamp so exports are byte-for-byte reproducible.
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 31)
        .and_then(|d| d.and_hms_opt(18, 4, 27))
        .expect("valid timestamp")
}

/// `[["Category","Amount"],["Food",12.5],["Rent",800]]` with currency column 1.
pub fn data_sheet() -> SheetSpec {
    SheetSpec::new("Data")
        .row(["Category", "Amount"])
        .row([CellValue::from("Food"), CellValue::from(12.5)])
        .row([CellValue::from("Rent"), CellValue::from(800)])
        .currency_cols([1])
}

/// Period summary: label/value pairs, values in column 1.
pub fn summary_sheet() -> SheetSpec {
    SheetSpec::new("Resumen")
        .row([CellValue::from("Periodo"), CellValue::from("Marzo 2024")])
        .row([CellValue::from("Ingresos"), CellValue::from(2450.0)])
        .row([CellValue::from("Gastos"), CellValue::from(1312.75)])
        .row([CellValue::from("Balance"), CellValue::from(1137.25)])
        .row([CellValue::Empty, CellValue::Empty])
        .row([
            CellValue::from("Nota"),
            CellValue::from("Exportado desde Control de Gastos"),
        ])
        .currency_cols([1])
}

/// Movement list with a trailing totals block; amount in column 5.
pub fn movements_sheet() -> SheetSpec {
    SheetSpec::new("Movimientos")
        .row(["Fecha", "Tipo", "Categoría", "Cuenta", "Nota", "Importe"])
        .row([
            CellValue::from("02/03/2024"),
            CellValue::from("Gasto"),
            CellValue::from("Comida"),
            CellValue::from("Banco"),
            CellValue::from("Súper & mercado"),
            CellValue::from(54.3),
        ])
        .row([
            CellValue::from("05/03/2024"),
            CellValue::from("Ingreso"),
            CellValue::from("Nómina"),
            CellValue::from("Banco"),
            CellValue::Empty,
            CellValue::from(2450),
        ])
        .row([
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            CellValue::from("TOTAL GASTOS"),
            CellValue::from(54.3),
        ])
        .currency_cols([5])
}

/// Transfers between accounts; amount in column 4.
pub fn transfers_sheet() -> SheetSpec {
    SheetSpec::new("Transferencias")
        .row(["Fecha", "Desde", "Hacia", "Nota", "Importe"])
        .row([
            CellValue::from("10/03/2024"),
            CellValue::from("Banco"),
            CellValue::from("Efectivo"),
            CellValue::from("\"cash\" <weekly>"),
            CellValue::from(100),
        ])
        .currency_cols([4])
}

/// The five-sheet dashboard export.
pub fn panel_sheets() -> Vec<SheetSpec> {
    vec![
        summary_sheet(),
        SheetSpec::new("Por categoría")
            .row(["Categoría", "Gasto"])
            .row([CellValue::from("Comida"), CellValue::from(54.3)])
            .currency_cols([1]),
        SheetSpec::new("Por cuenta (periodo)")
            .row(["Cuenta", "Variación en periodo"])
            .row([CellValue::from("Banco"), CellValue::from(-2295.7)])
            .currency_cols([1]),
        movements_sheet(),
        transfers_sheet(),
    ]
}
