//! The shared `xl/styles.xml` part.
//!
//! `cellXfs` mirrors [`StyleIndex`]: 0 plain, 1 bold header, 2 currency.

use crate::namespaces::NS_SPREADSHEET;
use crate::types::StyleIndex;
use crate::xml::XmlWriter;

/// First id available for custom number formats (0..=163 are built in).
pub const CURRENCY_NUM_FMT_ID: u32 = 164;

/// Euro sign, then thousands-grouped with two decimals: `€ 1,234.56`.
pub const CURRENCY_FORMAT_CODE: &str = "\\€ #,##0.00";

const FONT_SIZE: &str = "11";
const FONT_COLOR: &str = "FF111111";
const FONT_NAME: &str = "Calibri";

/// `(numFmtId, fontId, apply attribute)` for each entry of `cellXfs`.
fn xf_for(style: StyleIndex) -> (u32, u32, &'static str) {
    match style {
        StyleIndex::Default => (0, 0, "applyFont"),
        StyleIndex::Header => (0, 1, "applyFont"),
        StyleIndex::Currency => (CURRENCY_NUM_FMT_ID, 0, "applyNumberFormat"),
    }
}

#[must_use]
pub fn styles_xml() -> String {
    let mut w = XmlWriter::with_capacity(1536);
    w.declaration()
        .open_with("styleSheet", &[("xmlns", NS_SPREADSHEET)]);

    let fmt_id = CURRENCY_NUM_FMT_ID.to_string();
    w.open_with("numFmts", &[("count", "1")])
        .empty(
            "numFmt",
            &[
                ("numFmtId", fmt_id.as_str()),
                ("formatCode", CURRENCY_FORMAT_CODE),
            ],
        )
        .close("numFmts");

    w.open_with("fonts", &[("count", "2")]);
    for bold in [false, true] {
        w.open("font");
        if bold {
            w.empty("b", &[]);
        }
        w.empty("sz", &[("val", FONT_SIZE)])
            .empty("color", &[("rgb", FONT_COLOR)])
            .empty("name", &[("val", FONT_NAME)])
            .close("font");
    }
    w.close("fonts");

    w.open_with("fills", &[("count", "1")])
        .open("fill")
        .empty("patternFill", &[("patternType", "none")])
        .close("fill")
        .close("fills");

    w.open_with("borders", &[("count", "1")]).open("border");
    for side in ["left", "right", "top", "bottom", "diagonal"] {
        w.empty(side, &[]);
    }
    w.close("border").close("borders");

    w.open_with("cellStyleXfs", &[("count", "1")])
        .empty(
            "xf",
            &[
                ("numFmtId", "0"),
                ("fontId", "0"),
                ("fillId", "0"),
                ("borderId", "0"),
            ],
        )
        .close("cellStyleXfs");

    let xf_count = StyleIndex::ALL.len().to_string();
    w.open_with("cellXfs", &[("count", xf_count.as_str())]);
    for style in StyleIndex::ALL {
        let (num_fmt, font, apply) = xf_for(style);
        let num_fmt = num_fmt.to_string();
        let font = font.to_string();
        w.empty(
            "xf",
            &[
                ("xfId", "0"),
                ("numFmtId", num_fmt.as_str()),
                ("fontId", font.as_str()),
                ("fillId", "0"),
                ("borderId", "0"),
                (apply, "1"),
            ],
        );
    }
    w.close("cellXfs");

    w.open_with("cellStyles", &[("count", "1")])
        .empty(
            "cellStyle",
            &[("name", "Normal"), ("xfId", "0"), ("builtinId", "0")],
        )
        .close("cellStyles");

    w.close("styleSheet");
    w.finish()
}
