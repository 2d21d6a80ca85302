//! Package manifests: content types, relationships and the workbook descriptor.
//!
//! Part paths and relationship ids here must agree with each other and with
//! the entry names in [`super::export_at`], or spreadsheet applications
//! reject the file.

use crate::namespaces::{
    CT_RELATIONSHIPS, CT_STYLES, CT_WORKBOOK, CT_WORKSHEET, CT_XML, NS_CONTENT_TYPES,
    NS_DOC_RELATIONSHIPS, NS_RELATIONSHIPS, NS_SPREADSHEET, REL_STYLES, REL_WORKBOOK,
    REL_WORKSHEET,
};
use crate::xml::XmlWriter;

pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const ROOT_RELS_PATH: &str = "_rels/.rels";
pub const WORKBOOK_PATH: &str = "xl/workbook.xml";
pub const WORKBOOK_RELS_PATH: &str = "xl/_rels/workbook.xml.rels";
pub const STYLES_PATH: &str = "xl/styles.xml";

/// Relationship id of the styles part in `workbook.xml.rels`.
pub const STYLES_REL_ID: &str = "rIdStyles";

/// Archive path of the worksheet at 0-based `index`: `xl/worksheets/sheet1.xml`, ...
#[must_use]
pub fn sheet_path(index: usize) -> String {
    format!("xl/worksheets/sheet{}.xml", index + 1)
}

/// Relationship id linking the workbook to the worksheet at 0-based `index`.
#[must_use]
pub fn sheet_rel_id(index: usize) -> String {
    format!("rId{}", index + 1)
}

#[must_use]
pub fn content_types_xml(sheet_count: usize) -> String {
    let mut w = XmlWriter::with_capacity(640 + sheet_count * 128);
    w.declaration()
        .open_with("Types", &[("xmlns", NS_CONTENT_TYPES)])
        .empty(
            "Default",
            &[("Extension", "rels"), ("ContentType", CT_RELATIONSHIPS)],
        )
        .empty("Default", &[("Extension", "xml"), ("ContentType", CT_XML)]);

    let mut overrides = vec![
        (format!("/{WORKBOOK_PATH}"), CT_WORKBOOK),
        (format!("/{STYLES_PATH}"), CT_STYLES),
    ];
    overrides.extend((0..sheet_count).map(|i| (format!("/{}", sheet_path(i)), CT_WORKSHEET)));
    for (part, content_type) in &overrides {
        w.empty(
            "Override",
            &[
                ("PartName", part.as_str()),
                ("ContentType", *content_type),
            ],
        );
    }

    w.close("Types");
    w.finish()
}

#[must_use]
pub fn root_rels_xml() -> String {
    let mut w = XmlWriter::with_capacity(320);
    w.declaration()
        .open_with("Relationships", &[("xmlns", NS_RELATIONSHIPS)])
        .empty(
            "Relationship",
            &[
                ("Id", "rId1"),
                ("Type", REL_WORKBOOK),
                ("Target", WORKBOOK_PATH),
            ],
        )
        .close("Relationships");
    w.finish()
}

/// Workbook descriptor listing sheets in order with `sheetId` 1..=n.
#[must_use]
pub fn workbook_xml<S: AsRef<str>>(sheet_names: &[S]) -> String {
    let mut w = XmlWriter::with_capacity(320 + sheet_names.len() * 64);
    w.declaration()
        .open_with(
            "workbook",
            &[
                ("xmlns", NS_SPREADSHEET),
                ("xmlns:r", NS_DOC_RELATIONSHIPS),
            ],
        )
        .open("sheets");
    for (i, name) in sheet_names.iter().enumerate() {
        let sheet_id = (i + 1).to_string();
        let rel_id = sheet_rel_id(i);
        w.empty(
            "sheet",
            &[
                ("name", name.as_ref()),
                ("sheetId", sheet_id.as_str()),
                ("r:id", rel_id.as_str()),
            ],
        );
    }
    w.close("sheets").close("workbook");
    w.finish()
}

#[must_use]
pub fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut w = XmlWriter::with_capacity(384 + sheet_count * 160);
    w.declaration()
        .open_with("Relationships", &[("xmlns", NS_RELATIONSHIPS)]);
    for i in 0..sheet_count {
        let rel_id = sheet_rel_id(i);
        let target = format!("worksheets/sheet{}.xml", i + 1);
        w.empty(
            "Relationship",
            &[
                ("Id", rel_id.as_str()),
                ("Type", REL_WORKSHEET),
                ("Target", target.as_str()),
            ],
        );
    }
    w.empty(
        "Relationship",
        &[
            ("Id", STYLES_REL_ID),
            ("Type", REL_STYLES),
            ("Target", "styles.xml"),
        ],
    )
    .close("Relationships");
    w.finish()
}
