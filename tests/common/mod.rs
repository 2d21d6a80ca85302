//! Common test utilities: reading exported archives back.
//!
//! Archives are opened with the `zip` crate (which checks CRCs and follows
//! central directory offsets) and parts are parsed with `quick-xml`, so the
//! tests never trust the writer's own view of its output.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

// Re-export fixtures for convenience
pub use super::fixtures::*;

// ============================================================================
// Archive Helpers
// ============================================================================

/// Open archive bytes with the `zip` crate.
pub fn open_archive(bytes: &[u8]) -> zip::ZipArchive<Cursor<&[u8]>> {
    zip::ZipArchive::new(Cursor::new(bytes)).expect("Failed to open ZIP archive")
}

/// Every entry as `(name, bytes)`, in central directory order.
pub fn read_all_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = open_archive(bytes);
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).expect("entry by index");
            assert_eq!(
                file.compression(),
                zip::CompressionMethod::Stored,
                "{} is not stored",
                file.name()
            );
            let mut data = Vec::new();
            file.read_to_end(&mut data).expect("read entry (CRC checked)");
            (file.name().to_string(), data)
        })
        .collect()
}

/// Read a single part as UTF-8 text.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = open_archive(bytes);
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {name}"));
    let mut text = String::new();
    file.read_to_string(&mut text).expect("part is UTF-8");
    text
}

// ============================================================================
// Raw Structure Helpers
// ============================================================================

pub const EOCD_LEN: usize = 22;

pub fn u16_at(buf: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([buf[pos], buf[pos + 1]])
}

pub fn u32_at(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}

/// One central directory record, decoded by hand.
#[derive(Debug, Clone)]
pub struct CentralRecord {
    pub name: String,
    pub crc: u32,
    pub size: u32,
    pub local_header_offset: usize,
}

/// Walk the central directory found through the end record.
pub fn central_directory(bytes: &[u8]) -> Vec<CentralRecord> {
    let eocd = bytes.len() - EOCD_LEN;
    assert_eq!(u32_at(bytes, eocd), 0x0605_4b50, "end record signature");
    let count = u16_at(bytes, eocd + 10) as usize;
    let cd_size = u32_at(bytes, eocd + 12) as usize;
    let cd_start = u32_at(bytes, eocd + 16) as usize;
    assert_eq!(cd_start + cd_size, eocd, "central directory ends at end record");

    let mut records = Vec::with_capacity(count);
    let mut pos = cd_start;
    for _ in 0..count {
        assert_eq!(u32_at(bytes, pos), 0x0201_4b50, "central header signature");
        let name_len = u16_at(bytes, pos + 28) as usize;
        let extra_len = u16_at(bytes, pos + 30) as usize;
        let comment_len = u16_at(bytes, pos + 32) as usize;
        let name = String::from_utf8(bytes[pos + 46..pos + 46 + name_len].to_vec()).unwrap();
        records.push(CentralRecord {
            name,
            crc: u32_at(bytes, pos + 16),
            size: u32_at(bytes, pos + 24),
            local_header_offset: u32_at(bytes, pos + 42) as usize,
        });
        pos += 46 + name_len + extra_len + comment_len;
    }
    assert_eq!(pos, eocd);
    records
}

/// Positions of every local file header, found by walking from offset 0.
pub fn local_header_positions(bytes: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut pos = 0;
    while u32_at(bytes, pos) == 0x0403_4b50 {
        positions.push(pos);
        let size = u32_at(bytes, pos + 18) as usize;
        let name_len = u16_at(bytes, pos + 26) as usize;
        let extra_len = u16_at(bytes, pos + 28) as usize;
        pos += 30 + name_len + extra_len + size;
    }
    positions
}

// ============================================================================
// Worksheet Parsing Helpers
// ============================================================================

/// A `<c>` element as read back from sheet XML.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCell {
    pub style: Option<u32>,
    pub cell_type: Option<String>,
    /// `<v>` text or the unescaped inline string.
    pub value: Option<String>,
}

fn attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| a.unescape_value().expect("valid attribute").into_owned())
}

/// Parse worksheet XML into cells keyed by reference ("A1").
pub fn parse_sheet_cells(xml: &str) -> BTreeMap<String, ParsedCell> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut cells = BTreeMap::new();
    let mut current: Option<(String, ParsedCell)> = None;
    let mut in_value = false;

    loop {
        match reader.read_event().expect("well-formed sheet XML") {
            Event::Start(e) if e.name().as_ref() == b"c" => {
                let r = attr(&e, b"r").expect("cell has r");
                current = Some((
                    r,
                    ParsedCell {
                        style: attr(&e, b"s").and_then(|s| s.parse().ok()),
                        cell_type: attr(&e, b"t"),
                        value: None,
                    },
                ));
            }
            Event::Empty(e) if e.name().as_ref() == b"c" => {
                let r = attr(&e, b"r").expect("cell has r");
                cells.insert(
                    r,
                    ParsedCell {
                        style: attr(&e, b"s").and_then(|s| s.parse().ok()),
                        cell_type: attr(&e, b"t"),
                        value: None,
                    },
                );
            }
            Event::Start(e) if matches!(e.name().as_ref(), b"v" | b"t") => in_value = true,
            Event::End(e) if matches!(e.name().as_ref(), b"v" | b"t") => in_value = false,
            Event::Text(t) if in_value => {
                if let Some((_, cell)) = current.as_mut() {
                    let text = t.unescape().expect("valid text");
                    cell.value
                        .get_or_insert_with(String::new)
                        .push_str(&text);
                }
            }
            Event::End(e) if e.name().as_ref() == b"c" => {
                if let Some((r, cell)) = current.take() {
                    cells.insert(r, cell);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    cells
}

/// `(name, sheetId, r:id)` for each `<sheet>` in workbook.xml.
pub fn parse_workbook_sheets(xml: &str) -> Vec<(String, String, String)> {
    let mut reader = Reader::from_str(xml);
    let mut sheets = Vec::new();
    loop {
        match reader.read_event().expect("well-formed workbook XML") {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"sheet" => {
                sheets.push((
                    attr(&e, b"name").unwrap_or_default(),
                    attr(&e, b"sheetId").unwrap_or_default(),
                    attr(&e, b"r:id").unwrap_or_default(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    sheets
}

/// `Id -> Target` for a relationships part.
pub fn parse_relationships(xml: &str) -> BTreeMap<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut rels = BTreeMap::new();
    loop {
        match reader.read_event().expect("well-formed rels XML") {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"Relationship" => {
                rels.insert(
                    attr(&e, b"Id").unwrap_or_default(),
                    attr(&e, b"Target").unwrap_or_default(),
                );
            }
            Event::Eof => break,
            _ => {}
        }
    }
    rels
}

/// Override `PartName`s from `[Content_Types].xml`.
pub fn parse_content_type_overrides(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut parts = Vec::new();
    loop {
        match reader.read_event().expect("well-formed content types XML") {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"Override" => {
                parts.push(attr(&e, b"PartName").unwrap_or_default());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    parts
}

/// Check that a part parses from start to end without error.
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0i32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
    assert_eq!(depth, 0, "unbalanced elements");
}

// ============================================================================
// Assertion Helpers
// ============================================================================

pub fn assert_cell(
    cells: &BTreeMap<String, ParsedCell>,
    cell_ref: &str,
    style: u32,
    value: Option<&str>,
) {
    let cell = cells
        .get(cell_ref)
        .unwrap_or_else(|| panic!("cell {cell_ref} missing"));
    assert_eq!(cell.style, Some(style), "style of {cell_ref}");
    assert_eq!(cell.value.as_deref(), value, "value of {cell_ref}");
}
