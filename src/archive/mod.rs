//! Minimal ZIP container support: CRC-32, DOS timestamps and a store-only writer.

pub mod crc;
pub mod dos_time;
pub mod writer;

pub use crc::{crc32, Crc32};
pub use dos_time::DosDateTime;
pub use writer::{write_store_zip, ArchiveEntry, ZipStoreWriter};

pub(crate) const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
pub(crate) const CENTRAL_HEADER_SIG: u32 = 0x0201_4b50;
pub(crate) const EOCD_SIG: u32 = 0x0605_4b50;

/// Fixed part of a local file header, before the name.
pub(crate) const LOCAL_HEADER_LEN: usize = 30;
/// Fixed part of a central directory record, before the name.
pub(crate) const CENTRAL_HEADER_LEN: usize = 46;
/// End of central directory record without comment.
pub(crate) const EOCD_LEN: usize = 22;

/// 2.0: the baseline for stored/deflated entries with directories.
pub(crate) const VERSION_NEEDED: u16 = 20;
pub(crate) const VERSION_MADE_BY: u16 = 20;
pub(crate) const METHOD_STORE: u16 = 0;
