//! Store-only ZIP writer.
//!
//! Every entry uses compression method 0, so the local header can be written
//! up front (CRC and sizes are known) and no data descriptor is needed.
//! Layout: `[local header, name, data]* [central record, name]* EOCD`.

use tracing::trace;

use crate::error::{Result, XlstoreError};

use super::crc::crc32;
use super::dos_time::DosDateTime;
use super::{
    CENTRAL_HEADER_LEN, CENTRAL_HEADER_SIG, EOCD_LEN, EOCD_SIG, LOCAL_HEADER_LEN,
    LOCAL_HEADER_SIG, METHOD_STORE, VERSION_MADE_BY, VERSION_NEEDED,
};

/// One file inside the archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Archive-relative path, forward-slash separated.
    pub name: String,
    pub data: Vec<u8>,
    pub modified: DosDateTime,
}

impl ArchiveEntry {
    /// Entry stamped with the current time.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::with_modified(name, data, DosDateTime::now())
    }

    pub fn with_modified(
        name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        modified: DosDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            modified,
        }
    }
}

/// What the central directory needs to know about an already-written entry.
#[derive(Debug)]
struct CentralRecord {
    name: Vec<u8>,
    crc: u32,
    size: u32,
    modified: DosDateTime,
    local_header_offset: u32,
}

/// Append-only builder for a store-method ZIP archive.
///
/// Entries are serialized in the order they are added; the central directory
/// repeats that order.
#[derive(Debug, Default)]
pub struct ZipStoreWriter {
    buf: Vec<u8>,
    records: Vec<CentralRecord>,
}

impl ZipStoreWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the output buffer (payload bytes plus headers is a good guess).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            records: Vec::new(),
        }
    }

    /// Number of entries written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the local header, name and payload of `entry`.
    pub fn add(&mut self, entry: &ArchiveEntry) -> Result<()> {
        if self.records.len() >= usize::from(u16::MAX) {
            return Err(XlstoreError::ArchiveLimit(format!(
                "more than {} entries",
                u16::MAX
            )));
        }

        let name = entry.name.as_bytes();
        let name_len = u16::try_from(name.len()).map_err(|_| {
            XlstoreError::ArchiveLimit(format!("entry name too long: {} bytes", name.len()))
        })?;
        let size = u32::try_from(entry.data.len()).map_err(|_| {
            XlstoreError::ArchiveLimit(format!(
                "entry {} is {} bytes",
                entry.name,
                entry.data.len()
            ))
        })?;
        let local_header_offset = offset_u32(self.buf.len())?;
        let crc = crc32(&entry.data);

        self.buf.reserve(LOCAL_HEADER_LEN + name.len() + entry.data.len());
        put_u32(&mut self.buf, LOCAL_HEADER_SIG);
        put_u16(&mut self.buf, VERSION_NEEDED);
        put_u16(&mut self.buf, 0); // flags
        put_u16(&mut self.buf, METHOD_STORE);
        put_u16(&mut self.buf, entry.modified.time);
        put_u16(&mut self.buf, entry.modified.date);
        put_u32(&mut self.buf, crc);
        put_u32(&mut self.buf, size); // compressed
        put_u32(&mut self.buf, size); // uncompressed
        put_u16(&mut self.buf, name_len);
        put_u16(&mut self.buf, 0); // extra field length
        self.buf.extend_from_slice(name);
        self.buf.extend_from_slice(&entry.data);

        trace!(
            name = %entry.name,
            offset = local_header_offset,
            size,
            crc,
            "zip entry written"
        );

        self.records.push(CentralRecord {
            name: name.to_vec(),
            crc,
            size,
            modified: entry.modified,
            local_header_offset,
        });
        Ok(())
    }

    /// Write the central directory and end record, returning the archive bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let central_start = offset_u32(self.buf.len())?;
        let central_len: usize = self
            .records
            .iter()
            .map(|r| CENTRAL_HEADER_LEN + r.name.len())
            .sum();
        self.buf.reserve(central_len + EOCD_LEN);

        for record in &self.records {
            put_u32(&mut self.buf, CENTRAL_HEADER_SIG);
            put_u16(&mut self.buf, VERSION_MADE_BY);
            put_u16(&mut self.buf, VERSION_NEEDED);
            put_u16(&mut self.buf, 0); // flags
            put_u16(&mut self.buf, METHOD_STORE);
            put_u16(&mut self.buf, record.modified.time);
            put_u16(&mut self.buf, record.modified.date);
            put_u32(&mut self.buf, record.crc);
            put_u32(&mut self.buf, record.size);
            put_u32(&mut self.buf, record.size);
            // length was validated in `add`
            put_u16(&mut self.buf, u16::try_from(record.name.len()).unwrap_or(0));
            put_u16(&mut self.buf, 0); // extra field length
            put_u16(&mut self.buf, 0); // comment length
            put_u16(&mut self.buf, 0); // disk number start
            put_u16(&mut self.buf, 0); // internal attributes
            put_u32(&mut self.buf, 0); // external attributes
            put_u32(&mut self.buf, record.local_header_offset);
            self.buf.extend_from_slice(&record.name);
        }

        let central_end = offset_u32(self.buf.len())?;
        // at most u16::MAX records, enforced in `add`
        let count = u16::try_from(self.records.len()).unwrap_or(u16::MAX);

        put_u32(&mut self.buf, EOCD_SIG);
        put_u16(&mut self.buf, 0); // this disk
        put_u16(&mut self.buf, 0); // disk with central directory
        put_u16(&mut self.buf, count); // entries on this disk
        put_u16(&mut self.buf, count); // total entries
        put_u32(&mut self.buf, central_end - central_start);
        put_u32(&mut self.buf, central_start);
        put_u16(&mut self.buf, 0); // comment length

        Ok(self.buf)
    }
}

/// Build a complete store-method archive from `entries`, in order.
///
/// An empty slice yields a valid empty archive (a bare end record).
pub fn write_store_zip(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let payload: usize = entries
        .iter()
        .map(|e| LOCAL_HEADER_LEN + CENTRAL_HEADER_LEN + 2 * e.name.len() + e.data.len())
        .sum();
    let mut writer = ZipStoreWriter::with_capacity(payload + EOCD_LEN);
    for entry in entries {
        writer.add(entry)?;
    }
    writer.finish()
}

fn offset_u32(pos: usize) -> Result<u32> {
    u32::try_from(pos)
        .map_err(|_| XlstoreError::ArchiveLimit(format!("archive offset {pos} exceeds 4 GiB")))
}

fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn fixed_time() -> DosDateTime {
        DosDateTime {
            date: (44 << 9) | (1 << 5) | 2,
            time: (10 << 11) | (30 << 5),
        }
    }

    fn u16_at(buf: &[u8], pos: usize) -> u16 {
        u16::from_le_bytes([buf[pos], buf[pos + 1]])
    }

    fn u32_at(buf: &[u8], pos: usize) -> u32 {
        u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
    }

    #[test]
    fn test_empty_archive_is_bare_end_record() {
        let bytes = write_store_zip(&[]).unwrap();
        assert_eq!(bytes.len(), EOCD_LEN);
        assert_eq!(u32_at(&bytes, 0), EOCD_SIG);
        assert_eq!(u16_at(&bytes, 8), 0);
        assert_eq!(u16_at(&bytes, 10), 0);
        assert_eq!(u32_at(&bytes, 12), 0);
        assert_eq!(u32_at(&bytes, 16), 0);
    }

    #[test]
    fn test_local_header_layout() {
        let entry = ArchiveEntry::with_modified("a.txt", b"hello".to_vec(), fixed_time());
        let bytes = write_store_zip(&[entry]).unwrap();

        assert_eq!(u32_at(&bytes, 0), LOCAL_HEADER_SIG);
        assert_eq!(u16_at(&bytes, 4), VERSION_NEEDED);
        assert_eq!(u16_at(&bytes, 6), 0);
        assert_eq!(u16_at(&bytes, 8), METHOD_STORE);
        assert_eq!(u16_at(&bytes, 10), fixed_time().time);
        assert_eq!(u16_at(&bytes, 12), fixed_time().date);
        assert_eq!(u32_at(&bytes, 14), crc32(b"hello"));
        assert_eq!(u32_at(&bytes, 18), 5);
        assert_eq!(u32_at(&bytes, 22), 5);
        assert_eq!(u16_at(&bytes, 26), 5);
        assert_eq!(u16_at(&bytes, 28), 0);
        assert_eq!(&bytes[30..35], b"a.txt");
        assert_eq!(&bytes[35..40], b"hello");
    }

    #[test]
    fn test_total_length() {
        let entries = vec![
            ArchiveEntry::with_modified("x", b"12".to_vec(), fixed_time()),
            ArchiveEntry::with_modified("dir/yy", Vec::<u8>::new(), fixed_time()),
        ];
        let bytes = write_store_zip(&entries).unwrap();
        let expected = (LOCAL_HEADER_LEN + 1 + 2)
            + (LOCAL_HEADER_LEN + 6)
            + (CENTRAL_HEADER_LEN + 1)
            + (CENTRAL_HEADER_LEN + 6)
            + EOCD_LEN;
        assert_eq!(bytes.len(), expected);
    }

    #[test]
    fn test_central_offsets_point_at_local_headers() {
        let entries: Vec<_> = (0..4)
            .map(|i| {
                ArchiveEntry::with_modified(
                    format!("part{i}.xml"),
                    vec![b'x'; i * 7 + 1],
                    fixed_time(),
                )
            })
            .collect();
        let bytes = write_store_zip(&entries).unwrap();

        let eocd = bytes.len() - EOCD_LEN;
        assert_eq!(u32_at(&bytes, eocd), EOCD_SIG);
        assert_eq!(u16_at(&bytes, eocd + 8), 4);
        assert_eq!(u16_at(&bytes, eocd + 10), 4);
        let cd_size = u32_at(&bytes, eocd + 12) as usize;
        let cd_start = u32_at(&bytes, eocd + 16) as usize;
        assert_eq!(cd_start + cd_size, eocd);

        let mut pos = cd_start;
        for entry in &entries {
            assert_eq!(u32_at(&bytes, pos), CENTRAL_HEADER_SIG);
            let name_len = u16_at(&bytes, pos + 28) as usize;
            let offset = u32_at(&bytes, pos + 42) as usize;
            assert_eq!(&bytes[pos + 46..pos + 46 + name_len], entry.name.as_bytes());

            assert_eq!(u32_at(&bytes, offset), LOCAL_HEADER_SIG);
            assert_eq!(u32_at(&bytes, offset + 14), u32_at(&bytes, pos + 16));
            assert_eq!(&bytes[offset + 30..offset + 30 + name_len], entry.name.as_bytes());

            pos += CENTRAL_HEADER_LEN + name_len;
        }
        assert_eq!(pos, eocd);
    }

    #[test]
    fn test_incremental_writer_counts_entries() {
        let mut writer = ZipStoreWriter::new();
        assert!(writer.is_empty());
        writer
            .add(&ArchiveEntry::with_modified("a", b"1".to_vec(), fixed_time()))
            .unwrap();
        writer
            .add(&ArchiveEntry::with_modified("b", b"2".to_vec(), fixed_time()))
            .unwrap();
        assert_eq!(writer.len(), 2);
        let bytes = writer.finish().unwrap();
        assert_eq!(u16_at(&bytes, bytes.len() - EOCD_LEN + 10), 2);
    }

    #[test]
    fn test_name_longer_than_u16_is_rejected() {
        let name = "n".repeat(usize::from(u16::MAX) + 1);
        let entry = ArchiveEntry::with_modified(name, Vec::<u8>::new(), fixed_time());
        let err = write_store_zip(&[entry]).unwrap_err();
        assert!(matches!(err, XlstoreError::ArchiveLimit(_)));
    }

    #[test]
    fn test_entry_count_is_capped_at_u16_max() {
        let entry = ArchiveEntry::with_modified("e", Vec::<u8>::new(), fixed_time());
        let mut writer = ZipStoreWriter::new();
        for _ in 0..u16::MAX {
            writer.add(&entry).unwrap();
        }
        assert_eq!(writer.len(), usize::from(u16::MAX));

        let err = writer.add(&entry).unwrap_err();
        assert!(matches!(err, XlstoreError::ArchiveLimit(_)));
        assert_eq!(writer.len(), usize::from(u16::MAX));

        let bytes = writer.finish().unwrap();
        let eocd = bytes.len() - EOCD_LEN;
        assert_eq!(u16_at(&bytes, eocd + 8), u16::MAX);
        assert_eq!(u16_at(&bytes, eocd + 10), u16::MAX);
    }

    #[test]
    fn test_one_past_the_cap_fails_through_write_store_zip() {
        let entry = ArchiveEntry::with_modified("e", Vec::<u8>::new(), fixed_time());
        let entries = vec![entry; usize::from(u16::MAX) + 1];
        let err = write_store_zip(&entries).unwrap_err();
        assert!(matches!(err, XlstoreError::ArchiveLimit(_)));
    }
}
