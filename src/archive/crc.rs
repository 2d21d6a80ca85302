//! CRC-32 (IEEE 802.3) as used by ZIP local headers and the central directory.
//!
//! Table-driven, reflected polynomial `0xEDB88320`, initial value all-ones and
//! a final inversion. The lookup table is evaluated at compile time and is
//! never mutated, so it can be shared freely between threads.

const POLYNOMIAL: u32 = 0xEDB8_8320;

static CRC_TABLE: [u32; 256] = build_table();

#[allow(clippy::indexing_slicing)]
const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i: u32 = 0;
    while i < 256 {
        let mut c = i;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 == 1 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[i as usize] = c;
        i += 1;
    }
    table
}

/// Incremental CRC-32 hasher.
///
/// Feeding the same bytes in any chunking yields the same result as [`crc32`].
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    #[must_use]
    pub const fn new() -> Self {
        Self { state: 0xFFFF_FFFF }
    }

    /// Fold `data` into the running checksum.
    #[allow(clippy::indexing_slicing)] // index is a single byte, table has 256 entries
    pub fn update(&mut self, data: &[u8]) {
        let mut c = self.state;
        for &b in data {
            let idx = usize::from(c.to_le_bytes()[0] ^ b);
            c = CRC_TABLE[idx] ^ (c >> 8);
        }
        self.state = c;
    }

    #[must_use]
    pub const fn finalize(self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}

/// Compute the CRC-32 of a byte slice.
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(data);
    hasher.finalize()
}
