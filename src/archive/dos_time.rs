//! MS-DOS packed date/time fields used in ZIP headers.
//!
//! Date: `(year - 1980) << 9 | month << 5 | day`.
//! Time: `hour << 11 | minute << 5 | second / 2` (2-second resolution).

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

const MIN_YEAR: i32 = 1980;
/// Largest year representable in the 7-bit year field.
const MAX_YEAR: i32 = MIN_YEAR + 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosDateTime {
    pub date: u16,
    pub time: u16,
}

impl DosDateTime {
    /// Pack a calendar timestamp. Years outside 1980..=2107 are clamped.
    #[must_use]
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        let year = dt.year().clamp(MIN_YEAR, MAX_YEAR);
        // clamped above, fits in 7 bits
        let year_field = u16::try_from(year - MIN_YEAR).unwrap_or(0);

        // chrono guarantees month 1..=12, day 1..=31, hour < 24, minute < 60, second < 60
        let month = narrow(dt.month());
        let day = narrow(dt.day());
        let hour = narrow(dt.hour());
        let minute = narrow(dt.minute());
        let second = narrow(dt.second());

        Self {
            date: (year_field << 9) | (month << 5) | day,
            time: (hour << 11) | (minute << 5) | (second / 2),
        }
    }

    /// Current local wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(&Local::now().naive_local())
    }
}

fn narrow(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(0)
}
