use std::fmt;

/// Index into the fixed `cellXfs` table written to `xl/styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StyleIndex {
    Default = 0,
    /// Bold font, used for every cell in row 0.
    Header = 1,
    /// Accounting number format, used for numbers in currency columns.
    Currency = 2,
}

impl StyleIndex {
    /// All styles in `cellXfs` order.
    pub const ALL: [StyleIndex; 3] = [Self::Default, Self::Header, Self::Currency];

    /// Attribute value for `s="…"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::Header => "1",
            Self::Currency => "2",
        }
    }
}

impl fmt::Display for StyleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
