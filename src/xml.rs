//! Small append-only XML writer for the fixed SpreadsheetML part shapes.
//!
//! Every attribute value and every text node goes through [`Escaped`]; there
//! is no way to append unescaped markup.

use std::fmt::{self, Write as _};

/// Display wrapper that escapes `&`, `<`, `>`, `"` and `'`.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let mut last = 0;
        for (i, c) in s.char_indices() {
            let rep = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&apos;",
                _ => continue,
            };
            f.write_str(s.get(last..i).unwrap_or_default())?;
            f.write_str(rep)?;
            last = i + c.len_utf8();
        }
        f.write_str(s.get(last..).unwrap_or_default())
    }
}

/// Escape `s` into a new string.
#[must_use]
pub fn escape(s: &str) -> String {
    Escaped(s).to_string()
}

#[derive(Debug, Default)]
pub struct XmlWriter {
    out: String,
}

impl XmlWriter {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>`
    pub fn declaration(&mut self) -> &mut Self {
        self.out
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self
    }

    pub fn open(&mut self, tag: &str) -> &mut Self {
        self.open_with(tag, &[])
    }

    pub fn open_with(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.out.push('>');
        self
    }

    /// Self-closing element.
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.out.push_str("/>");
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self
    }

    /// Escaped character data.
    pub fn text(&mut self, s: &str) -> &mut Self {
        // writing into a String cannot fail
        let _ = write!(self.out, "{}", Escaped(s));
        self
    }

    /// `<tag>n</tag>`. Only numbers take this path; text goes through [`Self::text`].
    pub fn number(&mut self, tag: &str, n: f64) -> &mut Self {
        let _ = write!(self.out, "<{tag}>{n}</{tag}>");
        self
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (key, value) in attrs {
            let _ = write!(self.out, " {key}=\"{}\"", Escaped(value));
        }
    }
}
