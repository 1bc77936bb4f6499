// File: crates/dashboard-core/src/markup.rs
// Summary: Minimal XML/HTML writer with deterministic output and escaped content.

use std::fmt::Display;

/// Append-only markup buffer. Attribute values and text are escaped; `raw` is not.
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self { Self::with_capacity(8 * 1024) }

    pub fn with_capacity(cap: usize) -> Self { Self { buf: String::with_capacity(cap) } }

    /// `<tag`; follow with `attr` calls, then `open` or `close_empty`.
    pub fn start(&mut self, tag: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self
    }

    pub fn attr(&mut self, name: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&html_escape::encode_double_quoted_attribute(&value));
        self.buf.push('"');
        self
    }

    /// Bare boolean attribute (`selected`, `disabled`).
    pub fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.buf.push(' ');
            self.buf.push_str(name);
        }
        self
    }

    pub fn open(&mut self) -> &mut Self {
        self.buf.push('>');
        self
    }

    pub fn close_empty(&mut self) -> &mut Self {
        self.buf.push_str("/>");
        self
    }

    pub fn text(&mut self, text: impl Display) -> &mut Self {
        let text = text.to_string();
        self.buf.push_str(&html_escape::encode_text(&text));
        self
    }

    pub fn end(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn finish(self) -> String { self.buf }
}

impl Default for Markup {
    fn default() -> Self { Self::new() }
}
