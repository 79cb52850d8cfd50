//! Indentation-aware text output for generated TypeScript

/// Indentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// Tabs
    Tabs,
    /// Spaces with specified width
    Spaces(u8),
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

impl IndentStyle {
    fn unit(self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(width) => " ".repeat(usize::from(width)),
        }
    }
}

/// Line-oriented source buffer.
///
/// Every line is written at the current nesting level; blank lines carry no
/// trailing whitespace.
#[derive(Debug)]
pub struct SourceWriter {
    buf: String,
    unit: String,
    level: usize,
}

impl SourceWriter {
    pub fn new(indent: IndentStyle) -> Self {
        Self {
            buf: String::new(),
            unit: indent.unit(),
            level: 0,
        }
    }

    /// Write one line at the current level
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.level {
                self.buf.push_str(&self.unit);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Write `open`, the indented body produced by `body`, then `close`
    pub fn block(
        &mut self,
        open: impl AsRef<str>,
        close: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(open);
        self.indent();
        body(self);
        self.dedent();
        self.line(close)
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Render a string as a double-quoted TypeScript string literal
pub fn string_literal(value: &str) -> String {
    // JSON string escaping is a subset of what TypeScript accepts
    serde_json::Value::String(value.to_string()).to_string()
}

/// Render an object key, quoting it only when it is not an identifier name
pub fn object_key(key: &str) -> String {
    if crate::ident::is_identifier_name(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks_are_indented() {
        let mut out = SourceWriter::new(IndentStyle::default());
        out.block("export const a = {", "};", |w| {
            w.line("b: 1,");
            w.blank();
            w.block("c: {", "},", |w| {
                w.line("d: 2,");
            });
        });
        assert_eq!(
            out.finish(),
            "export const a = {\n  b: 1,\n\n  c: {\n    d: 2,\n  },\n};\n"
        );
    }

    #[test]
    fn tabs_indentation() {
        let mut out = SourceWriter::new(IndentStyle::Tabs);
        out.block("{", "}", |w| {
            w.line("x;");
        });
        assert_eq!(out.finish(), "{\n\tx;\n}\n");
    }

    #[test]
    fn keys_and_literals() {
        assert_eq!(string_literal("us-east-1"), "\"us-east-1\"");
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(object_key("region"), "region");
        assert_eq!(object_key("max-attempts"), "\"max-attempts\"");
    }
}
