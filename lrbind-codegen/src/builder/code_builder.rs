//! Code builder utility for generating properly indented text.

use super::Indent;

/// Fluent API for building indented, newline-terminated lines.
///
/// # Example
///
/// ```
/// use lrbind_codegen::builder::CodeBuilder;
///
/// let text = CodeBuilder::default()
///     .block_with_close("Tint = {", "},", |b| b.line("min = -150,"))
///     .build();
///
/// assert_eq!(text, "Tint = {\n  min = -150,\n},\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.indent.write_to(&mut self.buffer, self.indent_level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a header line, indented body and closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let text = CodeBuilder::default().line("min = 0,").build();
        assert_eq!(text, "min = 0,\n");
    }

    #[test]
    fn test_indentation() {
        let text = CodeBuilder::default()
            .indent()
            .line("Dehaze = {")
            .indent()
            .line("max = 100,")
            .dedent()
            .line("},")
            .build();

        assert_eq!(text, "  Dehaze = {\n    max = 100,\n  },\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let text = CodeBuilder::default().dedent().dedent().line("},").build();
        assert_eq!(text, "},\n");
    }

    #[test]
    fn test_block_with_close() {
        let text = CodeBuilder::new(Indent::Tab)
            .block_with_close("Params = {", "}", |b| b.line("Tint = {},"))
            .build();

        assert_eq!(text, "Params = {\n\tTint = {},\n}\n");
    }

    #[test]
    fn test_each() {
        let text = CodeBuilder::default()
            .each(["min = -5,", "max = 5,"], |b, line| b.line(line))
            .build();

        assert_eq!(text, "min = -5,\nmax = 5,\n");
    }
}
