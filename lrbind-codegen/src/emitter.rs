//! Binding block emission.

use std::io::Write;

use lrbind_registry::{Binding, ParameterDescriptor, Registry};
use serde::Serialize;

use crate::{
    Accessors, Result,
    builder::{CodeBuilder, Indent},
};

/// Layout options for emitted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    indent: Indent,
    wrap: Option<String>,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different indentation unit.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Wrap the blocks in a table assigned to `name`.
    pub fn with_wrap(mut self, name: impl Into<String>) -> Self {
        self.wrap = Some(name.into());
        self
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn wrap(&self) -> Option<&str> {
        self.wrap.as_deref()
    }
}

/// Counts gathered over one emission run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmitStats {
    /// Blocks written.
    pub blocks: usize,
    /// Blocks that selected the generic getter.
    pub generic: usize,
    /// Blocks that selected the versioned getter.
    pub versioned: usize,
    /// Bytes handed to the sink.
    pub bytes: usize,
}

impl EmitStats {
    fn record(&mut self, binding: &Binding, bytes: usize) {
        self.blocks += 1;
        self.bytes += bytes;
        match binding {
            Binding::Generic => self.generic += 1,
            Binding::Versioned { .. } => self.versioned += 1,
        }
    }
}

/// Writes one binding block per parameter, in order.
///
/// Each block carries the parameter's bounds, the shared setter and the
/// getter selected by the parameter's binding:
///
/// ```text
///   Exposure = {
///     min = -5,
///     max = 5,
///     setter = setDevelopParam,
///     getter = get2012DevelopParam,
///   },
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingEmitter {
    accessors: Accessors,
    options: EmitOptions,
}

impl BindingEmitter {
    pub fn new(accessors: Accessors) -> Self {
        Self {
            accessors,
            options: EmitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// Stream every block of `registry` to `sink`.
    pub fn emit<W: Write>(&self, registry: &Registry, sink: &mut W) -> Result<EmitStats> {
        self.emit_descriptors(registry, sink)
    }

    /// Stream blocks for an arbitrary descriptor sequence.
    ///
    /// The whole sequence is checked before the first byte is written, so
    /// a structurally invalid descriptor never leaves partial output.
    pub fn emit_descriptors<'a, I, W>(&self, descriptors: I, sink: &mut W) -> Result<EmitStats>
    where
        I: IntoIterator<Item = &'a ParameterDescriptor> + Clone,
        W: Write,
    {
        for (index, descriptor) in descriptors.clone().into_iter().enumerate() {
            descriptor.validate(index)?;
        }

        let mut stats = EmitStats::default();

        if let Some(header) = self.header() {
            sink.write_all(header.as_bytes())?;
            stats.bytes += header.len();
        }

        for descriptor in descriptors {
            let block = self.render_block(descriptor);
            sink.write_all(block.as_bytes())?;
            stats.record(descriptor.binding(), block.len());
            tracing::trace!(parameter = descriptor.name(), "emitted binding block");
        }

        if let Some(footer) = self.footer() {
            sink.write_all(footer.as_bytes())?;
            stats.bytes += footer.len();
        }

        sink.flush()?;

        tracing::debug!(
            blocks = stats.blocks,
            generic = stats.generic,
            versioned = stats.versioned,
            bytes = stats.bytes,
            "emission complete"
        );
        Ok(stats)
    }

    /// Render every block of `registry` into a string.
    pub fn render(&self, registry: &Registry) -> Result<String> {
        let mut buffer = Vec::new();
        self.emit(registry, &mut buffer)?;
        // Every piece of emitted text originates from `str`.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Render the block of a single descriptor.
    pub fn render_descriptor(&self, descriptor: &ParameterDescriptor) -> Result<String> {
        descriptor.validate(0)?;
        Ok(self.render_block(descriptor))
    }

    fn render_block(&self, descriptor: &ParameterDescriptor) -> String {
        let fields = [
            ("min", descriptor.min().to_string()),
            ("max", descriptor.max().to_string()),
            ("setter", self.accessors.setter().to_string()),
            ("getter", self.accessors.getter(descriptor.binding()).to_string()),
        ];

        CodeBuilder::new(self.options.indent())
            .indent()
            .block_with_close(&format!("{} = {{", descriptor.name()), "},", |b| {
                b.each(&fields, |b, (key, value)| b.line(&format!("{key} = {value},")))
            })
            .build()
    }

    fn header(&self) -> Option<String> {
        let name = self.options.wrap()?;
        Some(
            CodeBuilder::new(self.options.indent())
                .line(&format!("{name} = {{"))
                .build(),
        )
    }

    fn footer(&self) -> Option<String> {
        self.options.wrap()?;
        Some(CodeBuilder::new(self.options.indent()).line("}").build())
    }
}

#[cfg(test)]
mod tests {
    use lrbind_registry::{Category, ValidationError};

    use super::*;
    use crate::EmitError;

    fn scenario() -> Registry {
        Registry::new([
            ParameterDescriptor::develop("Exposure", -5, 5).with_alias("Exposure2012"),
            ParameterDescriptor::develop("Texture", -100, 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_versioned_block() {
        let emitter = BindingEmitter::default();
        let desc = ParameterDescriptor::develop("Exposure", -5, 5).with_alias("Exposure2012");

        assert_eq!(
            emitter.render_descriptor(&desc).unwrap(),
            "  Exposure = {\n    min = -5,\n    max = 5,\n    setter = setDevelopParam,\n    getter = get2012DevelopParam,\n  },\n"
        );
    }

    #[test]
    fn test_generic_block() {
        let emitter = BindingEmitter::default();
        let desc = ParameterDescriptor::develop("SharpenRadius", 0.5, 3);

        let block = emitter.render_descriptor(&desc).unwrap();
        assert!(block.contains("    min = 0.5,\n"));
        assert!(block.contains("    max = 3,\n"));
        assert!(block.contains("    getter = getDevelopParam,\n"));
    }

    #[test]
    fn test_empty_alias_rejected() {
        let emitter = BindingEmitter::default();
        let desc = ParameterDescriptor::develop("Exposure", -5, 5).with_alias("");

        let err = emitter.render_descriptor(&desc).unwrap_err();
        assert!(matches!(
            err,
            EmitError::Validation(ValidationError::EmptyAlias { .. })
        ));
    }

    #[test]
    fn test_invalid_descriptor_writes_nothing() {
        let emitter = BindingEmitter::default();
        let descriptors = [
            ParameterDescriptor::develop("Tint", -150, 150),
            ParameterDescriptor::develop("Clarity", -100, 100).with_alias(""),
        ];

        let mut sink = Vec::new();
        let err = emitter.emit_descriptors(&descriptors, &mut sink).unwrap_err();

        assert!(matches!(err, EmitError::Validation(_)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stats() {
        let emitter = BindingEmitter::default();
        let mut sink = Vec::new();

        let stats = emitter.emit(&scenario(), &mut sink).unwrap();

        assert_eq!(stats.blocks, 2);
        assert_eq!(stats.versioned, 1);
        assert_eq!(stats.generic, 1);
        assert_eq!(stats.bytes, sink.len());
    }

    #[test]
    fn test_empty_registry() {
        let emitter = BindingEmitter::default();
        let mut sink = Vec::new();

        let stats = emitter.emit(&Registry::empty(), &mut sink).unwrap();

        assert_eq!(stats, EmitStats::default());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_wrapped_empty_registry() {
        let emitter = BindingEmitter::default().with_options(EmitOptions::new().with_wrap("Params"));
        assert_eq!(emitter.render(&Registry::empty()).unwrap(), "Params = {\n}\n");
    }

    #[test]
    fn test_setter_shared_across_categories() {
        let registry = Registry::new([
            ParameterDescriptor::develop("Vibrance", -100, 100),
            ParameterDescriptor::new("Amount", Category::new("lens"), 0, 100).with_alias("Amount2"),
        ])
        .unwrap();

        let text = BindingEmitter::default().render(&registry).unwrap();
        assert_eq!(text.matches("setter = setDevelopParam,").count(), 2);
    }

    #[test]
    fn test_sink_error_propagates() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = BindingEmitter::default()
            .emit(&scenario(), &mut Closed)
            .unwrap_err();

        match err {
            EmitError::Sink(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected sink error, got {other:?}"),
        }
    }
}
