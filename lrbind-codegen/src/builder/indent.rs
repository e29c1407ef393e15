//! Indentation configuration for emitted text.

/// Indentation style for emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, used by the host's settings files.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// Append `levels` indentation units to `buffer`.
    pub fn write_to(&self, buffer: &mut String, levels: usize) {
        match self {
            Self::Spaces(width) => {
                let count = levels * usize::from(*width);
                buffer.extend(std::iter::repeat_n(' ', count));
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', levels)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO_SPACES
    }
}
