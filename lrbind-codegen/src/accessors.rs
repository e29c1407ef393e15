//! Accessor references written into binding blocks.

use lrbind_registry::Binding;

/// The setter and getter references an emitter writes.
///
/// There is exactly one setter, shared by every parameter. The getter is
/// chosen per parameter from the two getters by its [`Binding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessors {
    setter: String,
    generic_getter: String,
    versioned_getter: String,
}

impl Accessors {
    pub fn new(
        setter: impl Into<String>,
        generic_getter: impl Into<String>,
        versioned_getter: impl Into<String>,
    ) -> Self {
        Self {
            setter: setter.into(),
            generic_getter: generic_getter.into(),
            versioned_getter: versioned_getter.into(),
        }
    }

    /// Accessors of the develop module.
    pub fn develop() -> Self {
        Self::new("setDevelopParam", "getDevelopParam", "get2012DevelopParam")
    }

    pub fn setter(&self) -> &str {
        &self.setter
    }

    /// Select the getter for a binding.
    pub fn getter(&self, binding: &Binding) -> &str {
        match binding {
            Binding::Generic => &self.generic_getter,
            Binding::Versioned { .. } => &self.versioned_getter,
        }
    }
}

impl Default for Accessors {
    fn default() -> Self {
        Self::develop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getter_selection() {
        let accessors = Accessors::develop();
        assert_eq!(accessors.getter(&Binding::Generic), "getDevelopParam");
        assert_eq!(
            accessors.getter(&Binding::Versioned {
                alias: "Clarity2012".to_string()
            }),
            "get2012DevelopParam"
        );
    }

    #[test]
    fn test_custom_accessors() {
        let accessors = Accessors::new("setLensParam", "getLensParam", "getLegacyLensParam");
        assert_eq!(accessors.setter(), "setLensParam");
        assert_eq!(accessors.getter(&Binding::Generic), "getLensParam");
    }
}
