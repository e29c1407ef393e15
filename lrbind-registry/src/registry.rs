//! The validated, ordered parameter registry.

use indexmap::{IndexMap, map::Entry};
use serde::{Serialize, Serializer};

use crate::{Category, ParameterDescriptor, Result, ValidationError};

/// An ordered collection of validated parameter descriptors.
///
/// Iteration order is exactly the order the descriptors were supplied in.
/// A registry can only be obtained through [`Registry::new`], so every
/// descriptor it holds satisfies the registry invariants.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, ParameterDescriptor>,
}

impl Registry {
    /// Build a registry, rejecting the first descriptor that breaks an
    /// invariant.
    pub fn new(descriptors: impl IntoIterator<Item = ParameterDescriptor>) -> Result<Self> {
        let descriptors = descriptors.into_iter();
        let mut entries = IndexMap::with_capacity(descriptors.size_hint().0);

        for (index, descriptor) in descriptors.enumerate() {
            descriptor.validate(index)?;

            match entries.entry(descriptor.name().to_string()) {
                Entry::Occupied(existing) => {
                    return Err(ValidationError::DuplicateName {
                        name: descriptor.name().to_string(),
                        first: existing.index(),
                        second: index,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
            }
        }

        tracing::debug!(parameters = entries.len(), "registry constructed");
        Ok(Self { entries })
    }

    /// A registry with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate descriptors in registry order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ParameterDescriptor> {
        self.entries.values()
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.entries.get(name)
    }

    /// Position of a descriptor in registry order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for descriptor in self.iter() {
            if !seen.contains(&descriptor.category()) {
                seen.push(descriptor.category());
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ParameterDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, ParameterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
