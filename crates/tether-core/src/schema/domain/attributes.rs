use super::{Navigable, NavigableContainer, NavigableRole};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::{Arc, Weak};

/// Attributes collected by a container builder, in declaration order.
#[derive(Debug, Clone)]
pub(super) struct AttributesBuilder {
    role: NavigableRole,
    entries: Vec<(String, Entry)>,
}

#[derive(Debug, Clone)]
enum Entry {
    Navigable(Arc<Navigable>),

    /// Name of the property the back reference stands for
    BackReference(String),
}

impl AttributesBuilder {
    pub(super) fn new(role: NavigableRole) -> Self {
        Self {
            role,
            entries: vec![],
        }
    }

    pub(super) fn role(&self) -> &NavigableRole {
        &self.role
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn push(&mut self, name: &str, navigable: Arc<Navigable>) {
        self.entries
            .push((name.to_string(), Entry::Navigable(navigable)));
    }

    pub(super) fn push_back_reference(&mut self, name: &str, target: &str) {
        self.entries
            .push((name.to_string(), Entry::BackReference(target.to_string())));
    }

    pub(super) fn verify(&self) -> Result<()> {
        for (i, (name, _)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|(other, _)| other == name) {
                return Err(Error::invalid_schema(format!(
                    "`{}` declares the attribute `{}` more than once",
                    self.role, name
                )));
            }
        }

        Ok(())
    }

    /// Back references are bound to `container`, which must be the container
    /// being built.
    pub(super) fn build(
        &self,
        container: &Weak<dyn NavigableContainer>,
    ) -> IndexMap<String, Arc<Navigable>> {
        self.entries
            .iter()
            .map(|(name, entry)| {
                let navigable = match entry {
                    Entry::Navigable(navigable) => navigable.clone(),
                    Entry::BackReference(target) => Navigable::back_reference(
                        self.role.append(name),
                        container.clone(),
                        target.as_str(),
                    ),
                };
                (name.clone(), navigable)
            })
            .collect()
    }
}
