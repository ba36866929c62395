use super::{attributes::AttributesBuilder, Navigable, NavigableContainer, NavigableRole};
use crate::{schema::db::Column, Result};

use indexmap::IndexMap;
use std::sync::{Arc, Weak};

/// Runtime descriptor of an embeddable type, such as the element type of a
/// collection of components.
#[derive(Debug)]
pub struct EmbeddableDescriptor {
    role: NavigableRole,
    attributes: IndexMap<String, Arc<Navigable>>,
}

#[derive(Debug, Clone)]
pub struct EmbeddableBuilder {
    attributes: AttributesBuilder,
}

impl EmbeddableDescriptor {
    pub fn builder(role: NavigableRole) -> EmbeddableBuilder {
        EmbeddableBuilder {
            attributes: AttributesBuilder::new(role),
        }
    }

    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &Arc<Navigable>)> + '_ {
        self.attributes
            .iter()
            .map(|(name, navigable)| (name.as_str(), navigable))
    }
}

impl NavigableContainer for EmbeddableDescriptor {
    fn role(&self) -> &NavigableRole {
        &self.role
    }

    fn find_navigable(&self, name: &str) -> Option<&Arc<Navigable>> {
        self.attributes.get(name)
    }
}

impl EmbeddableBuilder {
    pub fn role(&self) -> &NavigableRole {
        self.attributes.role()
    }

    pub fn basic(&mut self, name: &str, column: Arc<Column>) -> &mut Self {
        let navigable = Navigable::basic(self.role().append(name), column);
        self.attributes.push(name, navigable);
        self
    }

    pub fn attribute(&mut self, name: &str, navigable: Arc<Navigable>) -> &mut Self {
        self.attributes.push(name, navigable);
        self
    }

    /// Declares `name` as another name for this embeddable's `target`
    /// property.
    pub fn back_reference(&mut self, name: &str, target: &str) -> &mut Self {
        self.attributes.push_back_reference(name, target);
        self
    }

    pub fn build(&self) -> Result<Arc<EmbeddableDescriptor>> {
        self.attributes.verify()?;

        Ok(Arc::new_cyclic(|weak: &Weak<EmbeddableDescriptor>| {
            let container: Weak<dyn NavigableContainer> = weak.clone();

            EmbeddableDescriptor {
                role: self.role().clone(),
                attributes: self.attributes.build(&container),
            }
        }))
    }
}
