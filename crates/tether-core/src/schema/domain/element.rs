use super::{EmbeddableDescriptor, EntityDescriptor, NavigableContainer};
use crate::stmt::Type;

use std::sync::Arc;

/// What a collection holds.
#[derive(Debug, Clone)]
pub enum ElementDescriptor {
    /// Plain values, e.g. a collection of strings
    Basic(Type),

    /// Components stored in a collection table
    Embeddable(Arc<EmbeddableDescriptor>),

    /// Associated entities
    Entity(Arc<EntityDescriptor>),
}

impl ElementDescriptor {
    /// Returns the element type as a navigable container. Basic elements have
    /// no properties to look up.
    pub fn as_container(&self) -> Option<&dyn NavigableContainer> {
        match self {
            ElementDescriptor::Basic(_) => None,
            ElementDescriptor::Embeddable(embeddable) => {
                Some(embeddable.as_ref() as &dyn NavigableContainer)
            }
            ElementDescriptor::Entity(entity) => Some(entity.as_ref() as &dyn NavigableContainer),
        }
    }
}
