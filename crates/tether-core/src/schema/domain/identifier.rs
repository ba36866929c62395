use super::{EntityId, Navigable};
use crate::{stmt::Value, Error, Result};

use std::sync::Arc;

#[derive(Debug)]
pub struct Identifier {
    /// The entity this identifies
    entity: EntityId,

    /// Position of the identifier among the entity's attribute values
    index: usize,

    /// Basic navigable for a simple id, composite for an embedded id
    value: Arc<Navigable>,
}

impl Identifier {
    pub(super) fn new(entity: EntityId, index: usize, value: Arc<Navigable>) -> Self {
        Self {
            entity,
            index,
            value,
        }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &Arc<Navigable> {
        &self.value
    }

    /// Extracts the id from an entity instance. Anything else is taken to
    /// already be an id value.
    pub(super) fn unresolve(&self, value: &Value) -> Result<Value> {
        let Value::Entity(entity) = value else {
            return Ok(value.clone());
        };

        if entity.entity != self.entity {
            return Err(Error::type_conversion(value.clone(), "identified entity"));
        }

        entity
            .field(self.index)
            .cloned()
            .ok_or_else(|| Error::type_conversion(value.clone(), "identifier field"))
    }
}
