use super::{Value, ValueRecord};
use crate::schema::domain::EntityId;

/// An entity instance: its attribute values in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEntity {
    pub entity: EntityId,
    pub fields: ValueRecord,
}

impl ValueEntity {
    pub fn new(entity: EntityId, fields: impl Into<ValueRecord>) -> Self {
        Self {
            entity,
            fields: fields.into(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }
}
