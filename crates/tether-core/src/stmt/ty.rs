use crate::schema::domain::EntityId;

/// A value type tag, used to coerce values read from or written to columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// A fixed-length tuple where each item can have a different type.
    Record(Vec<Type>),

    /// An instance of an entity
    Entity(EntityId),
}

impl Type {
    pub fn record(items: impl IntoIterator<Item = Type>) -> Self {
        Self::Record(items.into_iter().collect())
    }
}
