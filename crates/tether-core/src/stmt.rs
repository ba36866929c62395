mod clause;
pub use clause::Clause;

mod collect;
pub use collect::{BoundValue, ValueCollector};

mod selection;
pub use selection::{
    ColumnProjection, KeyProjection, ProjectionBuilder, Qualifier, SelectionCollector,
};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_entity;
pub use value_entity::ValueEntity;

mod value_record;
pub use value_record::ValueRecord;
