use super::{Type, Value};
use crate::schema::db::Column;

use std::sync::Arc;

/// Receives the column-bound scalars produced by dehydrating a value.
///
/// Scalars arrive one per column, in column declaration order.
pub trait ValueCollector {
    fn collect(&mut self, value: Value, ty: &Type, column: &Arc<Column>);
}

/// A scalar bound to the column it will be written to.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
    pub value: Value,
    pub ty: Type,
    pub column: Arc<Column>,
}

impl ValueCollector for Vec<BoundValue> {
    fn collect(&mut self, value: Value, ty: &Type, column: &Arc<Column>) {
        self.push(BoundValue {
            value,
            ty: ty.clone(),
            column: column.clone(),
        });
    }
}
