use crate::{
    schema::db::Column,
    stmt::{Value, ValueCollector},
    Error, Result,
};

use std::sync::Arc;

#[derive(Debug)]
pub struct Basic {
    column: Arc<Column>,
}

impl Basic {
    pub(super) fn new(column: Arc<Column>) -> Self {
        Self { column }
    }

    pub fn column(&self) -> &Arc<Column> {
        &self.column
    }

    pub(super) fn dehydrate(
        &self,
        value: &Value,
        collector: &mut dyn ValueCollector,
    ) -> Result<()> {
        if value.is_record() || value.is_entity() {
            return Err(Error::type_conversion(value.clone(), "scalar"));
        }

        collector.collect(value.clone(), &self.column.ty, &self.column);
        Ok(())
    }
}
