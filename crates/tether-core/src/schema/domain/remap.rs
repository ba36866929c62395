use super::NavigableRole;
use crate::{
    schema::db::Column,
    stmt::{Type, Value, ValueCollector},
    Error, Result,
};

use std::sync::Arc;

/// Re-stamps a navigable's flattened scalars onto another column list.
///
/// The i-th scalar collected is bound to the i-th column. Scalars are held
/// back until [`finish`](Self::finish) has checked the count, so nothing
/// reaches the downstream collector when the arity is wrong.
pub(crate) struct ColumnRemap<'a> {
    columns: &'a [Arc<Column>],
    values: Vec<(Value, Type)>,
}

impl<'a> ColumnRemap<'a> {
    pub(crate) fn new(columns: &'a [Arc<Column>]) -> Self {
        Self {
            columns,
            values: Vec::with_capacity(columns.len()),
        }
    }

    pub(crate) fn finish(
        self,
        role: &NavigableRole,
        collector: &mut dyn ValueCollector,
    ) -> Result<()> {
        if self.values.len() != self.columns.len() {
            return Err(Error::key_arity_mismatch(
                role.full_path(),
                self.columns.len(),
                self.values.len(),
            ));
        }

        for ((value, ty), column) in self.values.into_iter().zip(self.columns) {
            collector.collect(value, &ty, column);
        }

        Ok(())
    }
}

impl ValueCollector for ColumnRemap<'_> {
    fn collect(&mut self, value: Value, ty: &Type, _column: &Arc<Column>) {
        self.values.push((value, ty.clone()));
    }
}
