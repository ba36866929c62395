use super::Navigable;
use crate::schema::db::Column;

use std::sync::Arc;

#[derive(Debug)]
pub struct ToOne {
    /// Foreign key columns, index-aligned with the target identifier's
    /// columns
    columns: Vec<Arc<Column>>,

    /// Identifier of the associated entity
    target: Arc<Navigable>,
}

impl ToOne {
    pub(super) fn new(columns: Vec<Arc<Column>>, target: Arc<Navigable>) -> Self {
        Self { columns, target }
    }

    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    pub fn target(&self) -> &Arc<Navigable> {
        &self.target
    }
}
