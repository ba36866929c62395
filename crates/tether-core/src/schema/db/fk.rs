use super::{Column, TableId};
use crate::{Error, Result};

use std::sync::Arc;

/// A relational foreign key.
///
/// `referring[i]` references `target[i]`. Both lists are non-empty and of the
/// same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub name: String,

    /// Columns on the child (collection) side
    referring: Vec<Arc<Column>>,

    /// Columns on the parent (owner) side
    target: Vec<Arc<Column>>,
}

impl ForeignKey {
    pub fn new(
        name: impl Into<String>,
        referring: Vec<Arc<Column>>,
        target: Vec<Arc<Column>>,
    ) -> Result<ForeignKey> {
        let name = name.into();

        if referring.is_empty() {
            return Err(Error::invalid_schema(format!(
                "foreign key `{name}` has no columns"
            )));
        }

        if referring.len() != target.len() {
            return Err(Error::invalid_schema(format!(
                "foreign key `{name}` pairs {} referring columns with {} target columns",
                referring.len(),
                target.len()
            )));
        }

        Ok(ForeignKey {
            name,
            referring,
            target,
        })
    }

    pub fn referring_columns(&self) -> &[Arc<Column>] {
        &self.referring
    }

    pub fn target_columns(&self) -> &[Arc<Column>] {
        &self.target
    }

    /// Number of column pairs.
    pub fn arity(&self) -> usize {
        self.referring.len()
    }

    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (&Arc<Column>, &Arc<Column>)> + '_ {
        self.referring.iter().zip(self.target.iter())
    }

    pub fn referring_table(&self) -> TableId {
        self.referring[0].id.table
    }

    pub fn target_table(&self) -> TableId {
        self.target[0].id.table
    }
}
