use super::Type;
use crate::{
    schema::db::{Column, ColumnId, TableId},
    Error, Result,
};

use indexmap::IndexMap;

/// Qualifies column references with the table reference they are read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    /// The table the alias refers to
    pub table: TableId,

    /// The alias used in the statement being assembled
    pub alias: String,
}

/// A single column read by the statement being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection {
    /// Position of the selection in the statement's select list
    pub position: usize,

    /// Alias of the table reference the column is read through
    pub alias: String,

    pub column: ColumnId,

    /// The value type values read from the column are coerced to
    pub ty: Type,
}

/// A read projection over one side of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyProjection {
    /// Single-column key, carrying the column's own type
    Scalar(ColumnProjection),

    /// Multi-column key, selections in key column order
    Composite {
        ty: Type,
        selections: Vec<ColumnProjection>,
    },
}

/// Resolves or creates the read-selection of a column for a statement being
/// assembled.
pub trait ProjectionBuilder {
    /// Implementations report failures with [`Error::projection_resolution`].
    fn resolve_or_create(&mut self, qualifier: &Qualifier, column: &Column)
        -> Result<ColumnProjection>;
}

impl KeyProjection {
    pub fn ty(&self) -> &Type {
        match self {
            KeyProjection::Scalar(selection) => &selection.ty,
            KeyProjection::Composite { ty, .. } => ty,
        }
    }

    pub fn selections(&self) -> &[ColumnProjection] {
        match self {
            KeyProjection::Scalar(selection) => std::slice::from_ref(selection),
            KeyProjection::Composite { selections, .. } => selections,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, KeyProjection::Scalar(_))
    }
}

/// Builds the select list of a single statement.
///
/// Each distinct (alias, column) pair is assigned one position. Requesting
/// the same pair again returns the existing selection.
#[derive(Debug, Default)]
pub struct SelectionCollector {
    selections: IndexMap<(String, ColumnId), ColumnProjection>,
}

impl SelectionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Selections in select-list order.
    pub fn selections(&self) -> impl ExactSizeIterator<Item = &ColumnProjection> + '_ {
        self.selections.values()
    }
}

impl ProjectionBuilder for SelectionCollector {
    fn resolve_or_create(
        &mut self,
        qualifier: &Qualifier,
        column: &Column,
    ) -> Result<ColumnProjection> {
        if column.id.table != qualifier.table {
            return Err(Error::projection_resolution(anyhow::anyhow!(
                "column `{}` does not belong to the table aliased `{}`",
                column.name,
                qualifier.alias
            )));
        }

        let position = self.selections.len();
        let selection = self
            .selections
            .entry((qualifier.alias.clone(), column.id))
            .or_insert_with(|| ColumnProjection {
                position,
                alias: qualifier.alias.clone(),
                column: column.id,
                ty: column.ty.clone(),
            });

        Ok(selection.clone())
    }
}
