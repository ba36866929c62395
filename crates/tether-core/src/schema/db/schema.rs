use super::{Column, ColumnId, ForeignKey, Table, TableId};
use crate::{schema::boot, stmt, Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// The database-level schema: the tables whose columns mapping metadata
/// refers to.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Table columns by table name, in declaration order
    tables: IndexMap<String, Vec<(String, stmt::Type)>>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Shorthand for looking up `table.column` by name.
    pub fn column(&self, table: &str, column: &str) -> Option<&Arc<Column>> {
        self.table_by_name(table)?.column_by_name(column)
    }

    /// Resolves a boot-time foreign key into a foreign key over this schema's
    /// columns.
    pub fn resolve_foreign_key(&self, boot: &boot::ForeignKey) -> Result<ForeignKey> {
        let referring_table = self.require_table(&boot.name, &boot.table)?;
        let target_table = self.require_table(&boot.name, &boot.target_table)?;

        let mut referring = Vec::with_capacity(boot.columns.len());
        let mut target = Vec::with_capacity(boot.columns.len());

        for column in &boot.columns {
            let fk = &boot.name;
            let from = Self::require_column(fk, referring_table, &column.referring)?;
            let to = Self::require_column(fk, target_table, &column.target)?;
            referring.push(from);
            target.push(to);
        }

        ForeignKey::new(&boot.name, referring, target)
    }

    fn require_table(&self, fk: &str, name: &str) -> Result<&Table> {
        self.table_by_name(name).ok_or_else(|| {
            Error::invalid_schema(format!(
                "foreign key `{fk}` refers to unknown table `{name}`"
            ))
        })
    }

    fn require_column(fk: &str, table: &Table, name: &str) -> Result<Arc<Column>> {
        table.column_by_name(name).cloned().ok_or_else(|| {
            Error::invalid_schema(format!(
                "foreign key `{fk}` refers to unknown column `{}.{name}`",
                table.name
            ))
        })
    }
}

impl SchemaBuilder {
    pub fn table<'a>(
        &mut self,
        name: &str,
        columns: impl IntoIterator<Item = (&'a str, stmt::Type)>,
    ) -> &mut Self {
        self.tables
            .entry(name.to_string())
            .or_default()
            .extend(columns.into_iter().map(|(name, ty)| (name.to_string(), ty)));
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut tables = Vec::with_capacity(self.tables.len());

        for (index, (name, columns)) in self.tables.iter().enumerate() {
            let id = TableId(index);
            let mut table = Table {
                id,
                name: name.clone(),
                columns: Vec::with_capacity(columns.len()),
            };

            for (column_name, ty) in columns {
                if table.column_by_name(column_name).is_some() {
                    return Err(Error::invalid_schema(format!(
                        "table `{name}` declares column `{column_name}` more than once"
                    )));
                }

                let index = table.columns.len();
                table.columns.push(Arc::new(Column {
                    id: ColumnId { table: id, index },
                    name: column_name.clone(),
                    ty: ty.clone(),
                }));
            }

            tables.push(table);
        }

        Ok(Schema { tables })
    }
}
