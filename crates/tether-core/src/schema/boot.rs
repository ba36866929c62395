//! Boot-time mapping metadata, as handed over by the metadata layer before
//! the runtime model is built. Everything here refers to database objects by
//! name.

use crate::stmt;

/// A foreign key as declared by the boot model.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub name: String,

    /// Table holding the referring columns
    pub table: String,

    /// Table holding the referenced columns
    pub target_table: String,

    /// Column pairs in key order
    pub columns: Vec<ForeignKeyColumn>,
}

#[derive(Debug, Clone)]
pub struct ForeignKeyColumn {
    pub referring: String,
    pub target: String,
}

/// A collection attribute as declared by the boot model.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Name of the collection attribute on the owning entity
    pub attribute: String,

    /// The key joining collection rows to their owner
    pub foreign_key: ForeignKey,

    /// Name of the element type's property holding the back reference to the
    /// owner, if the collection is the inverse side of an association
    pub mapped_by: Option<String>,

    /// Declared type of the whole key
    pub key_ty: Option<stmt::Type>,
}

impl ForeignKey {
    pub fn new<'a>(
        name: &str,
        table: &str,
        target_table: &str,
        columns: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
            target_table: target_table.to_string(),
            columns: columns
                .into_iter()
                .map(|(referring, target)| ForeignKeyColumn {
                    referring: referring.to_string(),
                    target: target.to_string(),
                })
                .collect(),
        }
    }
}

impl Collection {
    pub fn new(attribute: &str, foreign_key: ForeignKey) -> Self {
        Self {
            attribute: attribute.to_string(),
            foreign_key,
            mapped_by: None,
            key_ty: None,
        }
    }

    pub fn mapped_by(mut self, property: &str) -> Self {
        self.mapped_by = Some(property.to_string());
        self
    }

    pub fn key_ty(mut self, ty: stmt::Type) -> Self {
        self.key_ty = Some(ty);
        self
    }
}
