use super::PersistentCollection;
use crate::{
    schema::{
        db::{Column, ForeignKey},
        domain::{ColumnRemap, Navigable, NavigableRole},
    },
    stmt::{
        Clause, KeyProjection, ProjectionBuilder, Qualifier, Type, Value, ValueCollector,
    },
    Error, Result,
};

use std::{
    fmt,
    sync::{Arc, OnceLock, Weak},
};

/// The foreign key joining a collection's rows to their owner.
///
/// The key targets either the owner's identifier or, for an inverse
/// collection, the element type's mapped-by property. The target is resolved
/// on first use and cached; a failed resolution is not cached.
pub struct CollectionKey {
    /// The collection this key belongs to. Only used for metadata lookups.
    collection: Weak<PersistentCollection>,

    role: NavigableRole,

    /// Type of the whole key
    key_ty: Type,

    join_foreign_key: ForeignKey,

    target: OnceLock<Arc<Navigable>>,
}

impl CollectionKey {
    pub(super) fn new(
        collection: Weak<PersistentCollection>,
        collection_role: &NavigableRole,
        key_ty: Option<Type>,
        join_foreign_key: ForeignKey,
    ) -> CollectionKey {
        let key_ty = key_ty.unwrap_or_else(|| match join_foreign_key.referring_columns() {
            [column] => column.ty.clone(),
            columns => Type::record(columns.iter().map(|column| column.ty.clone())),
        });

        CollectionKey {
            collection,
            role: collection_role.append("{collection-key}"),
            key_ty,
            join_foreign_key,
            target: OnceLock::new(),
        }
    }

    pub fn join_foreign_key(&self) -> &ForeignKey {
        &self.join_foreign_key
    }

    pub fn role(&self) -> &NavigableRole {
        &self.role
    }

    pub fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    pub fn is_resolved(&self) -> bool {
        self.target.get().is_some()
    }

    /// The navigable the foreign key targets, resolving it on first call.
    pub fn target_navigable(&self) -> Result<&Arc<Navigable>> {
        if let Some(target) = self.target.get() {
            return Ok(target);
        }

        let target = self.resolve_target()?;

        // Racing callers compute equal targets; whichever lands first is kept.
        Ok(self.target.get_or_init(|| target))
    }

    fn resolve_target(&self) -> Result<Arc<Navigable>> {
        let collection = self.collection()?;
        let role = collection.role();

        let target = match collection.mapped_by() {
            None => {
                let owner = collection.owner();
                owner.identifier().cloned().ok_or_else(|| {
                    Error::mapping_resolution(format!(
                        "`{role}` is keyed by its owner's identifier, but `{}` has none",
                        owner.name()
                    ))
                })?
            }
            Some(mapped_by) => {
                let container = collection.element().as_container().ok_or_else(|| {
                    Error::mapping_resolution(format!(
                        "`{role}` is mapped by `{mapped_by}`, but its elements have no properties"
                    ))
                })?;

                container.find_navigable(mapped_by).cloned().ok_or_else(|| {
                    Error::mapping_resolution(format!(
                        "`{role}` is mapped by `{mapped_by}`, which `{}` does not declare",
                        container.role()
                    ))
                })?
            }
        };

        let actual = target.column_count()?;
        if actual != self.join_foreign_key.arity() {
            return Err(Error::key_arity_mismatch(
                self.role.full_path(),
                self.join_foreign_key.arity(),
                actual,
            ));
        }

        log::debug!("{} targets `{}`", self, target.role());

        Ok(target)
    }

    fn collection(&self) -> Result<Arc<PersistentCollection>> {
        self.collection.upgrade().ok_or_else(|| {
            Error::mapping_resolution(format!("collection of `{}` has been dropped", self.role))
        })
    }

    /// Builds a read projection of the owner side of the key.
    pub fn build_owner_projection(
        &self,
        qualifier: &Qualifier,
        builder: &mut dyn ProjectionBuilder,
    ) -> Result<KeyProjection> {
        self.build_projection(self.join_foreign_key.target_columns(), qualifier, builder)
    }

    /// Builds a read projection of the collection side of the key.
    pub fn build_element_projection(
        &self,
        qualifier: &Qualifier,
        builder: &mut dyn ProjectionBuilder,
    ) -> Result<KeyProjection> {
        let columns = self.join_foreign_key.referring_columns();
        self.build_projection(columns, qualifier, builder)
    }

    fn build_projection(
        &self,
        columns: &[Arc<Column>],
        qualifier: &Qualifier,
        builder: &mut dyn ProjectionBuilder,
    ) -> Result<KeyProjection> {
        match columns {
            [column] => {
                let selection = builder.resolve_or_create(qualifier, column)?;
                Ok(KeyProjection::Scalar(selection))
            }
            columns => {
                let selections = columns
                    .iter()
                    .map(|column| builder.resolve_or_create(qualifier, column))
                    .collect::<Result<Vec<_>>>()?;

                Ok(KeyProjection::Composite {
                    ty: self.key_ty.clone(),
                    selections,
                })
            }
        }
    }

    /// Converts a domain value, e.g. the owning entity, into its key value.
    pub fn unresolve(&self, value: &Value) -> Result<Value> {
        self.target_navigable()?.unresolve(value)
    }

    /// Flattens `value` into one scalar per collection-side column, in key
    /// order.
    ///
    /// The target navigable decomposes the value; its i-th scalar is bound to
    /// the i-th referring column instead of the column it came from.
    pub fn dehydrate(
        &self,
        value: &Value,
        collector: &mut dyn ValueCollector,
        clause: Clause,
    ) -> Result<()> {
        let mut remap = ColumnRemap::new(self.join_foreign_key.referring_columns());
        self.target_navigable()?.dehydrate(value, &mut remap, clause)?;
        remap.finish(&self.role, collector)?;

        log::trace!("dehydrated {} for {:?}", self, clause);
        Ok(())
    }

    /// Visits the collection-side columns of the key.
    pub fn visit_columns(&self, _clause: Clause, mut action: impl FnMut(&Type, &Arc<Column>)) {
        for column in self.join_foreign_key.referring_columns() {
            action(&column.ty, column);
        }
    }

    pub fn visit_jdbc_types(&self, clause: Clause, mut action: impl FnMut(&Type)) {
        self.visit_columns(clause, |ty, _| action(ty));
    }

    pub fn loggable_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let collection = self
            .role
            .full_path()
            .strip_suffix(".{collection-key}")
            .unwrap_or(self.role.full_path());
        write!(f, "CollectionKey({collection})")
    }
}

impl fmt::Debug for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionKey")
            .field("role", &self.role)
            .field("key_ty", &self.key_ty)
            .field("join_foreign_key", &self.join_foreign_key.name)
            .field("target", &self.target.get().map(|target| target.role()))
            .finish()
    }
}
