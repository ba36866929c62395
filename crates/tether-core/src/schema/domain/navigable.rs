use super::{BackReference, Basic, Composite, EntityId, Identifier, NavigableRole, ToOne};
use crate::{
    schema::db::Column,
    stmt::{Clause, Type, Value, ValueCollector},
    Error, Result,
};

use std::sync::{Arc, Weak};

/// A node of the domain graph that can be read from or written to relational
/// columns.
///
/// Every variant flattens values in a fixed order: the order its columns are
/// visited in. Composites visit their children in declaration order.
#[derive(Debug)]
pub struct Navigable {
    role: NavigableRole,
    kind: NavigableKind,
}

#[derive(Debug)]
pub enum NavigableKind {
    /// An attribute stored in a single column
    Basic(Basic),

    /// An entity's identifier, simple or embedded
    Identifier(Identifier),

    /// An embedded value made of child navigables
    Composite(Composite),

    /// A many-to-one association
    ToOne(ToOne),

    /// A named property looked up lazily on a container
    BackReference(BackReference),
}

impl Navigable {
    pub fn basic(role: NavigableRole, column: Arc<Column>) -> Arc<Navigable> {
        Arc::new(Navigable {
            role,
            kind: NavigableKind::Basic(Basic::new(column)),
        })
    }

    /// `index` is the position of the identifier among the entity's
    /// attributes; `value` is the basic or composite navigable storing it.
    pub fn identifier(
        role: NavigableRole,
        entity: EntityId,
        index: usize,
        value: Arc<Navigable>,
    ) -> Arc<Navigable> {
        Arc::new(Navigable {
            role,
            kind: NavigableKind::Identifier(Identifier::new(entity, index, value)),
        })
    }

    pub fn composite(role: NavigableRole, children: Vec<Arc<Navigable>>) -> Arc<Navigable> {
        Arc::new(Navigable {
            role,
            kind: NavigableKind::Composite(Composite::new(children)),
        })
    }

    /// Creates a many-to-one association whose `columns` hold the key of the
    /// entity identified by `target`.
    pub fn to_one(
        role: NavigableRole,
        columns: Vec<Arc<Column>>,
        target: Arc<Navigable>,
    ) -> Result<Arc<Navigable>> {
        let expected = target.column_count()?;
        if expected != columns.len() {
            return Err(Error::key_arity_mismatch(
                role.full_path(),
                expected,
                columns.len(),
            ));
        }

        Ok(Arc::new(Navigable {
            role,
            kind: NavigableKind::ToOne(ToOne::new(columns, target)),
        }))
    }

    pub fn back_reference(
        role: NavigableRole,
        container: Weak<dyn super::NavigableContainer>,
        name: impl Into<String>,
    ) -> Arc<Navigable> {
        Arc::new(Navigable {
            role,
            kind: NavigableKind::BackReference(BackReference::new(container, name.into())),
        })
    }

    pub fn role(&self) -> &NavigableRole {
        &self.role
    }

    pub fn kind(&self) -> &NavigableKind {
        &self.kind
    }

    pub fn is_back_reference(&self) -> bool {
        matches!(self.kind, NavigableKind::BackReference(_))
    }

    /// Follows back references until a navigable with a storage shape is
    /// reached.
    pub fn resolve(&self) -> Result<&Navigable> {
        let mut current = self;
        let mut seen: Vec<&Navigable> = vec![];

        while let NavigableKind::BackReference(back_reference) = &current.kind {
            if seen.iter().any(|other| std::ptr::eq(*other, current)) {
                return Err(Error::mapping_resolution(format!(
                    "back reference `{}` refers to itself",
                    self.role
                )));
            }

            seen.push(current);
            current = back_reference.target()?;
        }

        Ok(current)
    }

    /// Visits the columns this navigable occupies, in flattening order.
    pub fn visit_columns(
        &self,
        clause: Clause,
        action: &mut dyn FnMut(&Type, &Arc<Column>),
    ) -> Result<()> {
        match &self.kind {
            NavigableKind::Basic(basic) => {
                action(&basic.column().ty, basic.column());
                Ok(())
            }
            NavigableKind::Identifier(identifier) => {
                identifier.value().visit_columns(clause, action)
            }
            NavigableKind::Composite(composite) => {
                for child in composite.children() {
                    child.visit_columns(clause, action)?;
                }
                Ok(())
            }
            NavigableKind::ToOne(to_one) => {
                for column in to_one.columns() {
                    action(&column.ty, column);
                }
                Ok(())
            }
            NavigableKind::BackReference(_) => self.resolve()?.visit_columns(clause, action),
        }
    }

    pub fn visit_jdbc_types(&self, clause: Clause, action: &mut dyn FnMut(&Type)) -> Result<()> {
        self.visit_columns(clause, &mut |ty, _| action(ty))
    }

    pub fn columns(&self) -> Result<Vec<Arc<Column>>> {
        let mut columns = vec![];
        self.visit_columns(Clause::Irrelevant, &mut |_, column| {
            columns.push(column.clone())
        })?;
        Ok(columns)
    }

    pub fn column_count(&self) -> Result<usize> {
        let mut count = 0;
        self.visit_columns(Clause::Irrelevant, &mut |_, _| count += 1)?;
        Ok(count)
    }

    /// Converts a domain value into its raw identifying key form.
    ///
    /// Values that are already keys are returned unchanged.
    pub fn unresolve(&self, value: &Value) -> Result<Value> {
        match &self.kind {
            NavigableKind::Basic(_) => Ok(value.clone()),
            NavigableKind::Identifier(identifier) => identifier.unresolve(value),
            NavigableKind::Composite(composite) => match value {
                Value::Null => Ok(Value::Null),
                Value::Record(record) if record.len() == composite.children().len() => {
                    let fields = composite
                        .children()
                        .iter()
                        .zip(record.iter())
                        .map(|(child, value)| child.unresolve(value))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Value::record_from_vec(fields))
                }
                other => Err(Error::type_conversion(other.clone(), "composite record")),
            },
            NavigableKind::ToOne(to_one) => to_one.target().unresolve(value),
            NavigableKind::BackReference(_) => self.resolve()?.unresolve(value),
        }
    }

    /// Flattens `value` into one scalar per column, in column order.
    ///
    /// A null value binds null to every column.
    pub fn dehydrate(
        &self,
        value: &Value,
        collector: &mut dyn ValueCollector,
        clause: Clause,
    ) -> Result<()> {
        match &self.kind {
            NavigableKind::Basic(basic) => basic.dehydrate(value, collector),
            NavigableKind::Identifier(identifier) => {
                let key = identifier.unresolve(value)?;
                identifier.value().dehydrate(&key, collector, clause)
            }
            NavigableKind::Composite(composite) => match value {
                Value::Null => {
                    for child in composite.children() {
                        child.dehydrate(&Value::Null, collector, clause)?;
                    }
                    Ok(())
                }
                Value::Record(record) if record.len() == composite.children().len() => {
                    for (child, value) in composite.children().iter().zip(record.iter()) {
                        child.dehydrate(value, collector, clause)?;
                    }
                    Ok(())
                }
                other => Err(Error::type_conversion(other.clone(), "composite record")),
            },
            NavigableKind::ToOne(to_one) => {
                let key = to_one.target().unresolve(value)?;
                let mut remap = super::ColumnRemap::new(to_one.columns());
                to_one.target().dehydrate(&key, &mut remap, clause)?;
                remap.finish(&self.role, collector)
            }
            NavigableKind::BackReference(_) => self.resolve()?.dehydrate(value, collector, clause),
        }
    }
}
