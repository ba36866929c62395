use super::{attributes::AttributesBuilder, Navigable, NavigableContainer, NavigableRole};
use crate::{schema::db::Column, Error, Result};

use indexmap::IndexMap;
use std::{
    fmt,
    sync::{Arc, Weak},
};

/// Runtime descriptor of an entity type.
#[derive(Debug)]
pub struct EntityDescriptor {
    id: EntityId,

    name: String,

    role: NavigableRole,

    /// Position of the identifier in `attributes`, if the entity has one
    identifier: Option<usize>,

    /// Attributes in declaration order. Entity instance values list their
    /// fields in the same order.
    attributes: IndexMap<String, Arc<Navigable>>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(pub usize);

#[derive(Debug, Clone)]
pub struct EntityBuilder {
    id: EntityId,
    name: String,
    identifiers: Vec<usize>,
    attributes: AttributesBuilder,
}

impl EntityDescriptor {
    pub fn builder(id: EntityId, name: &str) -> EntityBuilder {
        EntityBuilder {
            id,
            name: name.to_string(),
            identifiers: vec![],
            attributes: AttributesBuilder::new(NavigableRole::new(name)),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> Option<&Arc<Navigable>> {
        self.identifier
            .and_then(|index| self.attributes.get_index(index))
            .map(|(_, navigable)| navigable)
    }

    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &Arc<Navigable>)> + '_ {
        self.attributes
            .iter()
            .map(|(name, navigable)| (name.as_str(), navigable))
    }

    /// Position of the named attribute in entity instance values.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.get_index_of(name)
    }
}

impl NavigableContainer for EntityDescriptor {
    fn role(&self) -> &NavigableRole {
        &self.role
    }

    fn find_navigable(&self, name: &str) -> Option<&Arc<Navigable>> {
        self.attributes.get(name)
    }
}

impl EntityBuilder {
    pub fn role(&self) -> &NavigableRole {
        self.attributes.role()
    }

    /// Declares a single-column identifier.
    pub fn simple_identifier(&mut self, name: &str, column: Arc<Column>) -> &mut Self {
        let value = Navigable::basic(self.role().append(name), column);
        self.identifier(name, value)
    }

    /// Declares an embedded identifier with one basic attribute per column.
    pub fn embedded_identifier<'a>(
        &mut self,
        name: &str,
        columns: impl IntoIterator<Item = (&'a str, Arc<Column>)>,
    ) -> &mut Self {
        let role = self.role().append(name);
        let children = columns
            .into_iter()
            .map(|(name, column)| Navigable::basic(role.append(name), column))
            .collect();
        let value = Navigable::composite(role, children);
        self.identifier(name, value)
    }

    /// Declares an identifier stored by `value`.
    pub fn identifier(&mut self, name: &str, value: Arc<Navigable>) -> &mut Self {
        let index = self.attributes.len();
        let identifier = Navigable::identifier(self.role().append(name), self.id, index, value);
        self.identifiers.push(index);
        self.attributes.push(name, identifier);
        self
    }

    pub fn basic(&mut self, name: &str, column: Arc<Column>) -> &mut Self {
        let navigable = Navigable::basic(self.role().append(name), column);
        self.attributes.push(name, navigable);
        self
    }

    /// Declares a many-to-one association to `target`, stored in `columns`.
    pub fn to_one(
        &mut self,
        name: &str,
        columns: Vec<Arc<Column>>,
        target: &EntityDescriptor,
    ) -> Result<&mut Self> {
        let identifier = target.identifier().ok_or_else(|| {
            Error::mapping_resolution(format!(
                "`{}.{}` refers to `{}`, which has no identifier",
                self.role(),
                name,
                target.name
            ))
        })?;

        let navigable = Navigable::to_one(self.role().append(name), columns, identifier.clone())?;
        self.attributes.push(name, navigable);
        Ok(self)
    }

    pub fn attribute(&mut self, name: &str, navigable: Arc<Navigable>) -> &mut Self {
        self.attributes.push(name, navigable);
        self
    }

    /// Declares `name` as another name for this entity's `target` property.
    pub fn back_reference(&mut self, name: &str, target: &str) -> &mut Self {
        self.attributes.push_back_reference(name, target);
        self
    }

    pub fn build(&self) -> Result<Arc<EntityDescriptor>> {
        if self.identifiers.len() > 1 {
            return Err(Error::invalid_schema(format!(
                "entity `{}` declares {} identifiers",
                self.name,
                self.identifiers.len()
            )));
        }

        self.attributes.verify()?;

        Ok(Arc::new_cyclic(|weak: &Weak<EntityDescriptor>| {
            let container: Weak<dyn NavigableContainer> = weak.clone();

            EntityDescriptor {
                id: self.id,
                name: self.name.clone(),
                role: self.role().clone(),
                identifier: self.identifiers.first().copied(),
                attributes: self.attributes.build(&container),
            }
        }))
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
