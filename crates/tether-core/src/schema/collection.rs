mod key;
pub use key::CollectionKey;

use super::{
    boot, db,
    domain::{ElementDescriptor, EntityDescriptor, NavigableRole},
};
use crate::Result;

use std::sync::Arc;

/// Runtime descriptor of a collection attribute.
#[derive(Debug)]
pub struct PersistentCollection {
    role: NavigableRole,

    /// The entity declaring the collection
    owner: Arc<EntityDescriptor>,

    element: ElementDescriptor,

    mapped_by: Option<String>,

    key: CollectionKey,
}

impl PersistentCollection {
    /// Builds the runtime descriptor, resolving the boot foreign key against
    /// `db`.
    pub fn new(
        boot: &boot::Collection,
        owner: Arc<EntityDescriptor>,
        element: ElementDescriptor,
        db: &db::Schema,
    ) -> Result<Arc<PersistentCollection>> {
        let foreign_key = db.resolve_foreign_key(&boot.foreign_key)?;
        let role = NavigableRole::new(owner.name()).append(&boot.attribute);

        Ok(Arc::new_cyclic(|collection| PersistentCollection {
            key: CollectionKey::new(collection.clone(), &role, boot.key_ty.clone(), foreign_key),
            role,
            owner,
            element,
            mapped_by: boot.mapped_by.clone(),
        }))
    }

    pub fn role(&self) -> &NavigableRole {
        &self.role
    }

    pub fn owner(&self) -> &Arc<EntityDescriptor> {
        &self.owner
    }

    pub fn element(&self) -> &ElementDescriptor {
        &self.element
    }

    /// The element type's property holding the back reference, if any. An
    /// empty name counts as none.
    pub fn mapped_by(&self) -> Option<&str> {
        self.mapped_by.as_deref().filter(|name| !name.is_empty())
    }

    pub fn key(&self) -> &CollectionKey {
        &self.key
    }
}
