mod attributes;

mod back_reference;
pub use back_reference::BackReference;

mod basic;
pub use basic::Basic;

mod composite;
pub use composite::Composite;

mod container;
pub use container::NavigableContainer;

mod element;
pub use element::ElementDescriptor;

mod embeddable;
pub use embeddable::{EmbeddableBuilder, EmbeddableDescriptor};

mod entity;
pub use entity::{EntityBuilder, EntityDescriptor, EntityId};

mod identifier;
pub use identifier::Identifier;

mod navigable;
pub use navigable::{Navigable, NavigableKind};

mod remap;
pub(crate) use remap::ColumnRemap;

mod role;
pub use role::NavigableRole;

mod to_one;
pub use to_one::ToOne;
