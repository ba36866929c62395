pub mod boot;

pub mod collection;
pub use collection::{CollectionKey, PersistentCollection};

pub mod db;

pub mod domain;
pub use domain::{Navigable, NavigableRole};
