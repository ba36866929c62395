use super::{Navigable, NavigableRole};

use std::sync::Arc;

/// A domain type whose attributes can be looked up by name.
pub trait NavigableContainer: Send + Sync {
    fn role(&self) -> &NavigableRole;

    fn find_navigable(&self, name: &str) -> Option<&Arc<Navigable>>;
}
