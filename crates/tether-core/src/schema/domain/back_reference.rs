use super::{Navigable, NavigableContainer};
use crate::{Error, Result};

use std::{
    fmt,
    sync::{Arc, OnceLock, Weak},
};

/// Stands for the property `name` of a container.
///
/// The property is looked up on first use and cached. A failed lookup is not
/// cached; the next use looks the name up again.
pub struct BackReference {
    container: Weak<dyn NavigableContainer>,
    name: String,
    resolved: OnceLock<Arc<Navigable>>,
}

impl BackReference {
    pub(super) fn new(container: Weak<dyn NavigableContainer>, name: String) -> Self {
        Self {
            container,
            name,
            resolved: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// The navigable the name refers to. It may itself be a back reference.
    ///
    /// The lookup depends only on the container, so once it succeeds it stays
    /// cached even if the caller then rejects the navigable, e.g. a collection
    /// key whose arity does not match.
    pub fn target(&self) -> Result<&Navigable> {
        if let Some(target) = self.resolved.get() {
            return Ok(target.as_ref());
        }

        let container = self.container.upgrade().ok_or_else(|| {
            Error::mapping_resolution(format!(
                "container of back reference `{}` has been dropped",
                self.name
            ))
        })?;

        let target = container.find_navigable(&self.name).cloned().ok_or_else(|| {
            Error::mapping_resolution(format!(
                "`{}` has no property named `{}`",
                container.role(),
                self.name
            ))
        })?;

        log::debug!(
            "back reference `{}` resolved to `{}`",
            self.name,
            target.role()
        );

        Ok(self.resolved.get_or_init(|| target).as_ref())
    }
}

impl fmt::Debug for BackReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackReference")
            .field("name", &self.name)
            .field("resolved", &self.resolved.get().map(|target| target.role()))
            .finish()
    }
}
