use super::Navigable;

use std::sync::Arc;

/// Child navigables in declaration order. Declaration order decides which
/// record field is bound to which column.
#[derive(Debug)]
pub struct Composite {
    children: Vec<Arc<Navigable>>,
}

impl Composite {
    pub(super) fn new(children: Vec<Arc<Navigable>>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Arc<Navigable>] {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Arc<Navigable>> {
        self.children
            .iter()
            .find(|child| child.role().name() == name)
    }
}
