use std::fmt;

/// Identifies a navigable by its path from the root of the domain model,
/// e.g. `Owner.items.{collection-key}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigableRole {
    full_path: String,
}

impl NavigableRole {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            full_path: root.into(),
        }
    }

    /// Returns the role of the child named `name`.
    pub fn append(&self, name: &str) -> Self {
        Self {
            full_path: format!("{}.{}", self.full_path, name),
        }
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The last path segment.
    pub fn name(&self) -> &str {
        match self.full_path.rsplit_once('.') {
            Some((_, name)) => name,
            None => &self.full_path,
        }
    }
}

impl fmt::Display for NavigableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}
