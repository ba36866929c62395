use super::Error;

/// Error when a key's navigable and its foreign key disagree on the number of
/// columns.
///
/// This is a metadata construction defect. Columns are never dropped or
/// padded to make the two sides agree.
#[derive(Debug)]
pub(super) struct KeyArityMismatchError {
    role: Box<str>,
    expected: usize,
    actual: usize,
}

impl std::error::Error for KeyArityMismatchError {}

impl core::fmt::Display for KeyArityMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "key arity mismatch for `{}`: expected {} columns, found {}",
            self.role, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a key arity mismatch error for the navigable at `role`.
    pub fn key_arity_mismatch(role: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::KeyArityMismatch(KeyArityMismatchError {
            role: role.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a key arity mismatch error.
    pub fn is_key_arity_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KeyArityMismatch(_))
    }
}
