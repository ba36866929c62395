use super::Error;

/// Error when a collection key cannot find the navigable its foreign key
/// targets.
///
/// This occurs when:
/// - The mapped-by property name does not exist on the element type
/// - The element type is not a navigable container
/// - The owning entity has no identifier and no mapped-by name is declared
/// - A back reference is dangling or loops back onto itself
/// - The owning collection descriptor has already been dropped
#[derive(Debug)]
pub(super) struct MappingResolutionError {
    message: Box<str>,
}

impl std::error::Error for MappingResolutionError {}

impl core::fmt::Display for MappingResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping resolution failed: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping resolution error.
    pub fn mapping_resolution(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingResolution(MappingResolutionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapping resolution error.
    pub fn is_mapping_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingResolution(_))
    }
}
