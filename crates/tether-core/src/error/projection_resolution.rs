use super::Error;

/// Error raised by a projection builder that cannot resolve a column against
/// a qualifier.
///
/// The cause is opaque; it is carried through unchanged.
#[derive(Debug)]
pub(super) struct ProjectionResolutionError {
    cause: anyhow::Error,
}

impl ProjectionResolutionError {
    pub(super) fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl std::error::Error for ProjectionResolutionError {}

impl core::fmt::Display for ProjectionResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "projection resolution failed: {}", self.cause)
    }
}

impl Error {
    /// Creates a projection resolution error wrapping the builder's cause.
    pub fn projection_resolution(cause: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::ProjectionResolution(
            ProjectionResolutionError {
                cause: cause.into(),
            },
        ))
    }

    /// Returns `true` if this error is a projection resolution error.
    pub fn is_projection_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ProjectionResolution(_))
    }
}
