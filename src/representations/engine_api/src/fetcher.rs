use marker::{ArtifactCoordinates, Repository, ResolvedResource};

#[derive(Clone, Debug)]
pub struct FetchError {
    pub coordinates: ArtifactCoordinates,
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to fetch '{}' - {}", self.coordinates, self.message)
    }
}

/// The host's dependency-resolution facility: downloads (or finds in its
/// local cache) an artifact and its transitive runtime dependencies from
/// the given repositories.
pub trait ArtifactFetcher: Send + Sync {
    fn fetch(
        &self,
        coordinates: &ArtifactCoordinates,
        repositories: &[Repository],
    ) -> Result<Vec<ResolvedResource>, FetchError>;
}
