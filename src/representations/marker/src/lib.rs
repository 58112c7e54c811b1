mod coordinates;
mod marker;
mod outcome;
mod repository;

pub use coordinates::{ArtifactCoordinates, CoordinatesError};
pub use marker::{DependencyMarker, MarkerKind};
pub use outcome::{ResolutionOutcome, ResolvedResource};
pub use repository::{Repository, RepositoryUrlError};
