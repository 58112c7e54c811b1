use crate::error::{ResolveError, ResolveErrorKind};
use crate::manager::MarkerHandler;
use append_only::AppendOnly;
use diagnostics::{ErrorDiagnostic, Reporter};
use engine_api::ArtifactFetcher;
use marker::{ArtifactCoordinates, DependencyMarker, MarkerKind, Repository, ResolvedResource};
use std::sync::Arc;

/// Used until the first explicit repository registration, never after.
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo.maven.apache.org/maven2/";

/// Ordered, append-only list of remote repository locations for
/// artifact-coordinate lookups.
pub struct RepositoryRegistry {
    repositories: AppendOnly<Repository>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self {
            repositories: AppendOnly::new(),
        }
    }

    pub fn register(&self, repository: Repository) {
        self.repositories.push(repository);
    }

    pub fn has_explicit(&self) -> bool {
        !self.repositories.is_empty()
    }

    /// Point-in-time repository set for one lookup: the explicit
    /// registrations, or the single well-known default while none exist.
    /// The default is not additive once any explicit entry is present.
    pub fn current(&self) -> Vec<Repository> {
        let explicit = self.repositories.snapshot();

        if explicit.is_empty() {
            vec![
                Repository::parse(DEFAULT_REPOSITORY_URL, Some("central"))
                    .expect("default repository URL is well-formed"),
            ]
        } else {
            explicit.iter().map(|repository| (**repository).clone()).collect()
        }
    }
}

impl Default for RepositoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The artifact-coordinate resolver flavor: validates coordinates up
/// front, snapshots the repository registry, and delegates the actual
/// download to the host's fetcher.
pub struct ArtifactHandler {
    registry: RepositoryRegistry,
    fetcher: Arc<dyn ArtifactFetcher>,
    reporter: Option<Arc<Reporter>>,
    imports: Vec<String>,
}

impl ArtifactHandler {
    pub fn new(fetcher: Arc<dyn ArtifactFetcher>) -> Self {
        Self {
            registry: RepositoryRegistry::new(),
            fetcher,
            reporter: None,
            imports: Vec::new(),
        }
    }

    /// Routes recoverable fetch failures here instead of failing the
    /// whole resolution pass.
    pub fn with_reporter(mut self, reporter: Arc<Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Auto-imports this handler contributes to a session's first
    /// resolution.
    pub fn with_imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn registry(&self) -> &RepositoryRegistry {
        &self.registry
    }

    /// Registers a remote repository. A malformed URL rejects this
    /// registration only; already-registered entries are unaffected.
    pub fn try_add_repository(&self, url: &str, id: Option<&str>) -> Result<(), ResolveError> {
        let repository = Repository::parse(url, id).map_err(|problem| {
            ResolveError::new(ResolveErrorKind::RegistrationRejected {
                subject: url.into(),
                problem: problem.to_string(),
            })
        })?;

        self.registry.register(repository);
        Ok(())
    }

    fn resolve_artifact(
        &self,
        marker: &DependencyMarker,
        coordinates_text: &str,
    ) -> Result<Vec<ResolvedResource>, ResolveError> {
        // Malformed coordinates must fail before any registry or fetcher
        // access happens.
        let coordinates = ArtifactCoordinates::parse(coordinates_text).map_err(|problem| {
            ResolveError::new(ResolveErrorKind::InvalidMarkerArguments {
                marker: marker.to_string(),
                problem: problem.to_string(),
            })
        })?;

        let repositories = self.registry.current();

        match self.fetcher.fetch(&coordinates, &repositories) {
            Ok(resources) if resources.is_empty() => {
                Err(ResolveErrorKind::UnresolvedDependency {
                    marker: marker.clone(),
                }
                .into())
            }
            Ok(resources) => Ok(resources),
            Err(fetch_error) => {
                if let Some(reporter) = &self.reporter {
                    reporter.push(ErrorDiagnostic::plain(&fetch_error));
                    Ok(Vec::new())
                } else {
                    Err(ResolveErrorKind::FetchFailed {
                        coordinates: coordinates.to_string(),
                        repositories: repositories
                            .iter()
                            .map(|repository| repository.url().to_string())
                            .collect(),
                        message: fetch_error.message,
                    }
                    .into())
                }
            }
        }
    }
}

impl MarkerHandler for ArtifactHandler {
    fn accepted_kinds(&self) -> &[MarkerKind] {
        // Declared order doubles as intra-handler priority: registering a
        // repository must precede coordinate lookups that may depend on it.
        &[MarkerKind::RemoteRepository, MarkerKind::Artifact]
    }

    fn default_imports(&self) -> &[String] {
        &self.imports
    }

    fn resolve_marker(
        &self,
        marker: &DependencyMarker,
    ) -> Result<Vec<ResolvedResource>, ResolveError> {
        match marker {
            DependencyMarker::Artifact { coordinates } => {
                self.resolve_artifact(marker, coordinates)
            }
            DependencyMarker::RemoteRepository { url, id } => {
                self.try_add_repository(url, id.as_deref())?;
                Ok(Vec::new())
            }
            other => Err(ResolveErrorKind::UnknownMarkerKind { kind: other.kind() }.into()),
        }
    }
}
