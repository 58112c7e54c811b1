use derive_more::IsVariant;

/// A source-embedded declaration of an external resource need, already
/// extracted from the unit text by the host's scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DependencyMarker {
    /// Resolve one file or directory relative to the calling context.
    LocalFile { filename: String },

    /// Register a new local search root for later `LocalFile` markers.
    DirectoryRepository { path: String },

    /// Resolve an artifact plus its transitive runtime dependencies.
    Artifact { coordinates: String },

    /// Register a remote repository for later `Artifact` markers.
    RemoteRepository { url: String, id: Option<String> },
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, IsVariant)]
pub enum MarkerKind {
    LocalFile,
    DirectoryRepository,
    Artifact,
    RemoteRepository,
}

impl DependencyMarker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            Self::LocalFile { .. } => MarkerKind::LocalFile,
            Self::DirectoryRepository { .. } => MarkerKind::DirectoryRepository,
            Self::Artifact { .. } => MarkerKind::Artifact,
            Self::RemoteRepository { .. } => MarkerKind::RemoteRepository,
        }
    }
}

impl std::fmt::Display for DependencyMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalFile { filename } => write!(f, "local file '{}'", filename),
            Self::DirectoryRepository { path } => {
                write!(f, "directory repository '{}'", path)
            }
            Self::Artifact { coordinates } => write!(f, "artifact '{}'", coordinates),
            Self::RemoteRepository { url, id: Some(id) } => {
                write!(f, "repository '{}' ({})", url, id)
            }
            Self::RemoteRepository { url, id: None } => write!(f, "repository '{}'", url),
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::LocalFile => "local-file",
            Self::DirectoryRepository => "local-directory-repo",
            Self::Artifact => "artifact-coordinate",
            Self::RemoteRepository => "remote-repo",
        })
    }
}
