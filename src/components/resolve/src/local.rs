use crate::error::{ResolveError, ResolveErrorKind};
use crate::manager::MarkerHandler;
use append_only::AppendOnly;
use marker::{DependencyMarker, MarkerKind, ResolvedResource};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// One strategy for turning a filename into local resources. Returning
/// `None` declines the request and passes it down the chain.
pub trait PathResolver: Send + Sync {
    fn try_resolve(&self, filename: &str) -> Option<Vec<ResolvedResource>>;
}

/// Resolves filenames relative to the process working context.
pub struct DirectResolver;

impl PathResolver for DirectResolver {
    fn try_resolve(&self, filename: &str) -> Option<Vec<ResolvedResource>> {
        let path = Path::new(filename).absolutize().ok()?;

        path.exists()
            .then(|| vec![ResolvedResource::new(path.into_owned())])
    }
}

/// Resolves filenames under one directory root supplied at registration.
#[derive(Debug)]
pub struct FlatDirResolver {
    root: PathBuf,
}

impl FlatDirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        let root = root.into();

        if !root.is_dir() {
            return Err(ResolveErrorKind::RegistrationRejected {
                subject: root.display().to_string(),
                problem: "not an existing directory".into(),
            }
            .into());
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for FlatDirResolver {
    fn try_resolve(&self, filename: &str) -> Option<Vec<ResolvedResource>> {
        let path = self.root.join(filename);

        path.exists().then(|| vec![ResolvedResource::new(path)])
    }
}

/// The local-path resolver flavor: an ordered chain of `PathResolver`s
/// where the first non-declining resolver wins. The direct resolver is
/// always entry zero; directory-repository markers append flat-directory
/// resolvers behind it while the session runs.
pub struct LocalPathHandler {
    chain: AppendOnly<Box<dyn PathResolver>>,
    imports: Vec<String>,
}

impl LocalPathHandler {
    pub fn new() -> Self {
        let chain: AppendOnly<Box<dyn PathResolver>> = AppendOnly::new();
        chain.push(Box::new(DirectResolver));

        Self {
            chain,
            imports: Vec::new(),
        }
    }

    /// Auto-imports this handler contributes to a session's first
    /// resolution.
    pub fn with_imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn resolver_count(&self) -> usize {
        self.chain.len()
    }

    /// Registers a new flat-directory search root. An invalid path is a
    /// hard failure; previously registered roots are unaffected.
    pub fn add_directory(&self, path: &str) -> Result<(), ResolveError> {
        if path.trim().is_empty() {
            return Err(ResolveErrorKind::RegistrationRejected {
                subject: path.into(),
                problem: "directory repository path is blank".into(),
            }
            .into());
        }

        self.chain.push(Box::new(FlatDirResolver::new(path)?));
        Ok(())
    }

    fn resolve_file(
        &self,
        marker: &DependencyMarker,
        filename: &str,
    ) -> Result<Vec<ResolvedResource>, ResolveError> {
        if filename.trim().is_empty() {
            return Err(ResolveErrorKind::InvalidMarkerArguments {
                marker: marker.to_string(),
                problem: "filename is blank".into(),
            }
            .into());
        }

        // First resolver that does not decline wins; partial results are
        // never merged across resolvers.
        for resolver in self.chain.snapshot() {
            if let Some(resources) = resolver.try_resolve(filename) {
                return Ok(resources);
            }
        }

        Err(ResolveErrorKind::UnresolvedDependency {
            marker: marker.clone(),
        }
        .into())
    }
}

impl Default for LocalPathHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerHandler for LocalPathHandler {
    fn accepted_kinds(&self) -> &[MarkerKind] {
        // Declared order doubles as intra-handler priority: registering a
        // search root must precede lookups that may depend on it.
        &[MarkerKind::DirectoryRepository, MarkerKind::LocalFile]
    }

    fn default_imports(&self) -> &[String] {
        &self.imports
    }

    fn resolve_marker(
        &self,
        marker: &DependencyMarker,
    ) -> Result<Vec<ResolvedResource>, ResolveError> {
        match marker {
            DependencyMarker::LocalFile { filename } => self.resolve_file(marker, filename),
            DependencyMarker::DirectoryRepository { path } => {
                self.add_directory(path)?;
                Ok(Vec::new())
            }
            other => Err(ResolveErrorKind::UnknownMarkerKind { kind: other.kind() }.into()),
        }
    }
}
