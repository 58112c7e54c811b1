use std::path::{Path, PathBuf};

/// A concrete local file or directory usable as classpath input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedResource {
    path: PathBuf,
}

impl ResolvedResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for ResolvedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Everything one resolution pass produced for a single unit: classpath
/// entries and import prefixes, each deduplicated in order of first
/// appearance.
#[derive(Debug, Default)]
pub struct ResolutionOutcome {
    classpath: Vec<ResolvedResource>,
    imports: Vec<String>,
}

impl ResolutionOutcome {
    pub fn new(classpath: Vec<ResolvedResource>, imports: Vec<String>) -> Self {
        Self { classpath, imports }
    }

    pub fn classpath(&self) -> &[ResolvedResource] {
        &self.classpath
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.classpath.is_empty() && self.imports.is_empty()
    }
}
