use colored::Colorize;
use itertools::Itertools;
use marker::{DependencyMarker, MarkerKind};

#[derive(Clone, Debug)]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
}

impl ResolveError {
    pub fn new(kind: ResolveErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug)]
pub enum ResolveErrorKind {
    InvalidMarkerArguments {
        marker: String,
        problem: String,
    },
    UnresolvedDependency {
        marker: DependencyMarker,
    },
    UnknownMarkerKind {
        kind: MarkerKind,
    },
    RegistrationRejected {
        subject: String,
        problem: String,
    },
    FetchFailed {
        coordinates: String,
        repositories: Vec<String>,
        message: String,
    },
}

impl From<ResolveErrorKind> for ResolveError {
    fn from(kind: ResolveErrorKind) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", "error: ".bright_red())?;

        match &self.kind {
            ResolveErrorKind::InvalidMarkerArguments { marker, problem } => {
                write!(f, "Invalid arguments for {} - {}", marker, problem)?;
            }
            ResolveErrorKind::UnresolvedDependency { marker } => {
                write!(f, "Failed to resolve {}", marker)?;
            }
            ResolveErrorKind::UnknownMarkerKind { kind } => {
                write!(f, "No resolver accepts markers of kind '{}'", kind)?;
            }
            ResolveErrorKind::RegistrationRejected { subject, problem } => {
                write!(f, "Cannot register '{}' - {}", subject, problem)?;
            }
            ResolveErrorKind::FetchFailed {
                coordinates,
                repositories,
                message,
            } => {
                write!(
                    f,
                    "Failed to fetch '{}' from {} - {}",
                    coordinates,
                    repositories
                        .iter()
                        .map(|repository| format!("'{}'", repository))
                        .join(", "),
                    message
                )?;
            }
        }

        Ok(())
    }
}
