/*
    ============================== resolve ==============================
    Turns the dependency markers found in one source unit into a concrete,
    ordered, deduplicated classpath/import set, choosing among resolver
    flavors and registering new resolution sources discovered mid-session.
    ---------------------------------------------------------------------
*/

mod artifact;
mod error;
mod local;
mod manager;

pub use artifact::{ArtifactHandler, DEFAULT_REPOSITORY_URL, RepositoryRegistry};
pub use error::{ResolveError, ResolveErrorKind};
pub use local::{DirectResolver, FlatDirResolver, LocalPathHandler, PathResolver};
pub use manager::{MarkerHandler, ResolutionManager};
