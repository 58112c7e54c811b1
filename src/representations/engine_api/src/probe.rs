use marker::{MarkerKind, ResolvedResource};

/// The host's classpath-introspection facility: maps a marker kind to the
/// classpath entry containing its defining code, so that the first
/// resolution of a session can make marker syntax available to compiled
/// units.
pub trait ClasspathProbe: Send + Sync {
    fn defining_location(&self, kind: MarkerKind) -> Option<ResolvedResource>;
}
