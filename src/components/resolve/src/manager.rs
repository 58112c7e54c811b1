use crate::error::{ResolveError, ResolveErrorKind};
use engine_api::ClasspathProbe;
use indexmap::IndexSet;
use marker::{DependencyMarker, MarkerKind, ResolutionOutcome, ResolvedResource};
use std::sync::Arc;

/// One resolver flavor registered with the manager. Declared kind order is
/// the handler's internal priority order; the handler's position in the
/// manager's registration list is the outer priority.
pub trait MarkerHandler: Send + Sync {
    fn accepted_kinds(&self) -> &[MarkerKind];

    /// Imports contributed exactly once per session, on its first
    /// resolution.
    fn default_imports(&self) -> &[String];

    fn resolve_marker(
        &self,
        marker: &DependencyMarker,
    ) -> Result<Vec<ResolvedResource>, ResolveError>;
}

/// Spacing between handler priority bands; kind indices order markers
/// within one band.
const KIND_PRIORITY_STRIDE: u64 = 1000;

/// Ordering and dispatch authority over all registered resolver flavors.
///
/// One manager may serve many sessions concurrently; all of its mutable
/// state lives in the handlers' append-only registries.
pub struct ResolutionManager {
    handlers: Vec<Arc<dyn MarkerHandler>>,
    probe: Arc<dyn ClasspathProbe>,
}

impl ResolutionManager {
    pub fn new(handlers: Vec<Arc<dyn MarkerHandler>>, probe: Arc<dyn ClasspathProbe>) -> Self {
        Self { handlers, probe }
    }

    pub fn handlers(&self) -> &[Arc<dyn MarkerHandler>] {
        &self.handlers
    }

    fn handler_for(&self, kind: MarkerKind) -> Option<&Arc<dyn MarkerHandler>> {
        self.handlers
            .iter()
            .find(|handler| handler.accepted_kinds().contains(&kind))
    }

    /// Markers of unrecognized kinds key to zero; they fail at dispatch
    /// regardless of where the stable sort leaves them.
    fn priority_of(&self, marker: &DependencyMarker) -> u64 {
        let kind = marker.kind();

        self.handlers
            .iter()
            .enumerate()
            .find_map(|(handler_index, handler)| {
                handler
                    .accepted_kinds()
                    .iter()
                    .position(|accepted| *accepted == kind)
                    .map(|kind_index| {
                        handler_index as u64 * KIND_PRIORITY_STRIDE + kind_index as u64
                    })
            })
            .unwrap_or(0)
    }

    /// Resolves one unit's markers into classpath entries and imports.
    ///
    /// Markers are dispatched in priority order so that, e.g., a repository
    /// registration submitted in the same batch as a coordinate lookup is
    /// applied first. Results keep processing order; a side effect made by
    /// an earlier marker is visible to every later marker of the batch.
    pub fn resolve(
        &self,
        markers: &[DependencyMarker],
        is_first_resolution: bool,
    ) -> Result<ResolutionOutcome, ResolveError> {
        let mut ordered: Vec<&DependencyMarker> = markers.iter().collect();
        ordered.sort_by_key(|marker| self.priority_of(marker));

        let mut classpath = IndexSet::new();

        for marker in ordered {
            let handler = self.handler_for(marker.kind()).ok_or_else(|| {
                ResolveError::new(ResolveErrorKind::UnknownMarkerKind {
                    kind: marker.kind(),
                })
            })?;

            classpath.extend(handler.resolve_marker(marker)?);
        }

        let mut imports: IndexSet<String> = IndexSet::new();

        if is_first_resolution {
            // One-time default contribution: every handler's auto-imports,
            // plus the classpath entry defining each accepted marker kind.
            for handler in &self.handlers {
                imports.extend(handler.default_imports().iter().cloned());

                for kind in handler.accepted_kinds() {
                    if let Some(location) = self.probe.defining_location(*kind) {
                        classpath.insert(location);
                    }
                }
            }
        }

        Ok(ResolutionOutcome::new(
            classpath.into_iter().collect(),
            imports.into_iter().collect(),
        ))
    }
}
