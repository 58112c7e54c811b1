/*
    ============================== incant ===============================
    Embeddable incremental evaluation engine: runs source units one at a
    time against an evolving session while resolving the external
    resources each unit declares through inline dependency markers.
    ---------------------------------------------------------------------
*/

pub use code_unit::{CodeUnit, History, HistoryEntry, UnitId};
pub use diagnostics::{Diagnostic, ErrorDiagnostic, Reporter, ReporterFlags, WarningDiagnostic};
pub use engine_api::{
    ArtifactFetcher, CheckOutcome, ClasspathProbe, CompileFailure, EvalFailure, EvaluatedUnit,
    ExtractedMarker, FetchError, MarkerExtractor, PriorUnit, UnitCompiler, UnitEvaluator,
};
pub use marker::{
    ArtifactCoordinates, DependencyMarker, MarkerKind, Repository, ResolutionOutcome,
    ResolvedResource,
};
pub use resolve::{
    ArtifactHandler, DEFAULT_REPOSITORY_URL, LocalPathHandler, MarkerHandler, ResolutionManager,
    ResolveError, ResolveErrorKind,
};
pub use session::{CompiledUnit, EvaluationSession, SessionError, SessionErrorKind};

use std::sync::Arc;

/// The assembled engine: one resolution manager wired with the default
/// resolver flavors, shared by every session it opens.
pub struct Engine {
    extractor: Arc<dyn MarkerExtractor>,
    resolution: Arc<ResolutionManager>,
}

impl Engine {
    /// The host supplies the facilities the engine cannot provide itself:
    /// the marker scanner, the artifact fetcher, and the classpath probe.
    pub fn builder(
        extractor: Arc<dyn MarkerExtractor>,
        fetcher: Arc<dyn ArtifactFetcher>,
        probe: Arc<dyn ClasspathProbe>,
    ) -> EngineBuilder {
        EngineBuilder {
            extractor,
            fetcher,
            probe,
            reporter: None,
            local_imports: Vec::new(),
            artifact_imports: Vec::new(),
        }
    }

    pub fn resolution(&self) -> &Arc<ResolutionManager> {
        &self.resolution
    }

    /// Opens an independent session bound to the host's compiler and
    /// evaluator. Sessions share the engine's resolution manager, so a
    /// search root or repository registered by one is visible to all.
    pub fn open_session<C, E>(&self, compiler: C, evaluator: E) -> EvaluationSession<C, E>
    where
        C: UnitCompiler,
        E: UnitEvaluator<Artifact = C::Artifact>,
    {
        EvaluationSession::new(
            compiler,
            evaluator,
            Arc::clone(&self.extractor),
            Arc::clone(&self.resolution),
        )
    }
}

pub struct EngineBuilder {
    extractor: Arc<dyn MarkerExtractor>,
    fetcher: Arc<dyn ArtifactFetcher>,
    probe: Arc<dyn ClasspathProbe>,
    reporter: Option<Arc<Reporter>>,
    local_imports: Vec<String>,
    artifact_imports: Vec<String>,
}

impl EngineBuilder {
    /// Routes recoverable remote-resolution failures to `reporter`
    /// instead of failing the resolution pass that hit them.
    pub fn reporter(mut self, reporter: Arc<Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Auto-imports contributed by the local-path flavor on a session's
    /// first resolution.
    pub fn local_imports(
        mut self,
        imports: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.local_imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Auto-imports contributed by the artifact-coordinate flavor on a
    /// session's first resolution.
    pub fn artifact_imports(
        mut self,
        imports: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.artifact_imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Engine {
        let local = LocalPathHandler::new().with_imports(self.local_imports);

        let mut artifact = ArtifactHandler::new(self.fetcher).with_imports(self.artifact_imports);
        if let Some(reporter) = self.reporter {
            artifact = artifact.with_reporter(reporter);
        }

        // Local-path flavor first: handler registration order is the outer
        // marker priority band.
        let resolution = ResolutionManager::new(
            vec![Arc::new(local), Arc::new(artifact)],
            self.probe,
        );

        Engine {
            extractor: self.extractor,
            resolution: Arc::new(resolution),
        }
    }
}
