/*
    ============================== session ==============================
    Runs source units one at a time against an evolving evaluation state,
    keeping an ordered, rewindable history of everything accepted so far.
    ---------------------------------------------------------------------
*/

mod error;

use code_unit::{CodeUnit, History, UnitId, UnitSequence};
use engine_api::{
    CheckOutcome, EvaluatedUnit, ExtractedMarker, MarkerExtractor, PriorUnit, UnitCompiler,
    UnitEvaluator,
};
use marker::DependencyMarker;
use resolve::ResolutionManager;
use std::sync::Arc;

pub use error::{SessionError, SessionErrorKind};

/// Proof that a unit was committed to history with a compiled artifact;
/// the ticket `eval` accepts.
#[derive(Copy, Clone, Debug)]
pub struct CompiledUnit {
    unit: UnitId,
}

impl CompiledUnit {
    pub fn unit(&self) -> UnitId {
        self.unit
    }
}

/// One interactive evaluation conversation.
///
/// The session owns its history exclusively and hands each unit's markers
/// to the shared resolution manager before compiling. Operations must be
/// serialized by the caller; independent sessions may run in parallel and
/// share one manager.
pub struct EvaluationSession<C, E>
where
    C: UnitCompiler,
    E: UnitEvaluator<Artifact = C::Artifact>,
{
    compiler: C,
    evaluator: E,
    extractor: Arc<dyn MarkerExtractor>,
    resolution: Arc<ResolutionManager>,
    history: History<C::Artifact, E::Value>,
    sequence: UnitSequence,
    closed: bool,
}

impl<C, E> EvaluationSession<C, E>
where
    C: UnitCompiler,
    E: UnitEvaluator<Artifact = C::Artifact>,
{
    pub fn new(
        compiler: C,
        evaluator: E,
        extractor: Arc<dyn MarkerExtractor>,
        resolution: Arc<ResolutionManager>,
    ) -> Self {
        Self {
            compiler,
            evaluator,
            extractor,
            resolution,
            history: History::new(),
            sequence: UnitSequence::new(),
            closed: false,
        }
    }

    pub fn history(&self) -> &History<C::Artifact, E::Value> {
        &self.history
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.closed {
            Err(SessionErrorKind::Closed.into())
        } else {
            Ok(())
        }
    }

    /// Allocates the next unit without committing it, so callers can check
    /// or compile before deciding to keep it. Ids keep increasing across
    /// resets; a discarded id is never reissued.
    pub fn next_unit(&mut self, source: impl Into<String>) -> Result<CodeUnit, SessionError> {
        self.ensure_open()?;
        Ok(self.sequence.next_unit(source))
    }

    /// Syntax-completeness judgement only. Needs no classpath, so markers
    /// are not resolved, and the history is untouched.
    pub fn check(&self, unit: &CodeUnit) -> Result<CheckOutcome, SessionError> {
        self.ensure_open()?;
        Ok(self.compiler.check(unit))
    }

    /// Resolves the unit's markers, compiles it against the committed
    /// history, and on success appends it. On any failure the history is
    /// unchanged and the session stays usable.
    pub fn compile(&mut self, unit: CodeUnit) -> Result<CompiledUnit, SessionError> {
        self.ensure_open()?;

        let markers = self.extract_markers(unit.source())?;
        let outcome = self
            .resolution
            .resolve(&markers, self.history.is_empty())?;

        let prior: Vec<PriorUnit<'_, C::Artifact>> = self
            .history
            .entries()
            .iter()
            .map(|entry| PriorUnit {
                unit: entry.unit(),
                artifact: entry.artifact(),
            })
            .collect();

        let artifact = self.compiler.compile(
            &unit,
            outcome.classpath(),
            outcome.imports(),
            &prior,
        )?;
        drop(prior);

        let id = self.history.push(unit, artifact);
        Ok(CompiledUnit { unit: id })
    }

    /// Evaluates a committed unit against the bindings accumulated by the
    /// surviving units before it, and records the result on its entry.
    pub fn eval(&mut self, compiled: &CompiledUnit) -> Result<&E::Value, SessionError> {
        self.ensure_open()?;

        let position = self.history.position(compiled.unit).ok_or_else(|| {
            SessionError::new(SessionErrorKind::UnitNotCompiled {
                unit: compiled.unit,
            })
        })?;

        let entries = self.history.entries();
        let prior: Vec<EvaluatedUnit<'_, C::Artifact, E::Value>> = entries[..position]
            .iter()
            .map(|entry| EvaluatedUnit {
                unit: entry.unit(),
                artifact: entry.artifact(),
                value: entry.value(),
            })
            .collect();

        let value = self.evaluator.eval(entries[position].artifact(), &prior)?;
        drop(prior);

        let entry = self
            .history
            .entry_mut(compiled.unit)
            .expect("entry position was just found");
        entry.record_value(value);

        Ok(entry.value().expect("value was just recorded"))
    }

    /// Rewinds the session so `target` is the most recent unit, returning
    /// the discarded units most recently accepted first. Each discarded
    /// unit's compiled and evaluated state is released; bindings they
    /// introduced are invisible to every later compile.
    pub fn reset_to_line(&mut self, target: UnitId) -> Result<Vec<CodeUnit>, SessionError> {
        self.ensure_open()?;

        let discarded = self.history.truncate_after(target).ok_or_else(|| {
            SessionError::new(SessionErrorKind::InvalidResetTarget { target })
        })?;

        Ok(discarded
            .into_iter()
            .map(|entry| entry.into_unit())
            .collect())
    }

    /// Releases the compiler and evaluator resources. Idempotent; every
    /// other operation fails once the session is closed.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }

        self.compiler.shutdown();
        self.evaluator.shutdown();
        self.history.clear();
        self.closed = true;
    }

    fn extract_markers(&self, source: &str) -> Result<Vec<DependencyMarker>, SessionError> {
        let mut markers = Vec::new();

        for extracted in self.extractor.extract(source) {
            match extracted {
                ExtractedMarker::Marker(marker) => markers.push(marker),
                ExtractedMarker::Invalid { text, message } => {
                    return Err(SessionErrorKind::InvalidMarker { text, message }.into());
                }
            }
        }

        Ok(markers)
    }
}

impl<C, E> Drop for EvaluationSession<C, E>
where
    C: UnitCompiler,
    E: UnitEvaluator<Artifact = C::Artifact>,
{
    fn drop(&mut self) {
        self.close();
    }
}
