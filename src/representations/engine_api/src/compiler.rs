use code_unit::CodeUnit;
use marker::ResolvedResource;

/// Syntax-completeness judgement for one unit. No classpath is needed to
/// make it, so checking never triggers resolution.
#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub is_complete: bool,
    pub diagnostics: Vec<String>,
}

impl CheckOutcome {
    pub fn complete() -> Self {
        Self {
            is_complete: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn incomplete(diagnostics: Vec<String>) -> Self {
        Self {
            is_complete: false,
            diagnostics,
        }
    }
}

/// A previously committed unit handed to the compiler as context.
#[derive(Debug)]
pub struct PriorUnit<'h, A> {
    pub unit: &'h CodeUnit,
    pub artifact: &'h A,
}

#[derive(Clone, Debug)]
pub struct CompileFailure {
    pub diagnostics: Vec<String>,
}

impl CompileFailure {
    pub fn message(message: impl ToString) -> Self {
        Self {
            diagnostics: vec![message.to_string()],
        }
    }
}

impl std::fmt::Display for CompileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.diagnostics.join("; "))
    }
}

/// The host's compiler facility.
pub trait UnitCompiler {
    type Artifact;

    fn check(&self, unit: &CodeUnit) -> CheckOutcome;

    /// Compiles one unit against the committed history, with the classpath
    /// and imports produced by marker resolution for this unit.
    fn compile(
        &mut self,
        unit: &CodeUnit,
        classpath: &[ResolvedResource],
        imports: &[String],
        prior: &[PriorUnit<'_, Self::Artifact>],
    ) -> Result<Self::Artifact, CompileFailure>;

    /// Called exactly once when the owning session closes.
    fn shutdown(&mut self) {}
}
