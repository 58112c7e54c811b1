use code_unit::CodeUnit;

/// A previously committed unit handed to the evaluator as context.
/// `value` is absent for units that were compiled but never evaluated.
#[derive(Debug)]
pub struct EvaluatedUnit<'h, A, V> {
    pub unit: &'h CodeUnit,
    pub artifact: &'h A,
    pub value: Option<&'h V>,
}

#[derive(Clone, Debug)]
pub struct EvalFailure {
    pub diagnostics: Vec<String>,
}

impl EvalFailure {
    pub fn message(message: impl ToString) -> Self {
        Self {
            diagnostics: vec![message.to_string()],
        }
    }
}

impl std::fmt::Display for EvalFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.diagnostics.join("; "))
    }
}

/// The host's evaluator facility.
///
/// Bindings are always derived from `prior` alone, so a unit only ever sees
/// names committed by units that still survive in the history.
pub trait UnitEvaluator {
    type Artifact;
    type Value;

    fn eval(
        &mut self,
        artifact: &Self::Artifact,
        prior: &[EvaluatedUnit<'_, Self::Artifact, Self::Value>],
    ) -> Result<Self::Value, EvalFailure>;

    /// Called exactly once when the owning session closes.
    fn shutdown(&mut self) {}
}
