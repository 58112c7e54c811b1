use code_unit::UnitId;
use colored::Colorize;
use engine_api::{CompileFailure, EvalFailure};
use resolve::ResolveError;

#[derive(Debug)]
pub struct SessionError {
    pub kind: SessionErrorKind,
}

impl SessionError {
    pub fn new(kind: SessionErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug)]
pub enum SessionErrorKind {
    Closed,
    InvalidMarker {
        text: String,
        message: String,
    },
    Resolve(ResolveError),
    Compile(CompileFailure),
    Eval(EvalFailure),
    InvalidResetTarget {
        target: UnitId,
    },
    UnitNotCompiled {
        unit: UnitId,
    },
}

impl From<SessionErrorKind> for SessionError {
    fn from(kind: SessionErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ResolveError> for SessionError {
    fn from(error: ResolveError) -> Self {
        Self::new(SessionErrorKind::Resolve(error))
    }
}

impl From<CompileFailure> for SessionError {
    fn from(failure: CompileFailure) -> Self {
        Self::new(SessionErrorKind::Compile(failure))
    }
}

impl From<EvalFailure> for SessionError {
    fn from(failure: EvalFailure) -> Self {
        Self::new(SessionErrorKind::Eval(failure))
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Resolve errors already carry their own prefix
        if let SessionErrorKind::Resolve(error) = &self.kind {
            return write!(f, "{}", error);
        }

        write!(f, "{}", "error: ".bright_red())?;

        match &self.kind {
            SessionErrorKind::Closed => {
                write!(f, "Session is closed")?;
            }
            SessionErrorKind::InvalidMarker { text, message } => {
                write!(f, "Invalid dependency marker '{}' - {}", text, message)?;
            }
            SessionErrorKind::Compile(failure) => {
                write!(f, "Compilation failed - {}", failure)?;
            }
            SessionErrorKind::Eval(failure) => {
                write!(f, "Evaluation failed - {}", failure)?;
            }
            SessionErrorKind::InvalidResetTarget { target } => {
                write!(f, "Cannot reset to unit {} - not in history", target)?;
            }
            SessionErrorKind::UnitNotCompiled { unit } => {
                write!(f, "Unit {} has no compiled artifact in history", unit)?;
            }
            SessionErrorKind::Resolve(_) => unreachable!("handled above"),
        }

        Ok(())
    }
}
