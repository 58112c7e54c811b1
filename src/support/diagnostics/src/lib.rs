mod error;
mod warning;

use append_only::AppendOnly;
use core::fmt::Debug;
pub use error::ErrorDiagnostic;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Send + Sync {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result;
}

#[derive(Clone, Debug)]
pub struct ReporterFlags {
    pub print_without_collecting: bool,
}

impl Default for ReporterFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
        }
    }
}

/// Sink for recoverable failures and warnings.
///
/// Components that can continue past a failure (e.g. a remote artifact that
/// could not be fetched) hand the detail here instead of aborting. Callers
/// that want hard failures simply don't supply a reporter.
pub struct Reporter {
    diagnostics: AppendOnly<Box<dyn Diagnostic>>,
    flags: ReporterFlags,
}

impl Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

impl Reporter {
    pub fn new(flags: ReporterFlags) -> Self {
        Self {
            diagnostics: AppendOnly::new(),
            flags,
        }
    }

    /// Reporter that keeps everything in memory for later inspection.
    pub fn collecting() -> Self {
        Self::new(ReporterFlags {
            print_without_collecting: false,
        })
    }

    pub fn flags(&self) -> &ReporterFlags {
        &self.flags
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.push(Box::new(diagnostic));
        }
    }

    pub fn print_all(&self) {
        for diagnostic in self.diagnostics.snapshot() {
            self.print(&**diagnostic);
        }
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        let mut message = String::new();

        diagnostic.show(&mut message).expect("show error message");

        eprintln!("{message}");
    }

    /// Rendered form of every collected diagnostic, in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .snapshot()
            .iter()
            .map(|diagnostic| {
                let mut message = String::new();
                diagnostic.show(&mut message).expect("show error message");
                message
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReporterFlags::default())
    }
}
