use crate::Diagnostic;
use colored::Colorize;

#[derive(Debug)]
pub struct WarningDiagnostic {
    message: String,
}

impl WarningDiagnostic {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Diagnostic for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(w, "{} {}", "warning:".yellow().bold(), self.message)
    }
}
