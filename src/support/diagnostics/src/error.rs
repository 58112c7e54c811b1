use crate::Diagnostic;
use colored::Colorize;

#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
}

impl ErrorDiagnostic {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Diagnostic for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(w, "{} {}", "error:".bright_red().bold(), self.message)
    }
}
