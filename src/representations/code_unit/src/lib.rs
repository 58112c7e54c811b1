mod history;
mod unit;

pub use history::{History, HistoryEntry};
pub use unit::{CodeUnit, UnitId, UnitSequence};
