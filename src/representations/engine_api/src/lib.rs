/*
    ============================ engine_api =============================
    Interfaces between the evaluation engine and the host application's
    language facilities. The engine orchestrates; everything that actually
    understands the hosted language lives behind these traits.
    ---------------------------------------------------------------------
*/

mod compiler;
mod evaluator;
mod extractor;
mod fetcher;
mod probe;

pub use compiler::{CheckOutcome, CompileFailure, PriorUnit, UnitCompiler};
pub use evaluator::{EvalFailure, EvaluatedUnit, UnitEvaluator};
pub use extractor::{ExtractedMarker, MarkerExtractor};
pub use fetcher::{ArtifactFetcher, FetchError};
pub use probe::ClasspathProbe;
