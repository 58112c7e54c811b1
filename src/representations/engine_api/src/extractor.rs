use marker::DependencyMarker;

/// One scanner hit: either a well-formed marker, or the offending text
/// plus the scanner's complaint. Invalid entries are hard failures at the
/// session level; they are never silently skipped.
#[derive(Clone, Debug)]
pub enum ExtractedMarker {
    Marker(DependencyMarker),
    Invalid { text: String, message: String },
}

/// The host's marker scanner. Markers come back in source order.
pub trait MarkerExtractor: Send + Sync {
    fn extract(&self, source: &str) -> Vec<ExtractedMarker>;
}
