use thiserror::Error;

/// Failures a query or build step can report.
///
/// An unreachable target, an empty recommendation neighborhood, and a
/// too-small component are ordinary outcomes, not errors; they are reported
/// through `Option`, `Recommendations::NoCandidates`, and the `degenerate`
/// flag so callers cannot mistake them for failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An ingestion row without an actor or movie identity. The builder
    /// recovers locally: the row is skipped and counted, never fatal.
    #[error("record is missing the {0} field")]
    MalformedRecord(&'static str),

    /// A query named an actor that was never ingested.
    #[error("actor \"{0}\" is not in the graph")]
    UnknownActor(String),

    /// A query named a movie that was never ingested.
    #[error("movie \"{0}\" is not in the graph")]
    UnknownMovie(String),
}
