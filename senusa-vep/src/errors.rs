use thiserror::Error;

/// Failure of a single request to the annotation service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Request to the annotation service failed: {0}")]
    Transport(String),

    #[error("Annotation service answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// Failure of a whole batch submission, pinned to the chunk that broke it.
///
/// Chunks after `chunk` were never sent and the results of the chunks before
/// it were dropped.
#[derive(Error, Debug)]
#[error("Chunk {chunk} of {total} failed: {source}")]
pub struct SubmissionError {
    /// 1-based position of the failing chunk.
    pub chunk: usize,
    pub total: usize,
    #[source]
    pub source: ServiceError,
}
