pub mod batch;
pub mod client;
pub mod consts;
pub mod errors;

// re-exports
pub use batch::{BatchSubmitter, chunk_descriptors};
pub use client::{AnnotationService, VepClient, VepClientBuilder};
pub use errors::{ServiceError, SubmissionError};
