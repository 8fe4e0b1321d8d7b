//! Sequential, all-or-nothing batch submission.
//!
//! The descriptor list is cut into chunks of at most [`MAX_CHUNK_SIZE`] and the
//! chunks are sent one after the other. A chunk is only sent once the previous
//! response has been fully read. If any chunk fails nothing is returned, not
//! even the results of the chunks that already succeeded.

use indicatif::ProgressBar;

use senusa_core::models::{AnnotationResult, VariantDescriptor};

use super::client::AnnotationService;
use super::consts::MAX_CHUNK_SIZE;
use super::errors::SubmissionError;

///
/// Partition descriptors into ordered, non-overlapping chunks.
///
/// # Arguments
/// - descriptors: the full descriptor sequence
/// - chunk_size: maximum chunk length, clamped to `1..=MAX_CHUNK_SIZE`
///
/// # Returns
/// - `ceil(len / size)` chunks of the clamped size; all but the last are full
///
pub fn chunk_descriptors(
    descriptors: &[VariantDescriptor],
    chunk_size: usize,
) -> Vec<&[VariantDescriptor]> {
    descriptors
        .chunks(chunk_size.clamp(1, MAX_CHUNK_SIZE))
        .collect()
}

/// Submits descriptor chunks to an [`AnnotationService`] one at a time.
pub struct BatchSubmitter<S: AnnotationService> {
    service: S,
    chunk_size: usize,
    progress: bool,
}

impl<S: AnnotationService> BatchSubmitter<S> {
    pub fn new(service: S) -> Self {
        BatchSubmitter {
            service,
            chunk_size: MAX_CHUNK_SIZE,
            progress: false,
        }
    }

    /// Sets the chunk size, clamped to `1..=MAX_CHUNK_SIZE`.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        let clamped = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        if clamped != chunk_size {
            log::warn!(
                "Chunk size {} is outside 1..={}, using {}",
                chunk_size,
                MAX_CHUNK_SIZE,
                clamped
            );
        }
        self.chunk_size = clamped;
        self
    }

    /// Shows a progress bar over chunks on stderr.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    ///
    /// Annotate all descriptors, chunk by chunk.
    ///
    /// # Returns
    /// - the concatenation of every chunk's results, in chunk order, or the
    ///   error of the first chunk that failed
    ///
    pub fn submit(
        &self,
        descriptors: &[VariantDescriptor],
    ) -> Result<Vec<AnnotationResult>, SubmissionError> {
        let chunks = chunk_descriptors(descriptors, self.chunk_size);
        let total = chunks.len();

        let bar = match self.progress {
            true => ProgressBar::new(total as u64),
            false => ProgressBar::hidden(),
        };

        let mut results: Vec<AnnotationResult> = Vec::with_capacity(descriptors.len());

        for (i, chunk) in chunks.into_iter().enumerate() {
            log::debug!("Submitting chunk {}/{} ({} variants)", i + 1, total, chunk.len());

            match self.service.annotate(chunk) {
                Ok(mut chunk_results) => {
                    log::debug!("Chunk {}/{} returned {} results", i + 1, total, chunk_results.len());
                    results.append(&mut chunk_results);
                    bar.inc(1);
                }
                Err(source) => {
                    bar.abandon();
                    return Err(SubmissionError {
                        chunk: i + 1,
                        total,
                        source,
                    });
                }
            }
        }

        bar.finish_and_clear();
        log::info!(
            "Annotated {} variants in {} chunks, {} results",
            descriptors.len(),
            total,
            results.len()
        );

        Ok(results)
    }
}
