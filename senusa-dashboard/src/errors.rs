use thiserror::Error;

use super::state::{EMPTY_INPUT_MESSAGE, SUBMISSION_ERROR_MESSAGE};

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    NoVariants,

    #[error("{}", SUBMISSION_ERROR_MESSAGE)]
    Submission { detail: String },

    #[error("No annotation results are loaded")]
    NoResults,

    #[error("Row {index} is out of range, the table has {len} rows")]
    RowOutOfRange { index: usize, len: usize },
}
