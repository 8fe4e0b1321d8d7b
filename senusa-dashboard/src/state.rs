//! Page state of one annotation run.
//!
//! The page moves through four states:
//!
//! ```text
//! Idle ──upload──▶ Loading ──all chunks ok──▶ Loaded ──upload──▶ Loading
//!                     │
//!                     └──any chunk fails──▶ Error ──upload──▶ Loading
//! ```
//!
//! All mutation goes through [`Dashboard::apply`], which takes one
//! [`DashboardEvent`] at a time. An upload without any variant never leaves the
//! current state.

use anyhow::Result;

use senusa_core::models::{AnnotationResult, VariantSet};
use senusa_vep::{AnnotationService, BatchSubmitter, SubmissionError};

use super::actions::{ReportGenerator, SummaryGenerator};
use super::columns::render_row;
use super::errors::DashboardError;
use super::selection::Selection;

/// Message shown when the file holds no qualifying record.
pub const EMPTY_INPUT_MESSAGE: &str = "No valid variants found in the file.";

/// Message shown when any chunk of a submission fails.
pub const SUBMISSION_ERROR_MESSAGE: &str = "Failed to fetch data from API. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageState {
    #[default]
    Idle,
    Loading,
    Loaded {
        results: Vec<AnnotationResult>,
        selection: Selection,
    },
    Error {
        message: String,
    },
}

#[derive(Debug)]
pub enum DashboardEvent {
    SubmissionStarted,
    SubmissionSucceeded(Vec<AnnotationResult>),
    SubmissionFailed(SubmissionError),
    ToggleRow(usize),
    SelectAll,
    DeselectAll,
}

/// Single owner of the page state.
#[derive(Debug, Default)]
pub struct Dashboard {
    state: PageState,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PageState::Loading)
    }

    /// User-facing error message, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PageState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// The current result set; empty unless the page is loaded.
    pub fn results(&self) -> &[AnnotationResult] {
        match &self.state {
            PageState::Loaded { results, .. } => results,
            _ => &[],
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            PageState::Loaded { selection, .. } => Some(selection),
            _ => None,
        }
    }

    ///
    /// Apply one event to the page state.
    ///
    /// Submission events are accepted in any state: a late response replaces
    /// whatever is shown.
    ///
    pub fn apply(&mut self, event: DashboardEvent) -> Result<(), DashboardError> {
        match event {
            DashboardEvent::SubmissionStarted => {
                self.state = PageState::Loading;
            }
            DashboardEvent::SubmissionSucceeded(results) => {
                let selection = Selection::new(results.len());
                self.state = PageState::Loaded { results, selection };
            }
            DashboardEvent::SubmissionFailed(err) => {
                log::error!("{}", err);
                self.state = PageState::Error {
                    message: SUBMISSION_ERROR_MESSAGE.to_string(),
                };
            }
            DashboardEvent::ToggleRow(index) => {
                self.selection_mut()?.toggle(index)?;
            }
            DashboardEvent::SelectAll => {
                self.selection_mut()?.select_all();
            }
            DashboardEvent::DeselectAll => {
                self.selection_mut()?.deselect_all();
            }
        }
        Ok(())
    }

    fn selection_mut(&mut self) -> Result<&mut Selection, DashboardError> {
        match &mut self.state {
            PageState::Loaded { selection, .. } => Ok(selection),
            _ => Err(DashboardError::NoResults),
        }
    }

    ///
    /// Run one full upload cycle on raw VCF text.
    ///
    /// # Arguments
    /// - text: the complete file content
    /// - submitter: sends the extracted descriptors to the annotation service
    ///
    pub fn upload<S: AnnotationService>(
        &mut self,
        text: &str,
        submitter: &BatchSubmitter<S>,
    ) -> Result<(), DashboardError> {
        self.upload_variants(&VariantSet::from_text(text), submitter)
    }

    ///
    /// Run one full upload cycle on already extracted descriptors.
    ///
    /// Zero descriptors fail with [DashboardError::NoVariants] without any
    /// network call and without touching the state. Otherwise the page goes
    /// through Loading into Loaded or Error; on error nothing of the partial
    /// results is kept.
    ///
    pub fn upload_variants<S: AnnotationService>(
        &mut self,
        variant_set: &VariantSet,
        submitter: &BatchSubmitter<S>,
    ) -> Result<(), DashboardError> {
        if variant_set.is_empty() {
            return Err(DashboardError::NoVariants);
        }

        self.apply(DashboardEvent::SubmissionStarted)?;

        match submitter.submit(variant_set.as_slice()) {
            Ok(results) => self.apply(DashboardEvent::SubmissionSucceeded(results)),
            Err(err) => {
                let detail = err.to_string();
                self.apply(DashboardEvent::SubmissionFailed(err))?;
                Err(DashboardError::Submission { detail })
            }
        }
    }

    pub fn toggle(&mut self, index: usize) -> Result<(), DashboardError> {
        self.apply(DashboardEvent::ToggleRow(index))
    }

    pub fn select_all(&mut self) -> Result<(), DashboardError> {
        self.apply(DashboardEvent::SelectAll)
    }

    pub fn deselect_all(&mut self) -> Result<(), DashboardError> {
        self.apply(DashboardEvent::DeselectAll)
    }

    /// Rendered cells of every result row, in result order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.results().iter().map(render_row).collect()
    }

    /// Selected results in ascending row order.
    pub fn selected_results(&self) -> Vec<&AnnotationResult> {
        match &self.state {
            PageState::Loaded { results, selection } => {
                selection.indices().map(|i| &results[i]).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Hand the selected rows to a report generator.
    pub fn generate_report<G: ReportGenerator>(&self, generator: &G) -> Result<G::Output> {
        generator.generate_report(&self.selected_results())
    }

    /// Hand the selected rows to a summary generator.
    pub fn generate_summary<G: SummaryGenerator>(&self, generator: &G) -> Result<G::Output> {
        generator.generate_summary(&self.selected_results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use senusa_core::models::VariantDescriptor;
    use senusa_vep::ServiceError;
    use std::cell::Cell;

    /// Echoes descriptors back; fails on the given 1-based call number.
    struct MockService {
        calls: Cell<usize>,
        fail_on_call: Option<usize>,
    }

    impl MockService {
        fn new(fail_on_call: Option<usize>) -> Self {
            MockService {
                calls: Cell::new(0),
                fail_on_call,
            }
        }
    }

    impl AnnotationService for MockService {
        fn annotate(
            &self,
            chunk: &[VariantDescriptor],
        ) -> Result<Vec<AnnotationResult>, ServiceError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_on_call == Some(self.calls.get()) {
                return Err(ServiceError::Transport("connection reset".to_string()));
            }
            Ok(chunk
                .iter()
                .map(|d| AnnotationResult {
                    input: Some(d.to_string()),
                    ..Default::default()
                })
                .collect())
        }
    }

    fn vcf_text(n: usize) -> String {
        let mut text = String::from("##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\n");
        for i in 0..n {
            text.push_str(&format!("1\t{}\t.\tA\tT\t.\t.\t.\n", i + 1));
        }
        text
    }

    #[rstest]
    fn test_starts_idle() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.state(), &PageState::Idle);
        assert!(!dashboard.is_loading());
        assert!(dashboard.error().is_none());
        assert!(dashboard.results().is_empty());
    }

    #[rstest]
    fn test_successful_upload() {
        let service = MockService::new(None);
        let submitter = BatchSubmitter::new(&service);
        let mut dashboard = Dashboard::new();

        dashboard.upload(&vcf_text(450), &submitter).unwrap();

        assert_eq!(service.calls.get(), 3);
        assert_eq!(dashboard.results().len(), 450);
        assert!(dashboard.selection().unwrap().is_empty());
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.rows()[449][0], "1 450 . A T . . .");
    }

    #[rstest]
    fn test_failure_on_last_chunk_shows_no_partial_table() {
        let service = MockService::new(Some(3));
        let submitter = BatchSubmitter::new(&service);
        let mut dashboard = Dashboard::new();

        let result = dashboard.upload(&vcf_text(450), &submitter);

        assert!(matches!(result, Err(DashboardError::Submission { .. })));
        assert_eq!(dashboard.error(), Some(SUBMISSION_ERROR_MESSAGE));
        assert!(dashboard.results().is_empty());
        assert!(dashboard.rows().is_empty());
        assert!(!dashboard.is_loading());
    }

    #[rstest]
    fn test_empty_upload_keeps_state() {
        let service = MockService::new(None);
        let submitter = BatchSubmitter::new(&service);
        let mut dashboard = Dashboard::new();

        dashboard.upload(&vcf_text(2), &submitter).unwrap();
        dashboard.toggle(1).unwrap();
        let before = dashboard.state().clone();

        let result = dashboard.upload("#only a header\nnoise\n", &submitter);

        assert!(matches!(result, Err(DashboardError::NoVariants)));
        assert_eq!(service.calls.get(), 1);
        assert_eq!(dashboard.state(), &before);
    }

    #[rstest]
    fn test_new_upload_resets_selection() {
        let service = MockService::new(None);
        let submitter = BatchSubmitter::new(&service);
        let mut dashboard = Dashboard::new();

        dashboard.upload(&vcf_text(3), &submitter).unwrap();
        dashboard.select_all().unwrap();
        assert_eq!(dashboard.selected_results().len(), 3);

        dashboard.upload(&vcf_text(2), &submitter).unwrap();
        assert_eq!(dashboard.results().len(), 2);
        assert!(dashboard.selected_results().is_empty());
    }

    #[rstest]
    fn test_error_then_recovery() {
        let failing = MockService::new(Some(1));
        let mut dashboard = Dashboard::new();
        let _ = dashboard.upload(&vcf_text(1), &BatchSubmitter::new(&failing));
        assert!(dashboard.error().is_some());

        let working = MockService::new(None);
        dashboard
            .upload(&vcf_text(1), &BatchSubmitter::new(&working))
            .unwrap();
        assert!(dashboard.error().is_none());
        assert_eq!(dashboard.results().len(), 1);
    }

    #[rstest]
    fn test_selection_requires_results() {
        let mut dashboard = Dashboard::new();
        assert!(matches!(dashboard.toggle(0), Err(DashboardError::NoResults)));
        assert!(matches!(dashboard.select_all(), Err(DashboardError::NoResults)));

        dashboard.apply(DashboardEvent::SubmissionStarted).unwrap();
        assert!(dashboard.is_loading());
        assert!(matches!(dashboard.deselect_all(), Err(DashboardError::NoResults)));
    }

    #[rstest]
    fn test_selected_results_are_in_row_order() {
        let service = MockService::new(None);
        let submitter = BatchSubmitter::new(&service);
        let mut dashboard = Dashboard::new();
        dashboard.upload(&vcf_text(5), &submitter).unwrap();

        for i in [4, 1, 3] {
            dashboard.toggle(i).unwrap();
        }
        let inputs: Vec<&str> = dashboard
            .selected_results()
            .iter()
            .filter_map(|r| r.input.as_deref())
            .collect();

        assert_eq!(
            inputs,
            vec!["1 2 . A T . . .", "1 4 . A T . . .", "1 5 . A T . . ."]
        );
    }

    #[rstest]
    fn test_toggle_out_of_range() {
        let mut dashboard = Dashboard::new();
        dashboard
            .apply(DashboardEvent::SubmissionSucceeded(vec![AnnotationResult::default()]))
            .unwrap();
        assert!(matches!(
            dashboard.toggle(1),
            Err(DashboardError::RowOutOfRange { index: 1, len: 1 })
        ));
    }
}
