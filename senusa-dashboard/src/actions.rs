//! Report and summary collaborators for the selected rows.
//!
//! The dashboard only hands the selected subset over; what a collaborator does
//! with it is its own business. Two collaborators ship with the crate: a JSON
//! report writer and a consequence/impact tally.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use senusa_core::models::AnnotationResult;

use super::columns::PLACEHOLDER;

pub trait ReportGenerator {
    type Output;

    fn generate_report(&self, selected: &[&AnnotationResult]) -> Result<Self::Output>;
}

pub trait SummaryGenerator {
    type Output;

    fn generate_summary(&self, selected: &[&AnnotationResult]) -> Result<Self::Output>;
}

///
/// Writes the selected records, with every field the service sent, as a
/// pretty-printed JSON array.
///
pub struct JsonReport {
    pub path: PathBuf,
}

impl JsonReport {
    pub fn new(path: PathBuf) -> Self {
        JsonReport { path }
    }
}

impl ReportGenerator for JsonReport {
    type Output = PathBuf;

    fn generate_report(&self, selected: &[&AnnotationResult]) -> Result<PathBuf> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create report file at {:?}", self.path))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, selected)
            .with_context(|| format!("Failed to write report to {:?}", self.path))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush report to {:?}", self.path))?;

        log::info!("Wrote report of {} variants to {}", selected.len(), self.path.display());
        Ok(self.path.clone())
    }
}

/// Counts over a selection, keyed by the displayed cell value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub consequences: BTreeMap<String, usize>,
    pub impacts: BTreeMap<String, usize>,
}

///
/// Tallies the most severe consequence and the first transcript's impact of
/// the selected records.
///
#[derive(Default)]
pub struct ConsequenceSummary;

impl SummaryGenerator for ConsequenceSummary {
    type Output = Summary;

    fn generate_summary(&self, selected: &[&AnnotationResult]) -> Result<Summary> {
        let mut summary = Summary {
            total: selected.len(),
            ..Default::default()
        };

        for result in selected {
            let consequence = result
                .most_severe_consequence
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            *summary.consequences.entry(consequence).or_insert(0) += 1;

            let impact = result
                .transcript_consequence(0)
                .and_then(|tc| tc.impact.clone())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            *summary.impacts.entry(impact).or_insert(0) += 1;
        }

        Ok(summary)
    }
}
