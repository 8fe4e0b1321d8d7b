use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

use senusa_core::models::VariantSet;
use senusa_dashboard::{ConsequenceSummary, Dashboard, JsonReport};
use senusa_vep::{BatchSubmitter, VepClient};

use super::cli::{FORMAT_JSON, FORMAT_TABLE, FORMAT_TSV};
use crate::config::{Settings, resolve_chunk_size, resolve_endpoint};
use crate::display::{print_results_json, print_results_table, print_results_tsv, print_summary};

/// Run one upload → annotate cycle from the command line.
pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("vcf")
        .expect("A path to a VCF file is required.");

    let settings = match matches.get_one::<String>("config") {
        Some(path) => Settings::try_from(Path::new(path))?,
        None => Settings::default(),
    };
    let endpoint = resolve_endpoint(matches.get_one::<String>("api").cloned(), &settings);
    let chunk_size = resolve_chunk_size(matches.get_one::<usize>("chunk-size").copied(), &settings);

    let client = VepClient::builder().with_endpoint(endpoint.clone()).finish()?;
    let submitter = BatchSubmitter::new(client)
        .with_chunk_size(chunk_size)
        .with_progress(matches.get_flag("progress"));

    let variant_set = VariantSet::try_from(vcf.as_str())?;
    log::info!(
        "Submitting {} variants from {} to {} in chunks of {}",
        variant_set.len(),
        vcf,
        endpoint,
        submitter.chunk_size()
    );

    let mut dashboard = Dashboard::new();
    dashboard.upload_variants(&variant_set, &submitter)?;

    if matches.get_flag("select-all") {
        dashboard.select_all()?;
    } else if let Some(rows) = matches.get_many::<usize>("select") {
        for row in rows {
            dashboard.toggle(*row)?;
        }
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(FORMAT_TABLE);
    match format {
        FORMAT_TSV => print_results_tsv(&dashboard),
        FORMAT_JSON => print_results_json(&dashboard)?,
        _ => print_results_table(&dashboard),
    }

    if let Some(path) = matches.get_one::<String>("report") {
        let written = dashboard.generate_report(&JsonReport::new(PathBuf::from(path)))?;
        eprintln!("Report written to {}", written.display());
    }

    if matches.get_flag("summary") {
        let summary = dashboard.generate_summary(&ConsequenceSummary)?;
        print_summary(&summary);
    }

    Ok(())
}
