use anyhow::Result;
use clap::ArgMatches;

use senusa_core::models::VariantSet;
use senusa_vep::client::VariantRequest;
use senusa_vep::chunk_descriptors;

pub fn run_extract(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("vcf")
        .expect("A path to a VCF file is required.");

    let variant_set = VariantSet::try_from(vcf.as_str())?.ensure_not_empty()?;
    log::info!("Extracted {} variants from {}", variant_set.len(), vcf);

    if !matches.get_flag("json") {
        for descriptor in &variant_set {
            println!("{}", descriptor);
        }
        return Ok(());
    }

    match matches.get_one::<usize>("chunk-size") {
        Some(chunk_size) => {
            for chunk in chunk_descriptors(variant_set.as_slice(), *chunk_size) {
                let payload = VariantRequest { variants: chunk };
                println!("{}", serde_json::to_string(&payload)?);
            }
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&variant_set)?);
        }
    }

    Ok(())
}
