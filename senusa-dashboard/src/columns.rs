//! Fixed column definitions of the result table.
//!
//! Each column pairs a header label with a pure extractor. Extractors return
//! `None` whenever any link of the lookup chain is missing or empty, and the
//! table shows [`PLACEHOLDER`] instead.

use senusa_core::models::annotation::{truthy_str, truthy_value};
use senusa_core::models::{AnnotationResult, TranscriptConsequence};

/// Cell text for absent values.
pub const PLACEHOLDER: &str = "-";

/// Index of the colocated variant the phenotype column reads.
pub const PHENOTYPE_COLOCATED_INDEX: usize = 1;

pub type Extractor = fn(&AnnotationResult) -> Option<String>;

pub struct Column {
    pub label: &'static str,
    extract: Extractor,
}

impl Column {
    const fn new(label: &'static str, extract: Extractor) -> Self {
        Column { label, extract }
    }

    /// Cell text of this column for one result.
    pub fn value(&self, result: &AnnotationResult) -> String {
        (self.extract)(result).unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

pub const COLUMNS: [Column; 12] = [
    Column::new("#Uploaded_variation", uploaded_variation),
    Column::new("Location", location),
    Column::new("Allele", allele),
    Column::new("Consequence", consequence),
    Column::new("IMPACT", impact),
    Column::new("SYMBOL", symbol),
    Column::new("Feature_Type", feature_type),
    Column::new("Feature", feature),
    Column::new("BIOTYPE", biotype),
    Column::new("EXON", exon),
    Column::new("HGVSc", hgvsc),
    Column::new("PHENOTYPES", phenotypes),
];

pub fn labels() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.label).collect()
}

/// Cell texts of one result, in column order.
pub fn render_row(result: &AnnotationResult) -> Vec<String> {
    COLUMNS.iter().map(|c| c.value(result)).collect()
}

fn text(value: Option<&str>) -> Option<String> {
    truthy_str(value).map(str::to_string)
}

fn first_transcript(result: &AnnotationResult) -> Option<&TranscriptConsequence> {
    result.transcript_consequence(0)
}

fn uploaded_variation(result: &AnnotationResult) -> Option<String> {
    text(result.input.as_deref())
}

fn location(result: &AnnotationResult) -> Option<String> {
    result.location()
}

fn allele(result: &AnnotationResult) -> Option<String> {
    text(result.allele_string.as_deref())
}

fn consequence(result: &AnnotationResult) -> Option<String> {
    text(result.most_severe_consequence.as_deref())
}

fn impact(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.impact.as_deref())
}

fn symbol(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.gene_symbol.as_deref())
}

fn feature_type(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.feature_type.as_deref())
}

fn feature(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.transcript_id.as_deref())
}

fn biotype(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.biotype.as_deref())
}

fn exon(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.exon.as_deref())
}

fn hgvsc(result: &AnnotationResult) -> Option<String> {
    text(first_transcript(result)?.hgvsc.as_deref())
}

fn phenotypes(result: &AnnotationResult) -> Option<String> {
    let colocated = result.colocated_variant(PHENOTYPE_COLOCATED_INDEX)?;
    truthy_value(colocated.phenotype_or_disease.as_ref()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[fixture]
    fn results() -> Vec<AnnotationResult> {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data/vep/response.json");
        let body = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&body).unwrap()
    }

    #[rstest]
    fn test_labels() {
        assert_eq!(
            labels(),
            vec![
                "#Uploaded_variation",
                "Location",
                "Allele",
                "Consequence",
                "IMPACT",
                "SYMBOL",
                "Feature_Type",
                "Feature",
                "BIOTYPE",
                "EXON",
                "HGVSc",
                "PHENOTYPES",
            ]
        );
    }

    #[rstest]
    fn test_fully_annotated_row(results: Vec<AnnotationResult>) {
        assert_eq!(
            render_row(&results[0]),
            vec![
                "1 65568 . A C . . .",
                "1:65568-65568",
                "A/C",
                "missense_variant",
                "MODERATE",
                "OR4F5",
                "Transcript",
                "ENST00000641515",
                "protein_coding",
                "3/3",
                "ENST00000641515.2:c.478A>C",
                "1",
            ]
        );
    }

    #[rstest]
    fn test_intergenic_row_uses_placeholders(results: Vec<AnnotationResult>) {
        let row = render_row(&results[1]);
        assert_eq!(&row[..4], &["2 265023 . C T . . .", "2:265023-265023", "C/T", "intergenic_variant"]);
        assert!(row[4..].iter().all(|cell| cell == PLACEHOLDER));
    }

    #[rstest]
    fn test_empty_transcripts_and_single_colocated(results: Vec<AnnotationResult>) {
        // the phenotype column reads the second colocated entry only
        let row = render_row(&results[2]);
        assert!(row[4..].iter().all(|cell| cell == PLACEHOLDER));
    }

    #[rstest]
    fn test_phenotype_reads_second_colocated_entry() {
        let result: AnnotationResult = serde_json::from_value(json!({
            "colocated_variants": [
                { "phenotype_or_disease": "first" },
                { "phenotype_or_disease": "second" }
            ]
        }))
        .unwrap();
        assert_eq!(COLUMNS[11].value(&result), "second");
    }

    #[rstest]
    fn test_empty_record_is_all_placeholders() {
        let row = render_row(&AnnotationResult::default());
        assert_eq!(row, vec![PLACEHOLDER.to_string(); 12]);
    }

    #[rstest]
    fn test_empty_strings_are_placeholders() {
        let result: AnnotationResult = serde_json::from_value(json!({
            "input": "",
            "allele_string": "",
            "transcript_consequences": [{ "impact": "", "gene_symbol": "BRCA2" }]
        }))
        .unwrap();
        let row = render_row(&result);
        assert_eq!(row[0], PLACEHOLDER);
        assert_eq!(row[2], PLACEHOLDER);
        assert_eq!(row[4], PLACEHOLDER);
        assert_eq!(row[5], "BRCA2");
    }

    #[rstest]
    fn test_partial_location_is_placeholder() {
        let result: AnnotationResult = serde_json::from_value(json!({
            "seq_region_name": "X",
            "start": 100
        }))
        .unwrap();
        assert_eq!(COLUMNS[1].value(&result), PLACEHOLDER);
    }
}
