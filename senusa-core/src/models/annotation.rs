//! Annotation records returned by the VEP region endpoint.
//!
//! Only the fields the result table reads are typed. Every other field the
//! service sends is kept in `extra` so that reports can hand the full record
//! on without this crate having to know its shape.
//!
//! A typed field holding a value of the wrong JSON type reads as absent
//! instead of failing the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

///
/// One annotated variant, as returned by the service.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationResult {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub seq_region_name: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub allele_string: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub most_severe_consequence: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub transcript_consequences: Option<Vec<TranscriptConsequence>>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub colocated_variants: Option<Vec<ColocatedVariant>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

///
/// Effect of a variant on one transcript.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConsequence {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gene_symbol: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub biotype: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub exon: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hgvsc: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

///
/// A known variant overlapping the annotated one.
///
/// `phenotype_or_disease` is a flag in current VEP releases (`1`) but older
/// releases send strings, so it stays untyped.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColocatedVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phenotype_or_disease: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnnotationResult {
    ///
    /// Get the transcript consequence at `index`, if the service sent one.
    ///
    pub fn transcript_consequence(&self, index: usize) -> Option<&TranscriptConsequence> {
        self.transcript_consequences.as_ref()?.get(index)
    }

    ///
    /// Get the colocated variant at `index`, if the service sent one.
    ///
    pub fn colocated_variant(&self, index: usize) -> Option<&ColocatedVariant> {
        self.colocated_variants.as_ref()?.get(index)
    }

    ///
    /// Get the `region:start-end` string; `None` when any part is missing.
    ///
    pub fn location(&self) -> Option<String> {
        let region = truthy_str(self.seq_region_name.as_deref())?;
        let start = self.start?;
        let end = self.end?;
        Some(format!("{}:{}-{}", region, start, end))
    }
}

///
/// Keep a string only if it is non-empty.
///
pub fn truthy_str(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

///
/// Render a loosely typed JSON value as display text.
///
/// Returns `None` for values a table should treat as absent: `null`, `false`,
/// numeric zero and the empty string. Strings are rendered without quotes.
///
pub fn truthy_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[fixture]
    fn path_to_vep_response() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data/vep/response.json")
    }

    #[rstest]
    fn test_parse_service_response(path_to_vep_response: PathBuf) {
        let body = std::fs::read_to_string(path_to_vep_response).unwrap();
        let results: Vec<AnnotationResult> = serde_json::from_str(&body).unwrap();

        assert_eq!(results.len(), 3);

        let first = &results[0];
        assert_eq!(first.input.as_deref(), Some("1 65568 . A C . . ."));
        assert_eq!(first.location().as_deref(), Some("1:65568-65568"));
        assert_eq!(first.most_severe_consequence.as_deref(), Some("missense_variant"));
        assert_eq!(
            first
                .transcript_consequence(0)
                .and_then(|tc| tc.gene_symbol.as_deref()),
            Some("OR4F5")
        );
        // untyped fields survive
        assert_eq!(first.extra.get("assembly_name"), Some(&json!("GRCh38")));
    }

    #[rstest]
    fn test_unknown_fields_round_trip() {
        let raw = json!({
            "input": "1 100 . A T . . .",
            "strand": 1,
            "transcript_consequences": [{ "impact": "LOW", "sift_score": 0.5 }]
        });
        let result: AnnotationResult = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), raw);
    }

    #[rstest]
    fn test_empty_object_is_accepted() {
        let result: AnnotationResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, AnnotationResult::default());
        assert!(result.location().is_none());
        assert!(result.transcript_consequence(0).is_none());
        assert!(result.colocated_variant(1).is_none());
    }

    #[rstest]
    fn test_mistyped_fields_read_as_absent() {
        let raw = json!({
            "input": "1 100 . A T . . .",
            "start": "100",
            "end": 100,
            "seq_region_name": "1",
            "most_severe_consequence": ["missense_variant"],
            "transcript_consequences": {},
            "colocated_variants": [{ "phenotype_or_disease": 1 }, { "phenotype_or_disease": 1 }]
        });
        let result: AnnotationResult = serde_json::from_value(raw).unwrap();

        assert_eq!(result.input.as_deref(), Some("1 100 . A T . . ."));
        assert_eq!(result.start, None);
        assert_eq!(result.end, Some(100));
        assert!(result.location().is_none());
        assert!(result.most_severe_consequence.is_none());
        assert!(result.transcript_consequences.is_none());
        assert!(result.colocated_variant(1).is_some());
    }

    #[rstest]
    fn test_mistyped_transcript_field_keeps_the_rest() {
        let raw = json!({
            "transcript_consequences": [{ "impact": 3, "gene_symbol": "OR4F5" }]
        });
        let result: AnnotationResult = serde_json::from_value(raw).unwrap();
        let tc = result.transcript_consequence(0).unwrap();

        assert_eq!(tc.impact, None);
        assert_eq!(tc.gene_symbol.as_deref(), Some("OR4F5"));
    }

    #[rstest]
    #[case(json!(null), None)]
    #[case(json!(false), None)]
    #[case(json!(0), None)]
    #[case(json!(""), None)]
    #[case(json!(1), Some("1"))]
    #[case(json!(true), Some("true"))]
    #[case(json!("Cardiomyopathy"), Some("Cardiomyopathy"))]
    fn test_truthy_value(#[case] value: Value, #[case] expected: Option<&str>) {
        assert_eq!(truthy_value(&value).as_deref(), expected);
    }
}
