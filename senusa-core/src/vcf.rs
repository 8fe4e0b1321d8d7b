//! Line-oriented extraction of variant descriptors from VCF text.
//!
//! The rules are deliberately shallow: header and comment lines (`#`) are
//! dropped, lines without a tab are dropped, and everything else keeps its
//! first eight columns. Coordinates are never validated here; the annotation
//! service is the authority on what a valid variant is.

use crate::models::variant::VariantDescriptor;

/// Lines starting with this prefix are VCF meta-information or the header row.
pub const COMMENT_PREFIX: char = '#';

/// Column separator of VCF records.
pub const FIELD_SEPARATOR: char = '\t';

/// Number of leading VCF columns kept in a descriptor (CHROM through INFO).
pub const MAX_DESCRIPTOR_FIELDS: usize = 8;

/// Line terminator used to split the file content.
pub const LINE_SEPARATOR: char = '\n';

///
/// Extract variant descriptors from the full text of a VCF file.
///
/// # Arguments
/// - text: the complete file content
///
/// # Returns
/// - descriptors in the order their records appear in the file; empty when the
///   file holds no qualifying record
///
pub fn extract_descriptors(text: &str) -> Vec<VariantDescriptor> {
    text.split(LINE_SEPARATOR)
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter_map(VariantDescriptor::from_record)
        .collect()
}
