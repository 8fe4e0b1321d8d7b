use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::vcf::{FIELD_SEPARATOR, MAX_DESCRIPTOR_FIELDS};

///
/// VariantDescriptor struct, the compact form of one VCF record that the
/// VEP region endpoint accepts: the first eight columns joined by single spaces.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantDescriptor(String);

impl VariantDescriptor {
    ///
    /// Build a descriptor from one non-comment VCF line.
    ///
    /// Returns `None` when the line has a single field (no tab at all); such
    /// lines are treated as noise rather than errors. Trailing whitespace and
    /// carriage returns are left untouched.
    ///
    pub fn from_record(line: &str) -> Option<Self> {
        if !line.contains(FIELD_SEPARATOR) {
            return None;
        }

        let fields: Vec<&str> = line
            .split(FIELD_SEPARATOR)
            .take(MAX_DESCRIPTOR_FIELDS)
            .collect();

        Some(VariantDescriptor(fields.join(" ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for VariantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VariantDescriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
