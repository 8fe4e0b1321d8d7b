use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::VariantFileError;
use crate::models::variant::VariantDescriptor;
use crate::utils::read_text;
use crate::vcf::extract_descriptors;

///
/// VariantSet struct, the ordered descriptors extracted from one VCF upload.
///
/// Serializes to the request payload shape of the VEP region endpoint,
/// `{ "variants": [...] }`.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VariantSet {
    pub variants: Vec<VariantDescriptor>,
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl VariantSet {
    ///
    /// Build a [VariantSet] from raw VCF text.
    ///
    /// An empty set is not an error here; see [VariantSet::ensure_not_empty].
    ///
    pub fn from_text(text: &str) -> Self {
        VariantSet {
            variants: extract_descriptors(text),
            path: None,
        }
    }

    ///
    /// Fail with [VariantFileError::EmptyInput] when no record qualified.
    ///
    pub fn ensure_not_empty(self) -> Result<Self, VariantFileError> {
        if self.variants.is_empty() {
            let source = self
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<text>".to_string());
            return Err(VariantFileError::EmptyInput(source));
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariantDescriptor> {
        self.variants.iter()
    }

    pub fn as_slice(&self) -> &[VariantDescriptor] {
        &self.variants
    }
}

impl TryFrom<&Path> for VariantSet {
    type Error = VariantFileError;

    ///
    /// Create a new [VariantSet] from a VCF file (plain or gzipped).
    ///
    /// # Arguments:
    /// - value: path to the VCF file on disk.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let path_str = value
            .to_str()
            .ok_or_else(|| VariantFileError::FileReadError(format!("{:?}", value)))?;

        let text = read_text(path_str)?;
        let mut variant_set = VariantSet::from_text(&text);
        variant_set.path = Some(value.to_path_buf());

        Ok(variant_set)
    }
}

impl TryFrom<&str> for VariantSet {
    type Error = VariantFileError;

    ///
    /// Create a new [VariantSet] from a path string, `-` reads stdin.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let text = read_text(value)?;
        let mut variant_set = VariantSet::from_text(&text);
        variant_set.path = Some(PathBuf::from(value));

        Ok(variant_set)
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a VariantDescriptor;
    type IntoIter = std::slice::Iter<'a, VariantDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}
