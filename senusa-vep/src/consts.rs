//! Constants for the VEP client.

/// Default annotation endpoint: Ensembl VEP, human, region notation.
pub const DEFAULT_VEP_API: &str = "https://rest.ensembl.org/vep/human/region/";

/// Largest number of variants the region endpoint accepts in one POST.
///
/// Every request carries at most this many descriptors; longer inputs are
/// split into several sequential requests.
pub const MAX_CHUNK_SIZE: usize = 200;

/// Media type used for both the request body and the accepted response.
pub const JSON_MEDIA_TYPE: &str = "application/json";
