//! Core types for senusa.
//!
//! This crate turns VCF text into the compact variant descriptors the Ensembl VEP
//! region endpoint accepts, and models the annotation records that come back.
pub mod errors;
pub mod models;
pub mod utils;
pub mod vcf;

// re-exports
pub use errors::*;
pub use models::*;
pub use vcf::*;
