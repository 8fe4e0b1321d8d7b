pub mod annotation;
pub mod variant;
pub mod variant_set;

// re-exports
pub use self::annotation::{AnnotationResult, ColocatedVariant, TranscriptConsequence};
pub use self::variant::VariantDescriptor;
pub use self::variant_set::VariantSet;
