// Binarizer trait — swap-ready decision rule.
//
// Converting soft per-token relevance into a hard select/reject mask is the
// only step with interchangeable strategies; the rest of the pipeline sees
// nothing but the resulting mask.

/// Trait for converting per-token relevance scores into a {0,1} mask.
pub trait Binarizer {
    /// Produce a selection mask of the same length as `scores`.
    fn binarize(&self, scores: &[f64]) -> Vec<u8>;
}
