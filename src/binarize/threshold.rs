// Threshold binarization — select every token scoring above a fixed cutoff.

use super::traits::Binarizer;

/// Fixed-cutoff binarizer: token i is selected iff `scores[i] > threshold`.
///
/// Stateless and O(n). Raising the threshold never selects more tokens.
pub struct ThresholdBinarizer {
    pub threshold: f64,
}

impl Binarizer for ThresholdBinarizer {
    fn binarize(&self, scores: &[f64]) -> Vec<u8> {
        scores
            .iter()
            .map(|&s| u8::from(s > self.threshold))
            .collect()
    }
}
