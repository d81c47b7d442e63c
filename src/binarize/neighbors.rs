// Neighbor-expansion binarization — grow selections outward from score peaks.
//
// Repeatedly takes the highest remaining score as a peak and absorbs the
// contiguous neighbors whose scores stay strictly above a fraction of that
// peak. Stops once the best remaining score falls below the same fraction of
// the global maximum. O(n²) worst case; sentence-length inputs keep that
// cheap.

use super::traits::Binarizer;

/// Peak-expansion binarizer controlled by a single relative cutoff.
pub struct NeighborBinarizer {
    /// Damp factor in (0, 1]: peaks must reach `max_val * damp`, neighbors
    /// must strictly exceed `peak_val * damp` to be absorbed.
    pub damp: f64,
}

impl Binarizer for NeighborBinarizer {
    fn binarize(&self, scores: &[f64]) -> Vec<u8> {
        let mut soft = scores.to_vec();
        let mut hard = vec![0u8; soft.len()];

        if soft.is_empty() {
            return hard;
        }
        // The global reference is fixed up front; it is not recomputed as
        // entries get zeroed out.
        let max_val = soft.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        // Without any positive score there is no peak to expand from, and the
        // loop below would keep re-selecting zeroed entries forever.
        if max_val <= 0.0 {
            return hard;
        }

        loop {
            let (peak_id, peak_val) = argmax(&soft);
            if peak_val < max_val * self.damp {
                break;
            }
            hard[peak_id] = 1;
            soft[peak_id] = 0.0;

            // Absorb left neighbors.
            let mut i = peak_id;
            while i > 0 && soft[i - 1] > peak_val * self.damp {
                i -= 1;
                hard[i] = 1;
                soft[i] = 0.0;
            }

            // Absorb right neighbors.
            let mut i = peak_id + 1;
            while i < soft.len() && soft[i] > peak_val * self.damp {
                hard[i] = 1;
                soft[i] = 0.0;
                i += 1;
            }
        }

        hard
    }
}

/// Stable argmax: the first occurrence wins ties.
fn argmax(values: &[f64]) -> (usize, f64) {
    let mut best_id = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_val {
            best_id = i;
            best_val = v;
        }
    }
    (best_id, best_val)
}
