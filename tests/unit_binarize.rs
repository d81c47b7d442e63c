// Unit tests for the binarization strategies.
//
// Tests isolated pure functions: threshold monotonicity as a property over a
// cutoff grid, and neighbor-expansion invariants (termination, strictness,
// absorption below the global cutoff only via contiguous expansion).

use rationalize::binarize::neighbors::NeighborBinarizer;
use rationalize::binarize::threshold::ThresholdBinarizer;
use rationalize::binarize::traits::Binarizer;

fn selected(mask: &[u8]) -> usize {
    mask.iter().map(|&bit| bit as usize).sum()
}

// ============================================================
// Threshold strategy — monotonicity
// ============================================================

#[test]
fn raising_threshold_never_selects_more_tokens() {
    let scores = [0.05, 0.12, 0.3, 0.31, 0.5, 0.55, 0.72, 0.9, 0.99];
    let mut previous = usize::MAX;
    for step in 0..=20 {
        let cutoff = step as f64 / 20.0;
        let mask = ThresholdBinarizer { threshold: cutoff }.binarize(&scores);
        let count = selected(&mask);
        assert!(
            count <= previous,
            "cutoff {cutoff} selected {count} tokens, previous cutoff selected {previous}"
        );
        previous = count;
    }
}

#[test]
fn threshold_mask_matches_score_length() {
    let scores = [0.1, 0.9, 0.4];
    let mask = ThresholdBinarizer { threshold: 0.5 }.binarize(&scores);
    assert_eq!(mask.len(), scores.len());
}

// ============================================================
// Neighbor expansion — invariants
// ============================================================

#[test]
fn neighbors_terminates_on_uniform_scores() {
    // Every entry equals the maximum; each iteration selects exactly one
    // peak (the strict neighbor test absorbs nothing), and the loop must
    // still finish with everything selected.
    let scores = vec![0.5; 10];
    let mask = NeighborBinarizer { damp: 1.0 }.binarize(&scores);
    assert_eq!(selected(&mask), 10);
}

#[test]
fn neighbors_never_selects_isolated_weak_scores() {
    // 0.3 and 0.1 are below max_val * damp = 0.5 and not adjacent to any
    // qualifying peak's expansion.
    let scores = [1.0, 0.0, 0.3, 0.0, 0.1];
    let mask = NeighborBinarizer { damp: 0.5 }.binarize(&scores);
    assert_eq!(mask, vec![1, 0, 0, 0, 0]);
}

#[test]
fn neighbors_absorbs_weak_score_adjacent_to_lower_peak() {
    // 0.35 is below the global cutoff (0.5) but strictly exceeds the second
    // peak's local cutoff (0.6 * 0.5 = 0.3), so contiguous expansion from
    // that peak pulls it in.
    let scores = [1.0, 0.1, 0.6, 0.35];
    let mask = NeighborBinarizer { damp: 0.5 }.binarize(&scores);
    assert_eq!(mask, vec![1, 0, 1, 1]);
}

#[test]
fn neighbors_global_reference_is_fixed() {
    // After the 1.0 peak is consumed, 0.4 does not become "the new max":
    // it still fails 1.0 * 0.5 and the run stops.
    let scores = [1.0, 0.0, 0.4, 0.38];
    let mask = NeighborBinarizer { damp: 0.5 }.binarize(&scores);
    assert_eq!(mask, vec![1, 0, 0, 0]);
}

#[test]
fn neighbors_expansion_stops_at_strict_boundary() {
    // The plateau does not strictly exceed peak * damp, so expansion leaves
    // it alone, and it is too weak to qualify as a peak on its own.
    let scores = [1.0, 0.8, 0.8];
    let mask = NeighborBinarizer { damp: 0.9 }.binarize(&scores);
    assert_eq!(mask, vec![1, 0, 0]);
}

#[test]
fn neighbors_handles_degenerate_inputs() {
    let b = NeighborBinarizer { damp: 0.5 };
    assert!(b.binarize(&[]).is_empty());
    assert_eq!(b.binarize(&[0.0, 0.0]), vec![0, 0]);
}
