// Rationale extraction — align scores with tokens, binarize, and cut the
// selected positions into contiguous phrases.

use anyhow::Result;

use crate::binarize::traits::Binarizer;

/// One example's extracted rationale: the corrected selection mask, how many
/// tokens survived it, and the contiguous phrases they form.
#[derive(Debug, Clone, PartialEq)]
pub struct Rationale {
    pub mask: Vec<u8>,
    pub rationale_len: usize,
    /// Phrases in left-to-right sentence order.
    pub phrases: Vec<String>,
}

/// Tokens that can never be part of a rationale: fragments shorter than
/// three characters (covers punctuation and clitics like "'s") and bracketed
/// placeholders such as `<pad>` or `<unk>`.
pub fn is_nonrationale_token(token: &str) -> bool {
    if token.chars().count() < 3 {
        return true;
    }
    token.starts_with('<') && token.ends_with('>')
}

/// Keep only the raw score positions the alignment mask marks as real tokens.
pub fn filter_scores(raw_scores: &[f64], alignment: &[f64]) -> Vec<f64> {
    raw_scores
        .iter()
        .zip(alignment)
        .filter(|(_, &flag)| flag > 0.0)
        .map(|(&score, _)| score)
        .collect()
}

/// Extract the rationale for one example.
///
/// `raw_scores` and `alignment` come straight from the prediction file and
/// cover padding positions too; after filtering, the score count must equal
/// the token count exactly or the example is rejected — a mismatch here means
/// the upstream data is corrupt, not something to patch over locally.
pub fn extract(
    tokens: &[String],
    raw_scores: &[f64],
    alignment: &[f64],
    binarizer: &dyn Binarizer,
) -> Result<Rationale> {
    let scores = filter_scores(raw_scores, alignment);
    if scores.len() != tokens.len() {
        anyhow::bail!(
            "Score/token length mismatch: {} scores for {} tokens",
            scores.len(),
            tokens.len()
        );
    }

    let mut mask = binarizer.binarize(&scores);
    // Excluded tokens are forced out even when the binarizer picked them.
    for (bit, token) in mask.iter_mut().zip(tokens) {
        if is_nonrationale_token(token) {
            *bit = 0;
        }
    }
    let rationale_len = mask.iter().map(|&bit| bit as usize).sum();

    Ok(Rationale {
        phrases: phrases_from_mask(tokens, &mask),
        rationale_len,
        mask,
    })
}

/// Cut a token sequence into its selected contiguous phrases, space-joined.
///
/// Pure in (tokens, mask): re-running on the same pair yields the same list.
/// A run of selected tokens that reaches the end of the sentence is a phrase
/// like any other; only empty accumulators are dropped.
pub fn phrases_from_mask(tokens: &[String], mask: &[u8]) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current = String::new();
    for (token, &bit) in tokens.iter().zip(mask) {
        if bit == 1 {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(token);
        } else if !current.is_empty() {
            phrases.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        phrases.push(current);
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_nonrationale_short_token() {
        assert!(is_nonrationale_token("ok"));
        assert!(is_nonrationale_token(","));
        assert!(is_nonrationale_token(""));
    }

    #[test]
    fn test_nonrationale_placeholder() {
        assert!(is_nonrationale_token("<pad>"));
        assert!(is_nonrationale_token("<unk>"));
    }

    #[test]
    fn test_normal_word_is_allowed() {
        assert!(!is_nonrationale_token("service"));
        assert!(!is_nonrationale_token("the"));
    }

    #[test]
    fn test_filter_scores_drops_padding() {
        let scores = filter_scores(&[0.9, 0.1, 0.8, 0.0], &[1.0, 0.0, 1.0, 0.0]);
        assert_eq!(scores, vec![0.9, 0.8]);
    }

    #[test]
    fn test_phrases_merge_contiguous_runs() {
        let toks = tokens(&["very", "good", "food", "but", "slow"]);
        let phrases = phrases_from_mask(&toks, &[1, 1, 1, 0, 1]);
        assert_eq!(phrases, vec!["very good food", "slow"]);
    }

    #[test]
    fn test_trailing_phrase_is_kept() {
        let toks = tokens(&["great", "service", "overall"]);
        let phrases = phrases_from_mask(&toks, &[1, 0, 1]);
        assert_eq!(phrases, vec!["great", "overall"]);
    }

    #[test]
    fn test_all_unselected_yields_no_phrases() {
        let toks = tokens(&["great", "service"]);
        assert!(phrases_from_mask(&toks, &[0, 0]).is_empty());
    }

    #[test]
    fn test_phrase_extraction_is_idempotent() {
        let toks = tokens(&["great", "food", "terrible", "service"]);
        let mask = [1, 1, 0, 1];
        let first = phrases_from_mask(&toks, &mask);
        let second = phrases_from_mask(&toks, &mask);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_rejects_length_mismatch() {
        use crate::binarize::threshold::ThresholdBinarizer;

        let toks = tokens(&["great", "service"]);
        let b = ThresholdBinarizer { threshold: 0.5 };
        // Three surviving scores for two tokens.
        let result = extract(&toks, &[0.9, 0.8, 0.7], &[1.0, 1.0, 1.0], &b);
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_forces_excluded_tokens_out() {
        use crate::binarize::threshold::ThresholdBinarizer;

        // "me" and "<pad>" both score high, but neither may appear in a
        // rationale; "delicious" keeps its selection.
        let toks = tokens(&["me", "<pad>", "delicious"]);
        let b = ThresholdBinarizer { threshold: 0.5 };
        let r = extract(&toks, &[0.9, 0.9, 0.9], &[1.0, 1.0, 1.0], &b).unwrap();
        assert_eq!(r.mask, vec![0, 0, 1]);
        assert_eq!(r.rationale_len, 1);
        assert_eq!(r.phrases, vec!["delicious"]);
    }

    #[test]
    fn test_three_character_token_is_not_excluded() {
        use crate::binarize::threshold::ThresholdBinarizer;

        // The exclusion cutoff is strict: "but" has exactly three characters
        // and stays selectable, bridging the two runs into one phrase.
        let toks = tokens(&["great", "food", "but", "awful"]);
        let b = ThresholdBinarizer { threshold: 0.5 };
        let r = extract(&toks, &[0.9, 0.8, 0.9, 0.7], &[1.0, 1.0, 1.0, 1.0], &b).unwrap();
        assert_eq!(r.rationale_len, 4);
        assert_eq!(r.phrases, vec!["great food but awful"]);
    }

    #[test]
    fn test_extract_counts_selected_tokens() {
        use crate::binarize::threshold::ThresholdBinarizer;

        let toks = tokens(&["great", "food", "so", "awful", "noise"]);
        let b = ThresholdBinarizer { threshold: 0.5 };
        let r = extract(
            &toks,
            &[0.9, 0.8, 0.9, 0.7, 0.1],
            &[1.0, 1.0, 1.0, 1.0, 1.0],
            &b,
        )
        .unwrap();
        // "so" is excluded (under three characters), so three tokens survive
        // and the run is split in two.
        assert_eq!(r.rationale_len, 3);
        assert_eq!(r.phrases, vec!["great food", "awful"]);
    }
}
