// Phrase aggregation — per-label occurrence counts with stable ordering.

use std::collections::HashMap;

/// One aggregated row: a phrase, the label it was extracted under, and how
/// many times it occurred across that label's examples.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseCount {
    pub label: String,
    pub phrase: String,
    pub count: u64,
}

/// Count phrase occurrences independently per label.
///
/// The same phrase under two labels produces two separate rows. Labels keep
/// their first-seen dataset order and phrases their first-seen order within
/// a label, so the output is deterministic before any sort is applied (and
/// a stable count sort preserves that order among ties).
pub fn count_phrases(examples: &[(String, Vec<String>)]) -> Vec<PhraseCount> {
    let mut label_order: Vec<&str> = Vec::new();
    for (label, _) in examples {
        if !label_order.iter().any(|known| *known == label.as_str()) {
            label_order.push(label);
        }
    }

    let mut rows = Vec::new();
    for label in label_order {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(String, u64)> = Vec::new();
        for (_, phrases) in examples.iter().filter(|(l, _)| l.as_str() == label) {
            for phrase in phrases {
                match index.get(phrase.as_str()) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        index.insert(phrase, counts.len());
                        counts.push((phrase.clone(), 1));
                    }
                }
            }
        }
        for (phrase, count) in counts {
            rows.push(PhraseCount {
                label: label.to_string(),
                phrase,
                count,
            });
        }
    }
    rows
}
