// Phrase embedding — the mean of the constituent tokens' vectors.

use super::loader::WordVectors;

/// Average the word vectors of a phrase's tokens.
///
/// Returns `None` (the missing sentinel) when the phrase is empty, any token
/// is out of vocabulary, or the mean is numerically all-zero (component sum
/// equals zero). A zero vector here would mean "could not compute", and that
/// must not be confused with "truly neutral".
pub fn phrase_embedding(phrase: &str, vectors: &WordVectors) -> Option<Vec<f64>> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    let mut sum = vec![0.0; vectors.dim()];
    for word in &words {
        let vector = vectors.get(word)?;
        for (acc, &component) in sum.iter_mut().zip(vector) {
            *acc += component;
        }
    }

    let n = words.len() as f64;
    for component in &mut sum {
        *component /= n;
    }

    if sum.iter().sum::<f64>() == 0.0 {
        return None;
    }
    Some(sum)
}

/// Serialize an embedding the way the output table stores it: space-joined
/// components, or an empty field when missing.
pub fn serialize_embedding(embedding: Option<&[f64]>) -> String {
    match embedding {
        Some(vector) => vector
            .iter()
            .map(|component| component.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    }
}
