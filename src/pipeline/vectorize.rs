// The vectorize pass: binarize predicted rationales, aggregate the phrases
// per label, and attach averaged word embeddings.
//
// Stages run strictly in sequence over the in-memory working set:
//   load splits -> extract -> count per label -> sort -> embed -> persist
//
// The word-vector table is built by the caller and passed in; nothing here
// holds global state.

use std::fs;
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::aggregate::{count_phrases, PhraseCount};
use crate::config::Config;
use crate::data::{self, tsv};
use crate::embedding::average::{phrase_embedding, serialize_embedding};
use crate::embedding::loader::WordVectors;
use crate::rationale;

/// Name of the persisted output table inside the vector directory.
pub const OUTPUT_FILE: &str = "rationale_embeddings.tsv";

/// Run the full vectorize pass. Returns the aggregated rows in output order
/// (count descending, stable among ties).
pub fn run(
    config: &Config,
    data_path: &Path,
    rationale_path: &Path,
    vector_path: &Path,
    word_vectors: &WordVectors,
) -> Result<Vec<PhraseCount>> {
    let binarizer = config.binarizer()?;

    // Step 1: load the three splits and concatenate them into one working set.
    let mut examples = Vec::new();
    for split in data::SPLITS {
        let data_file = data_path.join(format!("{split}.tsv"));
        let rationale_file = rationale_path.join(format!("{split}.tsv"));
        examples.extend(data::join_split(&data_file, &rationale_file)?);
    }
    println!("Extracting rationales from {} examples...", examples.len());

    // Step 2: binarize and cut phrases, row by row.
    let pb = ProgressBar::new(examples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Extracting [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut extracted: Vec<(String, Vec<String>)> = Vec::with_capacity(examples.len());
    let mut selected_tokens = 0usize;
    for example in &examples {
        let result = rationale::extract(
            &example.tokens,
            &example.raw_scores,
            &example.alignment,
            binarizer.as_ref(),
        )?;
        selected_tokens += result.rationale_len;
        extracted.push((example.label.clone(), result.phrases));
        pb.inc(1);
    }
    pb.finish_and_clear();
    info!(
        examples = examples.len(),
        selected_tokens,
        "Extracted rationales"
    );

    // Step 3: count per label, most frequent phrases first.
    let mut rows = count_phrases(&extracted);
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    info!(rows = rows.len(), "Aggregated rationale phrases");

    // Step 4: averaged word embedding per distinct (label, phrase) row.
    let mut missing = 0usize;
    let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in &rows {
        let embedding = phrase_embedding(&row.phrase, word_vectors);
        if embedding.is_none() {
            missing += 1;
        }
        table.push(vec![
            row.count.to_string(),
            row.label.clone(),
            row.phrase.clone(),
            serialize_embedding(embedding.as_deref()),
        ]);
    }
    if missing > 0 {
        warn!(
            missing,
            total = rows.len(),
            "Phrases without a computable embedding"
        );
    }

    // Step 5: persist.
    fs::create_dir_all(vector_path)?;
    let out_file = vector_path.join(OUTPUT_FILE);
    tsv::write_tsv(
        &out_file,
        &["count", "label", "rationale", "embeddings"],
        &table,
    )?;
    println!("Wrote {} rows to {}", table.len(), out_file.display());

    Ok(rows)
}
