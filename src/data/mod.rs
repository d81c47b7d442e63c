// Dataset loading — split files joined row-by-row with their rationale
// prediction files.

pub mod tsv;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use self::tsv::Table;

/// The three dataset splits, concatenated in this order into the working set.
pub const SPLITS: [&str; 3] = ["train", "dev", "test"];

/// One classified example joined with its predicted token relevance.
#[derive(Debug, Clone)]
pub struct Example {
    /// Whitespace-split text tokens.
    pub tokens: Vec<String>,
    /// Ground-truth class label.
    pub label: String,
    /// Raw predicted relevance, one score per model input position
    /// (padding included).
    pub raw_scores: Vec<f64>,
    /// Alignment flags marking which raw positions are real tokens.
    pub alignment: Vec<f64>,
}

/// Load one split and join it with its rationale prediction file.
///
/// Precondition: the two files are row-aligned — row i of the data file was
/// the model input that produced row i of the prediction file. There is no
/// shared key to join on, so differing row counts are treated as corruption
/// and abort the load rather than silently truncating.
pub fn join_split(data_file: &Path, rationale_file: &Path) -> Result<Vec<Example>> {
    let data = Table::read(data_file)?;
    let rationale = Table::read(rationale_file)?;

    if data.len() != rationale.len() {
        anyhow::bail!(
            "Row count mismatch: {} has {} rows but {} has {}",
            data_file.display(),
            data.len(),
            rationale_file.display(),
            rationale.len()
        );
    }

    let tokens_col = data.column("tokens")?;
    let label_col = data.column("label")?;
    let pred_col = rationale.column("rationale_pred")?;
    let mask_col = rationale.column("mask")?;

    let mut examples = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        examples.push(Example {
            tokens: data
                .cell(i, tokens_col)
                .split(' ')
                .map(str::to_string)
                .collect(),
            label: data.cell(i, label_col).to_string(),
            raw_scores: parse_floats(rationale.cell(i, pred_col)).with_context(|| {
                format!(
                    "{}: row {}: bad rationale_pred",
                    rationale_file.display(),
                    i + 1
                )
            })?,
            alignment: parse_floats(rationale.cell(i, mask_col)).with_context(|| {
                format!("{}: row {}: bad mask", rationale_file.display(), i + 1)
            })?,
        });
    }

    info!(
        rows = examples.len(),
        file = %data_file.display(),
        "Loaded split"
    );
    Ok(examples)
}

/// Parse a cell holding a space-joined float list.
fn parse_floats(cell: &str) -> Result<Vec<f64>> {
    cell.split_whitespace()
        .map(|field| {
            field
                .parse::<f64>()
                .with_context(|| format!("bad float {field:?}"))
        })
        .collect()
}
