// Word-vector table loading.
//
// Reads a `word v1 .. vD` text file into a lookup table, then inserts every
// English stopword as a zero vector so function words never contribute
// signal to a phrase embedding. Dimensionality comes from configuration, not
// from the file: a line with the wrong field count aborts the load, since
// vector addition downstream assumes a fixed width.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Word → fixed-dimension vector lookup. Built once at startup and passed by
/// reference to whatever needs it; read-only after construction.
pub struct WordVectors {
    vectors: HashMap<String, Vec<f64>>,
    dim: usize,
}

impl WordVectors {
    /// Load a word-vector table from `path`, expecting `dim` components per
    /// word. Blank lines are skipped; any other malformed line is fatal.
    pub fn load(path: &Path, dim: usize) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read embedding file {}", path.display()))?;

        let mut vectors = HashMap::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(' ');
            let word = fields.next().unwrap_or_default();
            let vector: Vec<f64> = fields
                .map(|field| {
                    field.parse::<f64>().with_context(|| {
                        format!("{}:{}: bad float {field:?}", path.display(), line_no + 1)
                    })
                })
                .collect::<Result<_>>()?;
            if vector.len() != dim {
                anyhow::bail!(
                    "{}:{}: expected {dim} components, found {}",
                    path.display(),
                    line_no + 1,
                    vector.len()
                );
            }
            vectors.insert(word.to_string(), vector);
        }

        // Stopwords override whatever the file provides: they are neutral by
        // decree, not by what their trained vector happens to be.
        for word in get(LANGUAGE::English) {
            vectors.insert(word, vec![0.0; dim]);
        }

        info!(words = vectors.len(), dim, "Loaded word vectors");
        Ok(Self { vectors, dim })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Look a word up; `None` means out of vocabulary.
    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
