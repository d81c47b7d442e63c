// Tab-separated table reading and writing.
//
// The dataset splits, prediction files, and the output table are all TSV
// with a header row. Fields are addressed by column name; rows keep their
// file order, which the positional join between files depends on.

use std::path::Path;

use anyhow::{Context, Result};

/// An in-memory TSV table: header plus rows, in file order.
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a TSV file with a header row. Blank lines are skipped.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut lines = content.lines();

        let columns: Vec<String> = lines
            .next()
            .with_context(|| format!("{} is empty (no header row)", path.display()))?
            .split('\t')
            .map(|field| field.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            rows.push(line.split('\t').map(|field| field.to_string()).collect());
        }

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a required column.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .with_context(|| {
                format!(
                    "Missing required column {name:?} (have: {})",
                    self.columns.join(", ")
                )
            })
    }

    /// Cell contents; a row shorter than the header reads as empty fields.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows[row]
            .get(column)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Write a TSV file with a header row.
pub fn write_tsv(path: &Path, columns: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut out = String::new();
    out.push_str(&columns.join("\t"));
    out.push('\n');
    for row in rows {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
}
