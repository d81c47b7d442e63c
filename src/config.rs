use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::binarize::neighbors::NeighborBinarizer;
use crate::binarize::threshold::ThresholdBinarizer;
use crate::binarize::traits::Binarizer;

/// Which binarization strategy converts soft scores into a hard mask.
///
/// Parsed directly from the config file — an unrecognized mode string is a
/// deserialization error, so it never reaches the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinarizeMode {
    Threshold,
    Neighbors,
}

/// Which pretrained word-vector table to average phrases over.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingName {
    /// Standard GloVe table under `<data_dir>/glove/`
    Glove,
    /// Task-specific vectors trained alongside the model (`w2v.txt`)
    Trained,
}

/// Analysis configuration, read from the dataset's `<config_name>.config`
/// JSON file.
///
/// The config file also carries training-time settings (model name, learning
/// rates, ...) that the analysis side has no use for; those are ignored on
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub binarize_mode: BinarizeMode,
    /// Cutoff for threshold mode — required when that mode is selected.
    #[serde(default)]
    pub binarize_threshold: Option<f64>,
    /// Damp factor in (0, 1] for neighbors mode — required when that mode
    /// is selected.
    #[serde(default)]
    pub binarize_damp_factor: Option<f64>,
    pub embedding_dim: usize,
    pub embedding_name: EmbeddingName,
}

impl Config {
    /// Load and validate the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the chosen binarize mode has the parameter it needs and
    /// that numeric settings are in range.
    pub fn validate(&self) -> Result<()> {
        if self.embedding_dim == 0 {
            anyhow::bail!("embedding_dim must be a positive integer");
        }
        match self.binarize_mode {
            BinarizeMode::Threshold => {
                if self.binarize_threshold.is_none() {
                    anyhow::bail!(
                        "binarize_mode is \"threshold\" but binarize_threshold is not set"
                    );
                }
            }
            BinarizeMode::Neighbors => match self.binarize_damp_factor {
                None => anyhow::bail!(
                    "binarize_mode is \"neighbors\" but binarize_damp_factor is not set"
                ),
                Some(damp) if damp <= 0.0 || damp > 1.0 => {
                    anyhow::bail!("binarize_damp_factor must be in (0, 1], got {damp}")
                }
                Some(_) => {}
            },
        }
        Ok(())
    }

    /// Build the configured binarization strategy.
    pub fn binarizer(&self) -> Result<Box<dyn Binarizer>> {
        match self.binarize_mode {
            BinarizeMode::Threshold => {
                let Some(threshold) = self.binarize_threshold else {
                    anyhow::bail!(
                        "binarize_mode is \"threshold\" but binarize_threshold is not set"
                    );
                };
                Ok(Box::new(ThresholdBinarizer { threshold }))
            }
            BinarizeMode::Neighbors => {
                let Some(damp) = self.binarize_damp_factor else {
                    anyhow::bail!(
                        "binarize_mode is \"neighbors\" but binarize_damp_factor is not set"
                    );
                };
                Ok(Box::new(NeighborBinarizer { damp }))
            }
        }
    }

    /// Resolve the word-vector file the training setup would have used:
    /// GloVe tables live under `<data_dir>/glove/`, trained vectors sit next
    /// to the dataset as `w2v.txt`.
    pub fn embedding_path(&self, data_dir: &Path, data_path: &Path) -> PathBuf {
        match self.embedding_name {
            EmbeddingName::Glove => data_dir
                .join("glove")
                .join(format!("glove.6B.{}d.txt", self.embedding_dim)),
            EmbeddingName::Trained => data_path.join("w2v.txt"),
        }
    }
}
