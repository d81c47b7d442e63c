// Word embeddings — file-backed lookup table and phrase averaging.

pub mod average;
pub mod loader;
