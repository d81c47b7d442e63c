// Rationalize: rationale phrase binarization and vectorization.
//
// This is the library root. Each module corresponds to one stage of the
// rationale analysis pipeline.

pub mod aggregate;
pub mod binarize;
pub mod config;
pub mod data;
pub mod embedding;
pub mod output;
pub mod pipeline;
pub mod rationale;
