// Pipeline orchestration — the end-to-end vectorize pass.

pub mod vectorize;
