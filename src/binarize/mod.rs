// Score binarization — strategies for turning soft relevance into hard masks.

pub mod neighbors;
pub mod threshold;
pub mod traits;
