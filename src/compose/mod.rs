//! Pipeline orchestration: whole-image and region composition, and the
//! inverse extractor.

mod classic;
mod extract;
mod partial;

pub use classic::compose_classic;
pub use extract::extract;
pub use partial::{compose_partial, whiten_masked};
