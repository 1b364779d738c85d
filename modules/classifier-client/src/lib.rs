pub mod hf;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use hf::HfClassifier;
pub use traits::{LabelScore, ZeroShotClassifier};
