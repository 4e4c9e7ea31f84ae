mod classifier;
mod error;
mod markers;
mod types;

pub use classifier::DeviceClassifier;
pub use error::{Error, Result};
pub use types::*;
