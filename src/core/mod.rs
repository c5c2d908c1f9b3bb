pub mod generator;
pub mod loader;
pub mod normalize;

pub use crate::domain::model::{Entity, GenerationReport, RawRecord};
pub use crate::domain::ports::{Renderer, Storage};
pub use crate::utils::error::Result;
