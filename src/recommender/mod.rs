mod engine;
mod error;
pub mod similarity;
pub mod taste;

pub use engine::RecommendationEngine;
pub use error::RecsysError;
