pub mod error;
pub mod resolver;
pub mod scoring;
pub mod types;

pub use error::ResolveError;
pub use resolver::{PredictionResolver, ScoringMode};
pub use types::{PredictionRequest, PredictionResult};
