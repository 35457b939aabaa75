pub mod export;
pub mod generator;
pub mod keywords;
pub mod quality;
pub mod service;

pub use crate::domain::model::{GeneratedResult, GenerationRequest, GenerationResponse, WordCount};
pub use crate::domain::ports::{CatalogRepository, GenerationLog, Storage};
pub use crate::utils::error::Result;
