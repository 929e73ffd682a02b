pub mod frequency;
pub mod generator;
pub mod prompts;
pub mod service;

pub use frequency::EnglishFrequency;
pub use generator::GeminiGenerator;
pub use service::{Operation, SnapError, SnapService};
