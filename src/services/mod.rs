pub mod content;
pub mod generation;

pub use content::ContentService;
pub use generation::{GenerationRequest, TextGenerator};
