mod client;
mod extract;
mod types;

pub use client::{API_KEY_HEADER, BillExtractor, GeminiClient};
pub use extract::extract_json;
pub use types::*;
