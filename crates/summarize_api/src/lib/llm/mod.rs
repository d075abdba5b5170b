pub mod engine;
pub mod huggingface;
