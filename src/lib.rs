// Reusable library API — visible to the CLI and to any embedding frontend
pub mod direction;
pub mod errors;
pub mod generator;
pub mod letters;
pub mod log;
pub mod puzzle;
pub mod render;
pub mod words;
