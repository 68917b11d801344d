/// Prompt analysis module: detectors, scoring, impact and report assembly.
pub mod analyzer;
pub mod autofix;
pub mod detectors;
pub mod impact;
pub mod rewrite;
pub mod scoring;
pub mod types;

pub use analyzer::PromptAnalyzer;
