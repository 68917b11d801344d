/// Greenprompt library - exposes modules for testing and external use.
pub mod analyzers;
pub mod error;
pub mod metrics;
pub mod output;
pub mod rules;
