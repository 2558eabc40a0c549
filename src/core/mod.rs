//! Core pipeline: classify, guess, resolve, format, apply.

pub mod applier;
pub mod classifier;
pub mod formatter;
pub mod guesser;
pub mod history;
pub mod orchestrator;
pub mod resolver;
