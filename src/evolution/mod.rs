//! # Evolution
//!
//! The [`EvolutionEngine`] runs the generation cycle. [`EvolutionOptions`] carries
//! the run-wide settings, and an [`EventHandler`] such as [`EvolutionTracker`]
//! observes the run and answers [`EvolutionProgress`] queries for strategies that
//! depend on the run's history.

pub mod builder;
pub mod engine;
pub mod events;
pub mod options;

pub use builder::EvolutionEngineBuilder;
pub use engine::{EvolutionEngine, EvolutionResult};
pub use events::{EventHandler, EvolutionProgress, EvolutionTracker};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
