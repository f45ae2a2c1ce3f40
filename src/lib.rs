//! Predator & prey co-evolution.
//!
//! Two fixed-size populations are paired by index each generation: a
//! strictly faster predator captures its prey, which then evolves; otherwise
//! the predator evolves.

pub mod agent;
pub mod chart;
pub mod config;
pub mod error;
pub mod genetics;
pub mod random;
pub mod simulation;
pub mod simulation_stats;

pub use agent::{Agent, Predator, Prey, Species};
pub use error::{Result, SimulationError};
pub use genetics::Genetics;
pub use random::{ScriptedSource, TraitSource};
pub use simulation::{display_population, mean_fitness, GenerationReport, PairOutcome, Simulation};
pub use simulation_stats::{FitnessSample, SimulationStats};
