//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("population size mismatch: {predators} predators vs {preys} preys")]
    PopulationMismatch { predators: usize, preys: usize },
}
