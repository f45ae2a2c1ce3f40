//! Fixed simulation constants.

use std::ops::RangeInclusive;

/// Number of agents in each population.
pub const POPULATION_SIZE: usize = 5;

pub const INITIAL_SPEED: RangeInclusive<u32> = 1..=20;
pub const INITIAL_STRENGTH: RangeInclusive<u32> = 1..=10;
pub const INITIAL_INTELLIGENCE: RangeInclusive<u32> = 1..=10;

/// Per-evolve trait increments.
pub const SPEED_STEP: RangeInclusive<u32> = 1..=3;
pub const STRENGTH_STEP: RangeInclusive<u32> = 1..=2;
pub const INTELLIGENCE_STEP: RangeInclusive<u32> = 1..=2;

/// Fitness weights as (speed, strength, intelligence).
pub const PREDATOR_WEIGHTS: [f64; 3] = [0.4, 0.4, 0.2];
pub const PREY_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Fitness history entries kept before the oldest is dropped.
pub const HISTORY_LIMIT: usize = 1000;

/// Pixels of bar height per unit of fitness.
pub const FITNESS_BAR_SCALE: f64 = 10.0;
