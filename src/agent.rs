//! Predator and prey agents.
//!
//! Both species share one record type, [`Agent`], parameterized by a
//! zero-sized species marker that supplies the fitness weights and the
//! display label. Capture is only defined for `Agent<Predator>`.

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::config::{PREDATOR_WEIGHTS, PREY_WEIGHTS};
use crate::genetics::Genetics;
use crate::random::TraitSource;

pub trait Species: fmt::Debug + Clone + Copy + PartialEq + Eq {
    /// Fitness weights as (speed, strength, intelligence).
    const WEIGHTS: [f64; 3];
    const LABEL: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prey;

impl Species for Predator {
    const WEIGHTS: [f64; 3] = PREDATOR_WEIGHTS;
    const LABEL: &'static str = "Predator";
}

impl Species for Prey {
    const WEIGHTS: [f64; 3] = PREY_WEIGHTS;
    const LABEL: &'static str = "Prey";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent<S: Species> {
    pub name: String,
    pub genetics: Genetics,
    species: PhantomData<S>,
}

impl<S: Species> Agent<S> {
    pub fn new(name: impl Into<String>, genetics: Genetics) -> Self {
        Agent {
            name: name.into(),
            genetics,
            species: PhantomData,
        }
    }

    pub fn random(name: impl Into<String>, rng: &mut impl TraitSource) -> Self {
        Self::new(name, Genetics::new_random(rng))
    }

    pub fn label(&self) -> &'static str {
        S::LABEL
    }

    pub fn speed(&self) -> u32 {
        self.genetics.speed
    }

    pub fn strength(&self) -> u32 {
        self.genetics.strength
    }

    pub fn intelligence(&self) -> u32 {
        self.genetics.intelligence
    }

    /// Recomputed from the current traits on every call.
    pub fn fitness(&self) -> f64 {
        self.genetics.weighted(S::WEIGHTS)
    }

    pub fn evolve(&mut self, rng: &mut impl TraitSource) {
        let before = self.genetics;
        self.genetics.mutate(rng);
        trace!(
            agent = %self.name,
            ?before,
            after = ?self.genetics,
            "evolved"
        );
    }
}

impl Agent<Predator> {
    /// Strictly faster predators capture; ties go to the prey.
    pub fn capture(&self, prey: &Agent<Prey>) -> bool {
        self.speed() > prey.speed()
    }
}

impl<S: Species> fmt::Display for Agent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Speed: {}, Strength: {}, Intelligence: {}",
            self.name,
            S::LABEL,
            self.speed(),
            self.strength(),
            self.intelligence()
        )
    }
}
