use crate::config::{
    INITIAL_INTELLIGENCE, INITIAL_SPEED, INITIAL_STRENGTH, INTELLIGENCE_STEP, SPEED_STEP,
    STRENGTH_STEP,
};
use crate::random::TraitSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genetics {
    pub speed: u32,
    pub strength: u32,
    pub intelligence: u32,
}

impl Genetics {
    pub fn new(speed: u32, strength: u32, intelligence: u32) -> Self {
        Genetics {
            speed,
            strength,
            intelligence,
        }
    }

    /// Draws speed, strength and intelligence, in that order.
    pub fn new_random(rng: &mut impl TraitSource) -> Self {
        Genetics {
            speed: rng.draw(INITIAL_SPEED),
            strength: rng.draw(INITIAL_STRENGTH),
            intelligence: rng.draw(INITIAL_INTELLIGENCE),
        }
    }

    /// Weighted sum over (speed, strength, intelligence).
    pub fn weighted(&self, weights: [f64; 3]) -> f64 {
        weights[0] * self.speed as f64
            + weights[1] * self.strength as f64
            + weights[2] * self.intelligence as f64
    }

    pub fn mutate(&mut self, rng: &mut impl TraitSource) {
        self.speed = self.speed.saturating_add(rng.draw(SPEED_STEP));
        self.strength = self.strength.saturating_add(rng.draw(STRENGTH_STEP));
        self.intelligence = self.intelligence.saturating_add(rng.draw(INTELLIGENCE_STEP));
    }
}
