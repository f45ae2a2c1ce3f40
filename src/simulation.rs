//! The co-evolution engine: two equal-length populations paired by index.

use std::fmt::Write as _;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::agent::{Agent, Predator, Prey, Species};
use crate::config::POPULATION_SIZE;
use crate::error::{Result, SimulationError};
use crate::random::TraitSource;
use crate::simulation_stats::SimulationStats;

/// What happened to one predator/prey pair during a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// The predator was faster; the prey evolved.
    Captured,
    /// The prey kept pace; the predator evolved.
    Escaped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: u64,
    pub outcomes: Vec<PairOutcome>,
}

impl GenerationReport {
    pub fn captures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| **o == PairOutcome::Captured)
            .count()
    }

    pub fn escapes(&self) -> usize {
        self.outcomes.len() - self.captures()
    }
}

pub struct Simulation<R: TraitSource> {
    predators: Vec<Agent<Predator>>,
    preys: Vec<Agent<Prey>>,
    rng: R,
    stats: SimulationStats,
}

impl Simulation<ChaCha8Rng> {
    /// Reproducible simulation driven by a seeded ChaCha8 generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        let seed = rand::rng().random();
        Self::seeded(seed)
    }
}

impl<R: TraitSource> Simulation<R> {
    /// Creates a simulation with freshly randomized populations.
    pub fn new(rng: R) -> Self {
        let mut sim = Simulation {
            predators: Vec::with_capacity(POPULATION_SIZE),
            preys: Vec::with_capacity(POPULATION_SIZE),
            rng,
            stats: SimulationStats::default(),
        };
        sim.initialize_populations();
        sim
    }

    /// Starts from caller-provided populations, which must pair up exactly.
    pub fn from_populations(
        predators: Vec<Agent<Predator>>,
        preys: Vec<Agent<Prey>>,
        rng: R,
    ) -> Result<Self> {
        if predators.len() != preys.len() {
            return Err(SimulationError::PopulationMismatch {
                predators: predators.len(),
                preys: preys.len(),
            });
        }
        let mut sim = Simulation {
            predators,
            preys,
            rng,
            stats: SimulationStats::default(),
        };
        sim.sample_fitness();
        Ok(sim)
    }

    /// Replaces both populations with fresh random agents and resets the
    /// statistics.
    pub fn initialize_populations(&mut self) {
        self.predators.clear();
        self.preys.clear();
        for i in 1..=POPULATION_SIZE {
            self.predators
                .push(Agent::random(format!("Predator {i}"), &mut self.rng));
            self.preys.push(Agent::random(format!("Prey {i}"), &mut self.rng));
        }
        self.stats = SimulationStats::default();
        self.sample_fitness();
        info!(
            population = POPULATION_SIZE,
            predator_mean = mean_fitness(&self.predators),
            prey_mean = mean_fitness(&self.preys),
            "populations initialized"
        );
    }

    /// Pairs predators and preys by index; exactly one member of each pair
    /// evolves.
    pub fn simulate_generation(&mut self) -> GenerationReport {
        debug_assert_eq!(
            self.predators.len(),
            self.preys.len(),
            "populations must pair up"
        );

        let rng = &mut self.rng;
        let outcomes: Vec<PairOutcome> = self
            .predators
            .iter_mut()
            .zip(self.preys.iter_mut())
            .map(|(predator, prey)| {
                if predator.capture(prey) {
                    prey.evolve(&mut *rng);
                    debug!(predator = %predator.name, prey = %prey.name, "captured");
                    PairOutcome::Captured
                } else {
                    predator.evolve(&mut *rng);
                    debug!(predator = %predator.name, prey = %prey.name, "escaped");
                    PairOutcome::Escaped
                }
            })
            .collect();

        let report = GenerationReport {
            generation: self.stats.generation + 1,
            outcomes,
        };
        self.stats
            .record_generation(report.captures(), report.escapes());
        self.sample_fitness();
        info!(
            generation = report.generation,
            captures = report.captures(),
            escapes = report.escapes(),
            "generation simulated"
        );
        report
    }

    pub fn predators(&self) -> &[Agent<Predator>] {
        &self.predators
    }

    pub fn preys(&self) -> &[Agent<Prey>] {
        &self.preys
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn generation(&self) -> u64 {
        self.stats.generation
    }

    fn sample_fitness(&mut self) {
        let predator_mean = mean_fitness(&self.predators);
        let prey_mean = mean_fitness(&self.preys);
        self.stats.record_fitness(predator_mean, prey_mean);
    }
}

/// One display line per agent, each terminated by a newline.
pub fn display_population<S: Species>(population: &[Agent<S>]) -> String {
    let mut out = String::new();
    for agent in population {
        let _ = writeln!(out, "{agent}");
    }
    out
}

pub fn mean_fitness<S: Species>(population: &[Agent<S>]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(Agent::fitness).sum::<f64>() / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{INITIAL_INTELLIGENCE, INITIAL_SPEED, INITIAL_STRENGTH};
    use crate::genetics::Genetics;
    use crate::random::ScriptedSource;

    fn pair_population(speeds: &[(u32, u32)]) -> (Vec<Agent<Predator>>, Vec<Agent<Prey>>) {
        let predators = speeds
            .iter()
            .enumerate()
            .map(|(i, (s, _))| Agent::new(format!("Predator {}", i + 1), Genetics::new(*s, 5, 5)))
            .collect();
        let preys = speeds
            .iter()
            .enumerate()
            .map(|(i, (_, s))| Agent::new(format!("Prey {}", i + 1), Genetics::new(*s, 5, 5)))
            .collect();
        (predators, preys)
    }

    #[test]
    fn test_initialize_populations_bounds_and_names() {
        let sim = Simulation::seeded(42);
        assert_eq!(sim.predators().len(), POPULATION_SIZE);
        assert_eq!(sim.preys().len(), POPULATION_SIZE);
        for (i, p) in sim.predators().iter().enumerate() {
            assert_eq!(p.name, format!("Predator {}", i + 1));
            assert!(INITIAL_SPEED.contains(&p.speed()));
            assert!(INITIAL_STRENGTH.contains(&p.strength()));
            assert!(INITIAL_INTELLIGENCE.contains(&p.intelligence()));
        }
        for (i, p) in sim.preys().iter().enumerate() {
            assert_eq!(p.name, format!("Prey {}", i + 1));
            assert!(INITIAL_SPEED.contains(&p.speed()));
        }
    }

    #[test]
    fn test_initialize_draw_order() {
        // predator traits, then prey traits, per index
        let script: Vec<u32> = (1..=60).collect();
        let sim = Simulation::new(ScriptedSource::new(script));
        assert_eq!(sim.predators()[0].genetics, Genetics::new(1, 2, 3));
        assert_eq!(sim.preys()[0].genetics, Genetics::new(4, 5, 6));
        assert_eq!(sim.predators()[1].genetics, Genetics::new(7, 8, 9));
        // strength is clamped to its initial range
        assert_eq!(sim.preys()[1].genetics, Genetics::new(10, 10, 10));
    }

    #[test]
    fn test_capture_evolves_prey_only() {
        let (predators, preys) = pair_population(&[(5, 3)]);
        let mut sim =
            Simulation::from_populations(predators, preys, ScriptedSource::new([2, 1, 1])).unwrap();
        let report = sim.simulate_generation();
        assert_eq!(report.outcomes, vec![PairOutcome::Captured]);
        assert_eq!(sim.predators()[0].genetics, Genetics::new(5, 5, 5));
        assert_eq!(sim.preys()[0].genetics, Genetics::new(5, 6, 6));
    }

    #[test]
    fn test_tie_evolves_predator() {
        let (predators, preys) = pair_population(&[(10, 10)]);
        let mut sim =
            Simulation::from_populations(predators, preys, ScriptedSource::new([1, 1, 1])).unwrap();
        let report = sim.simulate_generation();
        assert_eq!(report.outcomes, vec![PairOutcome::Escaped]);
        assert_eq!(sim.predators()[0].genetics, Genetics::new(11, 6, 6));
        assert_eq!(sim.preys()[0].genetics, Genetics::new(10, 5, 5));
    }

    #[test]
    fn test_exactly_one_evolve_per_pair() {
        let mut sim = Simulation::seeded(9);
        for _ in 0..20 {
            let predators_before = sim.predators().to_vec();
            let preys_before = sim.preys().to_vec();
            let report = sim.simulate_generation();
            assert_eq!(report.outcomes.len(), POPULATION_SIZE);
            for i in 0..POPULATION_SIZE {
                let predator_changed = sim.predators()[i] != predators_before[i];
                let prey_changed = sim.preys()[i] != preys_before[i];
                assert!(predator_changed ^ prey_changed);
                assert_eq!(
                    prey_changed,
                    report.outcomes[i] == PairOutcome::Captured
                );
            }
        }
    }

    #[test]
    fn test_from_populations_rejects_mismatch() {
        let (predators, mut preys) = pair_population(&[(1, 1), (2, 2)]);
        preys.pop();
        let err = Simulation::from_populations(predators, preys, ScriptedSource::default())
            .err()
            .unwrap();
        assert_eq!(
            err,
            SimulationError::PopulationMismatch {
                predators: 2,
                preys: 1
            }
        );
    }

    #[test]
    fn test_generation_counter_and_reset() {
        let mut sim = Simulation::seeded(1);
        sim.simulate_generation();
        sim.simulate_generation();
        assert_eq!(sim.generation(), 2);
        let stats = sim.stats();
        assert_eq!(stats.total_captures + stats.total_escapes, 2 * POPULATION_SIZE);
        assert_eq!(stats.fitness_history.len(), 3);

        sim.initialize_populations();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.stats().fitness_history.len(), 1);
    }

    #[test]
    fn test_display_population() {
        let empty: Vec<Agent<Prey>> = Vec::new();
        assert_eq!(display_population(&empty), "");

        let (_, preys) = pair_population(&[(1, 3), (1, 4)]);
        assert_eq!(
            display_population(&preys),
            "Prey 1 (Prey) - Speed: 3, Strength: 5, Intelligence: 5\n\
             Prey 2 (Prey) - Speed: 4, Strength: 5, Intelligence: 5\n"
        );
    }

    #[test]
    fn test_mean_fitness() {
        let (predators, _) = pair_population(&[(10, 0), (20, 0)]);
        // 0.4*15 + 0.4*5 + 0.2*5
        assert!((mean_fitness(&predators) - 9.0).abs() < 1e-9);
        assert_eq!(mean_fitness::<Prey>(&[]), 0.0);
    }
}
