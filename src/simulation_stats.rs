use crate::config::HISTORY_LIMIT;

/// Mean fitness of each population at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessSample {
    pub generation: u64,
    pub predator_mean: f64,
    pub prey_mean: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimulationStats {
    pub generation: u64,
    pub total_captures: usize,
    pub total_escapes: usize,
    pub fitness_history: Vec<FitnessSample>,
}

impl SimulationStats {
    pub fn record_generation(&mut self, captures: usize, escapes: usize) {
        self.generation += 1;
        self.total_captures += captures;
        self.total_escapes += escapes;
    }

    pub fn record_fitness(&mut self, predator_mean: f64, prey_mean: f64) {
        self.fitness_history.push(FitnessSample {
            generation: self.generation,
            predator_mean,
            prey_mean,
        });
        // Keep history buffer manageable
        if self.fitness_history.len() > HISTORY_LIMIT {
            self.fitness_history.remove(0);
        }
    }

    pub fn latest(&self) -> Option<&FitnessSample> {
        self.fitness_history.last()
    }
}
