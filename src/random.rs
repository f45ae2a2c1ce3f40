//! Uniform integer source used for trait initialization and mutation.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::Rng;

/// Draws integers uniformly from a closed range.
pub trait TraitSource {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<R: Rng + ?Sized> TraitSource for R {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.random_range(range)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out.
///
/// Values outside the requested range are clamped into it, and an empty
/// script always yields the lower bound. Handy for replaying a known
/// scenario exactly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        ScriptedSource {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl TraitSource for ScriptedSource {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.draws += 1;
        let (lo, hi) = (*range.start(), *range.end());
        match self.values.pop_front() {
            Some(value) => {
                self.values.push_back(value);
                value.clamp(lo, hi)
            }
            None => lo,
        }
    }
}
