//! Layout of the fitness bar chart.
//!
//! Each predator/prey pair gets one slot of the panel: the predator bar in
//! the left half and the prey bar in the right half, both standing on the
//! bottom edge with a height proportional to fitness.

use crate::agent::{Agent, Predator, Prey, Species};
use crate::config::FITNESS_BAR_SCALE;

pub const PREDATOR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const PREY_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: [f32; 4],
    pub label: String,
    /// Baseline of the name drawn above the bar.
    pub label_anchor: [f64; 2],
}

impl Bar {
    pub fn rect(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

pub fn layout(
    predators: &[Agent<Predator>],
    preys: &[Agent<Prey>],
    width: f64,
    height: f64,
) -> Vec<Bar> {
    let slots = predators.len().max(preys.len());
    if slots == 0 || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let slot_width = (width / slots as f64).floor();
    let half = (slot_width / 2.0).floor();
    let mut bars = Vec::with_capacity(predators.len() + preys.len());

    for (i, predator) in predators.iter().enumerate() {
        let x = i as f64 * slot_width;
        bars.push(bar_for(predator, x, half, height, PREDATOR_COLOR));
    }
    for (i, prey) in preys.iter().enumerate() {
        let x = i as f64 * slot_width + half;
        bars.push(bar_for(prey, x, half, height, PREY_COLOR));
    }
    bars
}

fn bar_for<S: Species>(agent: &Agent<S>, x: f64, width: f64, panel_height: f64, color: [f32; 4]) -> Bar {
    let bar_height = (agent.fitness() * FITNESS_BAR_SCALE).floor().clamp(0.0, panel_height);
    let y = panel_height - bar_height;
    Bar {
        x,
        y,
        width,
        height: bar_height,
        color,
        label: agent.name.clone(),
        label_anchor: [x + 5.0, y - 5.0],
    }
}
