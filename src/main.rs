use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use piston_window::*;
use predator_prey::{chart, display_population, Simulation};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

const WINDOW_WIDTH: f64 = 1000.0;
const WINDOW_HEIGHT: f64 = 600.0;
const LISTING_WIDTH: f64 = 400.0;
const CONTROLS_HEIGHT: f64 = 50.0; // Button strip along the bottom edge
const CHART_HEIGHT: f64 = WINDOW_HEIGHT - CONTROLS_HEIGHT;
const FONT_SIZE: u32 = 13;
const LINE_HEIGHT: f64 = 18.0;
const BACKGROUND: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
const TEXT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Parser)]
#[command(name = "predator-prey")]
#[command(version)]
#[command(about = "Predator & prey co-evolution simulation")]
struct Cli {
    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every pair outcome
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the simulation window (default)
    Gui {
        /// Font used for listings and labels
        #[arg(long, default_value = "assets/FiraSans-Regular.ttf")]
        font: PathBuf,
    },

    /// Run generations without a window and print the populations
    Run {
        /// Number of generations to simulate
        #[arg(short, long, default_value = "10")]
        generations: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Reset,
    Advance,
}

struct ControlButton {
    label: &'static str,
    action: Action,
    rect: [f64; 4],
}

impl ControlButton {
    fn contains(&self, [x, y]: [f64; 2]) -> bool {
        let [bx, by, bw, bh] = self.rect;
        x >= bx && x <= bx + bw && y >= by && y <= by + bh
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let simulation = match cli.seed {
        Some(seed) => {
            info!(seed, "seeded simulation");
            Simulation::seeded(seed)
        }
        None => Simulation::from_entropy(),
    };

    match cli.command {
        Some(Commands::Run { generations }) => run_headless(simulation, generations),
        Some(Commands::Gui { font }) => run_window(simulation, font),
        None => run_window(simulation, PathBuf::from("assets/FiraSans-Regular.ttf")),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("predator_prey={default_level}"))
            }),
        )
        .init();
}

fn window_title(simulation: &Simulation<ChaCha8Rng>) -> String {
    format!("Co-Evolution Simulation - Generation {}", simulation.generation())
}

fn listings(simulation: &Simulation<ChaCha8Rng>) -> (String, String) {
    (
        format!("Predators:\n{}", display_population(simulation.predators())),
        format!("Preys:\n{}", display_population(simulation.preys())),
    )
}

fn apply(simulation: &mut Simulation<ChaCha8Rng>, action: Action) {
    match action {
        Action::Advance => {
            simulation.simulate_generation();
        }
        Action::Reset => simulation.initialize_populations(),
    }
    let (predators, preys) = listings(simulation);
    debug!("\n{predators}{preys}");
}

fn run_headless(mut simulation: Simulation<ChaCha8Rng>, generations: u64) -> Result<()> {
    let (predators, preys) = listings(&simulation);
    println!("Generation 0\n{predators}{preys}");

    for _ in 0..generations {
        let report = simulation.simulate_generation();
        let (predators, preys) = listings(&simulation);
        println!(
            "Generation {} ({} captured, {} escaped)\n{predators}{preys}",
            report.generation,
            report.captures(),
            report.escapes()
        );
    }

    let stats = simulation.stats();
    println!(
        "Totals after {} generations: {} captures, {} escapes",
        stats.generation, stats.total_captures, stats.total_escapes
    );
    if let Some(sample) = stats.latest() {
        println!(
            "Mean fitness: predators {:.2}, preys {:.2}",
            sample.predator_mean, sample.prey_mean
        );
    }
    Ok(())
}

fn run_window(mut simulation: Simulation<ChaCha8Rng>, font: PathBuf) -> Result<()> {
    let mut window: PistonWindow =
        WindowSettings::new(window_title(&simulation), [WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32])
            .exit_on_esc(true)
            .build()
            .map_err(|e| anyhow!("failed to open window: {e}"))?;

    // Load font
    let mut glyphs = if font.exists() {
        match window.load_font(&font) {
            Ok(glyphs) => Some(glyphs),
            Err(err) => {
                warn!(path = %font.display(), %err, "could not load font, listings go to the log");
                None
            }
        }
    } else {
        warn!(path = %font.display(), "font file not found, listings go to the log");
        None
    };
    if glyphs.is_none() {
        let (predators, preys) = listings(&simulation);
        info!("\n{predators}{preys}");
    }

    let controls = [
        ControlButton {
            label: "Reset",
            action: Action::Reset,
            rect: [10.0, CHART_HEIGHT + 10.0, 120.0, 30.0],
        },
        ControlButton {
            label: "Simulate Generation",
            action: Action::Advance,
            rect: [140.0, CHART_HEIGHT + 10.0, 200.0, 30.0],
        },
    ];
    let mut cursor = [0.0, 0.0];

    while let Some(e) = window.next() {
        if let Some(pos) = e.mouse_cursor_args() {
            cursor = pos;
        }

        if let Some(button) = e.press_args() {
            let action = match button {
                Button::Keyboard(Key::Space) | Button::Keyboard(Key::G) => Some(Action::Advance),
                Button::Keyboard(Key::R) => Some(Action::Reset),
                Button::Mouse(MouseButton::Left) => controls
                    .iter()
                    .find(|c| c.contains(cursor))
                    .map(|c| c.action),
                _ => None,
            };
            if let Some(action) = action {
                apply(&mut simulation, action);
                window.set_title(window_title(&simulation));
                if glyphs.is_none() {
                    let (predators, preys) = listings(&simulation);
                    info!("\n{predators}{preys}");
                }
            }
        }

        let bars = chart::layout(
            simulation.predators(),
            simulation.preys(),
            WINDOW_WIDTH - LISTING_WIDTH,
            CHART_HEIGHT,
        );
        let (predator_text, prey_text) = listings(&simulation);

        window.draw_2d(&e, |c, g, device| {
            clear(BACKGROUND, g);

            // Controls strip
            rectangle(
                [0.85, 0.85, 0.85, 1.0],
                [0.0, CHART_HEIGHT, WINDOW_WIDTH, CONTROLS_HEIGHT],
                c.transform,
                g,
            );
            for control in &controls {
                let hovered = control.contains(cursor);
                let fill = if hovered { [0.75, 0.8, 0.9, 1.0] } else { [1.0, 1.0, 1.0, 1.0] };
                rectangle(fill, control.rect, c.transform, g);
                Rectangle::new_border(TEXT_COLOR, 1.0).draw(
                    control.rect,
                    &c.draw_state,
                    c.transform,
                    g,
                );
            }

            // Bar chart to the right of the listings
            let chart_transform = c.transform.trans(LISTING_WIDTH, 0.0);
            for bar in &bars {
                rectangle(bar.color, bar.rect(), chart_transform, g);
            }

            if let Some(ref mut glyphs) = glyphs {
                let half = CHART_HEIGHT / 2.0;
                draw_lines(&predator_text, [10.0, 20.0], glyphs, &c, g);
                draw_lines(&prey_text, [10.0, half + 20.0], glyphs, &c, g);

                for control in &controls {
                    let [x, y, _, h] = control.rect;
                    draw_lines(control.label, [x + 10.0, y + h - 10.0], glyphs, &c, g);
                }
                for bar in &bars {
                    let [lx, ly] = bar.label_anchor;
                    draw_lines(&bar.label, [LISTING_WIDTH + lx, ly.max(LINE_HEIGHT)], glyphs, &c, g);
                }

                glyphs.factory.encoder.flush(device);
            }
        });
    }

    info!(generation = simulation.generation(), "window closed");
    Ok(())
}

fn draw_lines(content: &str, [x, y]: [f64; 2], glyphs: &mut Glyphs, c: &Context, g: &mut G2d) {
    for (i, line) in content.lines().enumerate() {
        let transform = c.transform.trans(x, y + i as f64 * LINE_HEIGHT);
        // A glyph that fails to rasterize only costs this frame's text.
        text::Text::new_color(TEXT_COLOR, FONT_SIZE)
            .draw(line, glyphs, &c.draw_state, transform, g)
            .ok();
    }
}
