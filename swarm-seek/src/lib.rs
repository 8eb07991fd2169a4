//! # SwarmSeek
//!
//! **A particle swarm hunting for one cell on a 2D grid, redrawn in the terminal every iteration.**
//!
//! The algorithm lives in [`swarm_seek_core`]; this crate adds the run
//! configuration, the ASCII renderer and the driver loop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swarm_seek::{Simulation, SimulationConfig};
//!
//! fn main() -> swarm_seek::Result<()> {
//!     let config = SimulationConfig::builder()
//!         .grid(50, 20)
//!         .particle_count(20)
//!         .iterations(50)
//!         .build();
//!
//!     let mut sim = Simulation::new(config)?;
//!     let summary = sim.run(&mut std::io::stdout())?;
//!     println!("best fitness: {:.2}", summary.global_best_fitness);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `telemetry` (default): Per-iteration `tracing` events from the core crate
//!
//! ## Crate Structure
//!
//! - [`config`]: Run configuration (builder and JSON loading)
//! - [`render`]: Frame rendering to any `io::Write`
//! - [`Simulation`]: The fixed-iteration driver

#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

// Re-export commonly used core items at the top level
pub use swarm_seek_core::{
    engine::{self, CoefficientSource, FixedCoefficients, PsoParams, RngCoefficients},
    Grid, Particle, Position, Swarm, Velocity,
};

pub mod config;
pub mod render;

pub use config::{SimulationConfig, SimulationConfigBuilder};

/// Prelude module for convenient imports
///
/// ```rust
/// use swarm_seek::prelude::*;
/// ```
pub mod prelude {
    pub use swarm_seek_core::prelude::*;

    pub use crate::{RunSummary, SimError, Simulation, SimulationConfig};
}

/// Result type for SwarmSeek operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Error type for SwarmSeek runs
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Swarm or grid precondition violated
    #[error(transparent)]
    Core(#[from] swarm_seek_core::Error),
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Config file is not valid JSON for [`SimulationConfig`]
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// Goal lies outside the grid
    #[error("goal ({}, {}) is outside the {width}x{height} grid", goal.x, goal.y)]
    GoalOutOfBounds {
        goal: Position,
        width: u32,
        height: u32,
    },
    /// Any other config value out of range
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Writing a frame failed
    #[error("render failed: {0}")]
    Render(#[from] io::Error),
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Iterations executed
    pub iterations: usize,
    /// Best cell any particle reached
    pub global_best_position: Position,
    /// Fitness at that cell (0.0 means the goal was reached)
    pub global_best_fitness: f64,
}

/// A seeded, fixed-length PSO run over a single grid
pub struct Simulation<S = RngCoefficients<StdRng>> {
    config: SimulationConfig,
    grid: Grid,
    goal: Position,
    swarm: Swarm,
    source: S,
    iteration: usize,
}

impl Simulation {
    /// Validate `config` and place a random swarm.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.grid()?;
        let goal = config.goal()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut source = RngCoefficients::new(rng);
        let swarm = Swarm::random(&grid, config.particle_count, source.rng_mut())?;

        Ok(Self::from_parts(config, grid, goal, swarm, source))
    }
}

impl<S: CoefficientSource> Simulation<S> {
    /// Run a prepared swarm with an explicit coefficient source.
    pub fn with_swarm(config: SimulationConfig, swarm: Swarm, source: S) -> Result<Self> {
        config.validate()?;
        let grid = config.grid()?;
        let goal = config.goal()?;
        if swarm.positions().any(|p| !grid.contains(&p)) {
            return Err(swarm_seek_core::Error::OutOfBounds.into());
        }

        Ok(Self::from_parts(config, grid, goal, swarm, source))
    }

    fn from_parts(
        config: SimulationConfig,
        grid: Grid,
        goal: Position,
        swarm: Swarm,
        source: S,
    ) -> Self {
        info!(
            width = grid.width(),
            height = grid.height(),
            particles = swarm.len(),
            goal_x = goal.x,
            goal_y = goal.y,
            iterations = config.iterations,
            seed = ?config.seed,
            "simulation initialized"
        );

        Self {
            config,
            grid,
            goal,
            swarm,
            source,
            iteration: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Read-only view of the swarm
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Iterations completed so far
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// True once the configured iteration count has been reached
    pub fn is_finished(&self) -> bool {
        self.iteration >= self.config.iterations
    }

    /// Advance the swarm by one update without rendering.
    pub fn step(&mut self) {
        swarm_seek_core::engine::update_with(
            &mut self.swarm,
            &self.grid,
            self.goal,
            &self.config.params,
            &mut self.source,
        );
        self.iteration += 1;

        #[cfg(feature = "telemetry")]
        swarm_seek_core::telemetry::record_iteration(self.iteration, &self.swarm, &self.grid);
    }

    /// Step once and draw the resulting frame to `out`.
    pub fn step_and_render<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.step();
        render::render_frame(out, self.iteration, &self.grid, &self.swarm, self.goal)?;
        Ok(())
    }

    /// Run the remaining iterations, rendering each frame to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let delay = Duration::from_millis(self.config.frame_delay_ms);
        while !self.is_finished() {
            self.step_and_render(out)?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        let summary = self.summary();
        info!(
            iterations = summary.iterations,
            best_x = summary.global_best_position.x,
            best_y = summary.global_best_position.y,
            global_best_fitness = summary.global_best_fitness,
            "simulation finished"
        );
        Ok(summary)
    }

    /// Snapshot of the current best
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            iterations: self.iteration,
            global_best_position: self.swarm.global_best_position(),
            global_best_fitness: self.swarm.global_best_fitness(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = SimulationConfig::builder().seed(1234).iterations(20).build();

        let mut a = Simulation::new(config.clone()).unwrap();
        let mut b = Simulation::new(config).unwrap();
        let sa = a.run(&mut io::sink()).unwrap();
        let sb = b.run(&mut io::sink()).unwrap();

        assert_eq!(sa, sb);
        assert_eq!(a.swarm(), b.swarm());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SimulationConfig::builder().grid(5, 5).goal(Position::new(9, 9)).build();
        assert!(matches!(
            Simulation::new(config),
            Err(SimError::GoalOutOfBounds { .. })
        ));
    }

    #[test]
    fn with_swarm_rejects_swarm_from_larger_grid() {
        let big = Grid::new(100, 100).unwrap();
        let swarm = Swarm::from_positions(&big, [Position::new(80, 80)]).unwrap();
        let config = SimulationConfig::builder().grid(10, 10).build();

        let result = Simulation::with_swarm(config, swarm, FixedCoefficients::new(0.5, 0.5));
        assert!(matches!(
            result,
            Err(SimError::Core(swarm_seek_core::Error::OutOfBounds))
        ));
    }

    #[test]
    fn configured_params_reach_the_engine() {
        let config = SimulationConfig::builder()
            .grid(10, 10)
            .params(PsoParams {
                social: 0.4,
                ..PsoParams::default()
            })
            .iterations(1)
            .build();
        let grid = config.grid().unwrap();
        let swarm =
            Swarm::from_positions(&grid, [Position::new(5, 5), Position::new(0, 5)]).unwrap();

        let mut sim =
            Simulation::with_swarm(config, swarm, FixedCoefficients::new(0.0, 1.0)).unwrap();
        sim.step();

        // vx = 0.4 * 1.0 * (5 - 0) = 2.0; the default social term would give 7.5
        assert_eq!(sim.swarm().particles()[1].position(), Position::new(2, 5));
    }

    #[test]
    fn step_counts_iterations() {
        let config = SimulationConfig::builder().seed(5).iterations(3).build();
        let mut sim = Simulation::new(config).unwrap();

        assert!(!sim.is_finished());
        sim.step();
        sim.step();
        assert_eq!(sim.iteration(), 2);
        sim.step();
        assert!(sim.is_finished());
        assert_eq!(sim.summary().iterations, 3);
    }
}
