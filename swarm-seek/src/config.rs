//! Simulation configuration
//!
//! Every field has a default matching the reference run: a 50x20 grid, 20
//! particles, goal at the centre, 50 iterations.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use swarm_seek_core::{Grid, Position, PsoParams};

use crate::{Result, SimError};

/// Configuration for a single simulation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Number of particles in the swarm
    pub particle_count: usize,
    /// Goal cell; the grid centre when unset
    pub goal: Option<Position>,
    /// Number of update/render iterations
    pub iterations: usize,
    /// RNG seed for a reproducible run
    pub seed: Option<u64>,
    /// Pause between frames, in milliseconds
    pub frame_delay_ms: u64,
    /// PSO coefficients
    pub params: PsoParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 20,
            particle_count: 20,
            goal: None,
            iterations: 50,
            seed: None,
            frame_delay_ms: 0,
            params: PsoParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new builder
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Grid built from `width` x `height`
    pub fn grid(&self) -> Result<Grid> {
        Ok(Grid::new(self.width, self.height)?)
    }

    /// The configured goal, or the grid centre
    pub fn goal(&self) -> Result<Position> {
        let grid = self.grid()?;
        Ok(self.goal.unwrap_or_else(|| grid.center()))
    }

    /// Check every precondition the run depends on.
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid()?;
        if self.particle_count == 0 {
            return Err(swarm_seek_core::Error::EmptySwarm.into());
        }
        if self.iterations == 0 {
            return Err(SimError::InvalidConfig("iterations must be non-zero"));
        }
        if let Some(goal) = self.goal {
            if !grid.contains(&goal) {
                return Err(SimError::GoalOutOfBounds {
                    goal,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }
        let PsoParams {
            inertia,
            cognitive,
            social,
        } = self.params;
        if !(inertia.is_finite() && cognitive.is_finite() && social.is_finite()) {
            return Err(SimError::InvalidConfig("PSO coefficients must be finite"));
        }
        Ok(())
    }
}

/// Builder for SimulationConfig
#[derive(Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions
    pub fn grid(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set the number of particles
    pub fn particle_count(mut self, count: usize) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Set the goal cell
    pub fn goal(mut self, goal: Position) -> Self {
        self.config.goal = Some(goal);
        self
    }

    /// Set the number of iterations
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Seed the RNG for a reproducible run
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the pause between frames
    pub fn frame_delay_ms(mut self, delay: u64) -> Self {
        self.config.frame_delay_ms = delay;
        self
    }

    /// Override the PSO coefficients
    pub fn params(mut self, params: PsoParams) -> Self {
        self.config.params = params;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SimulationConfig {
        self.config
    }
}
