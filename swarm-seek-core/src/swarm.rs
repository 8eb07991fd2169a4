//! Swarm model
//!
//! Pure storage: particles plus the swarm-wide best. All mutation goes
//! through [`crate::engine::update`]; callers outside the crate get read-only
//! accessors.

use rand::Rng;

use crate::geometry::{Grid, Position, Velocity};
use crate::{Error, Result};

/// Particle state in PSO
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position
    pub(crate) position: Position,
    /// Current velocity
    pub(crate) velocity: Velocity,
    /// Personal best position
    pub(crate) best_position: Position,
    /// Fitness at the most recent evaluation
    pub(crate) fitness: f64,
    /// Personal best fitness
    pub(crate) best_fitness: f64,
}

impl Particle {
    /// A particle at rest at `position`, not yet evaluated
    pub fn at(position: Position) -> Self {
        Self {
            position,
            velocity: Velocity::ZERO,
            best_position: position,
            fitness: f64::NEG_INFINITY,
            best_fitness: f64::NEG_INFINITY,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn best_position(&self) -> Position {
        self.best_position
    }

    /// `f64::NEG_INFINITY` until the first update
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }
}

/// An ordered, fixed-size swarm and its global best
#[derive(Debug, Clone, PartialEq)]
pub struct Swarm {
    pub(crate) particles: Vec<Particle>,
    pub(crate) global_best_position: Position,
    pub(crate) global_best_fitness: f64,
}

impl Swarm {
    /// Build a swarm from explicit starting cells.
    ///
    /// The global best position starts at the first particle's cell with
    /// fitness `f64::NEG_INFINITY`.
    pub fn from_positions<I>(grid: &Grid, positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let particles = positions
            .into_iter()
            .map(|p| {
                if grid.contains(&p) {
                    Ok(Particle::at(p))
                } else {
                    Err(Error::OutOfBounds)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let global_best_position = particles
            .first()
            .map(|p| p.position)
            .ok_or(Error::EmptySwarm)?;

        Ok(Self {
            particles,
            global_best_position,
            global_best_fitness: f64::NEG_INFINITY,
        })
    }

    /// Build a swarm with uniformly random starting cells.
    pub fn random<R: Rng + ?Sized>(grid: &Grid, particle_count: usize, rng: &mut R) -> Result<Self> {
        if particle_count == 0 {
            return Err(Error::EmptySwarm);
        }
        let positions = (0..particle_count)
            .map(|_| Position {
                x: rng.gen_range(0..=grid.max_x()),
                y: rng.gen_range(0..=grid.max_y()),
            })
            .collect::<Vec<_>>();
        Self::from_positions(grid, positions)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false for a constructed swarm
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn global_best_position(&self) -> Position {
        self.global_best_position
    }

    /// `f64::NEG_INFINITY` until the first update
    pub fn global_best_fitness(&self) -> f64 {
        self.global_best_fitness
    }

    /// Current cell of every particle, in swarm order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.particles.iter().map(|p| p.position)
    }
}

/// Create a swarm of `particle_count` particles on a `width` x `height` grid.
///
/// Positions are drawn independently and uniformly; velocities start at zero.
pub fn initialize<R: Rng + ?Sized>(
    particle_count: usize,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<Swarm> {
    let grid = Grid::new(width, height)?;
    Swarm::random(&grid, particle_count, rng)
}
