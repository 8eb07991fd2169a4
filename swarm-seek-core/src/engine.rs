//! PSO update engine
//!
//! Advances every particle by one discrete step:
//!
//! ```text
//! v = w·v + c₁·r₁·(pbest - x) + c₂·r₂·(gbest - x)
//! x = clamp(x + trunc(v))
//! ```
//!
//! Particles are processed strictly in swarm order, and a global-best
//! improvement by particle `k` is visible to particles `k+1..` within the same
//! call. One `(r₁, r₂)` pair is drawn per particle and shared by both axes.

use rand::Rng;

use crate::geometry::{Grid, Position, Velocity};
use crate::swarm::{Particle, Swarm};

/// PSO coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PsoParams {
    /// Inertia weight (momentum)
    pub inertia: f64,
    /// Cognitive coefficient (attraction to personal best)
    pub cognitive: f64,
    /// Social coefficient (attraction to global best)
    pub social: f64,
}

impl Default for PsoParams {
    fn default() -> Self {
        Self {
            inertia: 0.5,
            cognitive: 1.5,
            social: 1.5,
        }
    }
}

/// Supplies the two uniform random coefficients for one particle step.
pub trait CoefficientSource {
    /// Returns `(r1, r2)`, each in `[0, 1)`.
    fn draw(&mut self) -> (f64, f64);
}

/// Coefficients drawn from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngCoefficients<R> {
    rng: R,
}

impl<R: Rng> RngCoefficients<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Borrow the underlying generator, e.g. to seed a swarm from it.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> CoefficientSource for RngCoefficients<R> {
    fn draw(&mut self) -> (f64, f64) {
        // Standard f64 sampling is uniform over [0, 1)
        let r1: f64 = self.rng.gen();
        let r2: f64 = self.rng.gen();
        (r1, r2)
    }
}

/// The same coefficients on every draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCoefficients {
    pub r1: f64,
    pub r2: f64,
}

impl FixedCoefficients {
    pub const fn new(r1: f64, r2: f64) -> Self {
        Self { r1, r2 }
    }
}

impl CoefficientSource for FixedCoefficients {
    fn draw(&mut self) -> (f64, f64) {
        (self.r1, self.r2)
    }
}

impl<S: CoefficientSource + ?Sized> CoefficientSource for &mut S {
    fn draw(&mut self) -> (f64, f64) {
        (**self).draw()
    }
}

/// Negative Euclidean distance to `goal`; 0.0 is optimal.
pub fn fitness(position: &Position, goal: &Position) -> f64 {
    -position.distance_to(goal)
}

/// Advance the swarm one iteration with the default coefficients.
pub fn update<S: CoefficientSource + ?Sized>(
    swarm: &mut Swarm,
    grid: &Grid,
    goal: Position,
    source: &mut S,
) {
    update_with(swarm, grid, goal, &PsoParams::default(), source);
}

/// Advance the swarm one iteration.
pub fn update_with<S: CoefficientSource + ?Sized>(
    swarm: &mut Swarm,
    grid: &Grid,
    goal: Position,
    params: &PsoParams,
    source: &mut S,
) {
    let Swarm {
        particles,
        global_best_position,
        global_best_fitness,
    } = swarm;

    for particle in particles.iter_mut() {
        particle.fitness = fitness(&particle.position, &goal);

        if particle.fitness > particle.best_fitness {
            particle.best_fitness = particle.fitness;
            particle.best_position = particle.position;
        }

        if particle.fitness > *global_best_fitness {
            *global_best_fitness = particle.fitness;
            *global_best_position = particle.position;

            #[cfg(feature = "telemetry")]
            tracing::trace!(
                x = particle.position.x,
                y = particle.position.y,
                fitness = particle.fitness,
                "global best improved"
            );
        }

        let (r1, r2) = source.draw();
        step(particle, *global_best_position, grid, params, r1, r2);
    }
}

/// Velocity, position and clamping for a single evaluated particle
fn step(
    particle: &mut Particle,
    global_best: Position,
    grid: &Grid,
    params: &PsoParams,
    r1: f64,
    r2: f64,
) {
    let pos = particle.position;
    let pull = |best: i32, here: i32| f64::from(best) - f64::from(here);

    particle.velocity = Velocity {
        vx: params.inertia * particle.velocity.vx
            + params.cognitive * r1 * pull(particle.best_position.x, pos.x)
            + params.social * r2 * pull(global_best.x, pos.x),
        vy: params.inertia * particle.velocity.vy
            + params.cognitive * r1 * pull(particle.best_position.y, pos.y)
            + params.social * r2 * pull(global_best.y, pos.y),
    };

    particle.position = grid.clamp(pos.displaced_by(&particle.velocity));
}
