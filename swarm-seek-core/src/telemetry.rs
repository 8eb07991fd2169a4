//! Telemetry integration (optional).
//!
//! The engine emits its own `tracing` events when this feature is on. This
//! module adds helpers for drivers that want a per-iteration summary without
//! reaching into the swarm themselves.

use crate::geometry::Grid;
use crate::swarm::Swarm;

/// Mean of every particle's most recent fitness.
///
/// Returns `None` before the first update.
pub fn mean_fitness(swarm: &Swarm) -> Option<f64> {
    let mut sum = 0.0;
    for particle in swarm.particles() {
        if !particle.fitness().is_finite() {
            return None;
        }
        sum += particle.fitness();
    }
    Some(sum / swarm.len() as f64)
}

/// Emit a debug event describing the swarm after `iteration` (1-based).
pub fn record_iteration(iteration: usize, swarm: &Swarm, grid: &Grid) {
    let best = swarm.global_best_position();
    tracing::debug!(
        iteration,
        width = grid.width(),
        height = grid.height(),
        best_x = best.x,
        best_y = best.y,
        global_best_fitness = swarm.global_best_fitness(),
        mean_fitness = mean_fitness(swarm).unwrap_or(f64::NEG_INFINITY),
        "iteration complete"
    );
}
