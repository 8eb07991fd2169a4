//! # SwarmSeek Core
//!
//! Particle swarm optimization over a bounded 2D integer grid.
//!
//! This crate provides:
//! - Grid geometry value types ([`Position`], [`Velocity`], [`Grid`])
//! - The swarm model ([`Particle`], [`Swarm`])
//! - The per-iteration update engine ([`engine::update`])
//!
//! ## Feature Flags
//!
//! - `serde`: Derive `Serialize`/`Deserialize` for the value types
//! - `telemetry`: Enable tracing-based telemetry

pub mod engine;
pub mod geometry;
pub mod swarm;

#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use engine::{
    fitness, update, CoefficientSource, FixedCoefficients, PsoParams, RngCoefficients,
};
pub use geometry::{Grid, Position, Velocity};
pub use swarm::{initialize, Particle, Swarm};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::*;
    pub use crate::geometry::*;
    pub use crate::swarm::*;
}

/// Result type for SwarmSeek core operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for SwarmSeek core operations
///
/// Every variant is a construction-time precondition violation; the update
/// engine itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Grid width or height was zero
    EmptyGrid,
    /// Grid dimension does not fit the signed coordinate range
    GridTooLarge,
    /// Particle count was zero
    EmptySwarm,
    /// A seeded position lies outside the grid
    OutOfBounds,
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "grid width and height must be non-zero"),
            Error::GridTooLarge => write!(f, "grid dimension exceeds i32::MAX"),
            Error::EmptySwarm => write!(f, "particle count must be non-zero"),
            Error::OutOfBounds => write!(f, "position lies outside the grid"),
        }
    }
}
