//! Grid geometry value types
//!
//! Positions are integer cells; velocities are real-valued and unbounded.
//! Both are `Copy`, so every snapshot taken of a position is independent of
//! the particle it came from.

use crate::{Error, Result};

/// A cell on the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`, computed in f64
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// Move by a real-valued velocity, truncating each component toward zero.
    pub fn displaced_by(self, velocity: &Velocity) -> Self {
        // `as` truncates toward zero and saturates at the i32 range
        Self {
            x: self.x.saturating_add(velocity.vx as i32),
            y: self.y.saturating_add(velocity.vy as i32),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Per-axis velocity
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { vx: 0.0, vy: 0.0 };

    pub const fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }
}

/// Search space bounds
///
/// Valid cells are `[0, width - 1] x [0, height - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Create a grid, rejecting empty or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::GridTooLarge);
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Largest valid x coordinate
    pub const fn max_x(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Largest valid y coordinate
    pub const fn max_y(&self) -> i32 {
        self.height as i32 - 1
    }

    pub fn contains(&self, position: &Position) -> bool {
        (0..=self.max_x()).contains(&position.x) && (0..=self.max_y()).contains(&position.y)
    }

    /// Clamp each axis independently into the grid.
    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(0, self.max_x()),
            y: position.y.clamp(0, self.max_y()),
        }
    }

    /// Centre cell, rounding down on even dimensions
    pub const fn center(&self) -> Position {
        Position {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }
}
