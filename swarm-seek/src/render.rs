//! ASCII console renderer
//!
//! Frame layout:
//!
//! ```text
//! Iteration: 3
//! ############
//! #..........#
//! #...*..G...#
//! #.......*..#
//! ############
//! Global Best Fitness: -1.00
//! ```
//!
//! The goal is drawn after the particles, so a particle sitting on the goal
//! shows as `G`.

use std::fmt::Write as _;
use std::io::{self, Write};

use swarm_seek_core::{Grid, Position, Swarm};

/// ANSI home-cursor + clear-screen sequence
pub const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

const EMPTY: char = '.';
const PARTICLE: char = '*';
const GOAL: char = 'G';
const BORDER: char = '#';

/// Render the bordered grid, one line per row, each terminated by `\n`.
pub fn render_grid(grid: &Grid, swarm: &Swarm, goal: Position) -> String {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut cells = vec![vec![EMPTY; width]; height];

    let mut place = |p: Position, c: char| {
        if grid.contains(&p) {
            cells[p.y as usize][p.x as usize] = c;
        }
    };
    for p in swarm.positions() {
        place(p, PARTICLE);
    }
    place(goal, GOAL);

    let border: String = std::iter::repeat(BORDER).take(width + 2).collect();
    let mut out = String::with_capacity((width + 3) * (height + 2));
    out.push_str(&border);
    out.push('\n');
    for row in &cells {
        out.push(BORDER);
        out.extend(row.iter());
        out.push(BORDER);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

/// Footer line with the global best fitness to two decimals
pub fn fitness_line(swarm: &Swarm) -> String {
    let mut line = String::new();
    // Writing into a String cannot fail
    let _ = write!(line, "Global Best Fitness: {:.2}", swarm.global_best_fitness());
    line
}

/// Write one complete frame: clear, header, grid, footer.
///
/// `iteration` is 1-based.
pub fn render_frame<W: Write>(
    out: &mut W,
    iteration: usize,
    grid: &Grid,
    swarm: &Swarm,
    goal: Position,
) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    writeln!(out, "Iteration: {iteration}")?;
    out.write_all(render_grid(grid, swarm, goal).as_bytes())?;
    writeln!(out, "{}", fitness_line(swarm))?;
    out.flush()
}
