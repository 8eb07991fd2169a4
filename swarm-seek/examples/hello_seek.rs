//! Hello Seek Example
//!
//! Runs a small seeded swarm and prints every frame to stdout.

use swarm_seek::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SwarmSeek Hello Example");
    println!("=======================");

    let config = SimulationConfig::builder()
        .grid(30, 12)
        .particle_count(10)
        .goal(Position::new(22, 3))
        .iterations(25)
        .seed(2024)
        .frame_delay_ms(80)
        .build();

    println!("Configuration:");
    println!("  Grid: {}x{}", config.width, config.height);
    println!("  Particles: {}", config.particle_count);
    println!("  Iterations: {}", config.iterations);

    let mut sim = Simulation::new(config)?;
    let summary = sim.run(&mut std::io::stdout())?;

    println!(
        "\nBest cell ({}, {}) after {} iterations, fitness {:.2}",
        summary.global_best_position.x,
        summary.global_best_position.y,
        summary.iterations,
        summary.global_best_fitness
    );

    Ok(())
}
