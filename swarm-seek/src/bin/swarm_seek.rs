use std::path::PathBuf;

use swarm_seek::{Simulation, SimulationConfig};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: swarm_seek [--config <file.json>] [--seed <n>] [--iterations <n>] [--delay-ms <n>]");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  RUST_LOG=swarm_seek=debug swarm_seek --seed 7 --delay-ms 100");
    std::process::exit(2);
}

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    iterations: Option<usize>,
    delay_ms: Option<u64>,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(n)) => n,
        _ => {
            eprintln!("error: {flag} expects a non-negative integer");
            usage();
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => usage(),
            },
            "--seed" => args.seed = Some(parse_number(&flag, iter.next())),
            "--iterations" => args.iterations = Some(parse_number(&flag, iter.next())),
            "--delay-ms" => args.delay_ms = Some(parse_number(&flag, iter.next())),
            _ => usage(),
        }
    }
    args
}

fn run(args: Args) -> swarm_seek::Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(delay) = args.delay_ms {
        config.frame_delay_ms = delay;
    }

    let mut sim = Simulation::new(config)?;
    let stdout = std::io::stdout();
    sim.run(&mut stdout.lock())?;
    Ok(())
}

fn main() {
    // Logs go to stderr; stdout carries the rendered frames.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = parse_args();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
