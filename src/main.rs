use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use aoc2021::solver;

#[derive(Debug, Parser)]
#[command(name = "aoc2021", about = "Run Advent of Code 2021 solutions")]
struct Cli {
    /// The day to run
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// The part to run, both if omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Read the numbered sample input day<DAY>test<N>.in
    #[arg(short, long)]
    test: Option<u32>,

    /// Input file path, overrides --test
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl Cli {
    fn input_path(&self) -> PathBuf {
        match (&self.input, self.test) {
            (Some(path), _) => path.clone(),
            (None, Some(test)) => format!("day{}test{}.in", self.day, test).into(),
            (None, None) => format!("day{}.in", self.day).into(),
        }
    }

    fn parts(&self) -> Vec<u8> {
        self.part.map_or_else(|| vec![1, 2], |part| vec![part])
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(solve) = solver(cli.day) else {
        return Err(format!("no solution for day {}", cli.day).into());
    };
    let path = cli.input_path();
    let input = std::fs::read_to_string(&path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    for part in cli.parts() {
        let time = Instant::now();
        println!("{}", solve(part, &input)?);
        tracing::info!(day = cli.day, part, seconds = time.elapsed().as_secs_f32(), "solved");
    }
    Ok(())
}
