//! Kolkhoz simulator CLI - plays whole games between random AI seats in
//! memory and writes one JSON line per game.

mod simulator;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use clap::Parser;
use kolkhoz::domain::{derive_game_seed, Variants};
use simulator::{GameRecord, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "kolkhoz-simulator")]
#[command(about = "Fast in-memory Kolkhoz game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u64,

    /// Players per game (2-4)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Batch seed; per-game seeds are derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Variants as a JSON object, e.g. '{"deck":"full","accumulate_jobs":true}'
    #[arg(long, default_value = "{}")]
    variants: String,

    /// Write JSON lines here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a per-seat summary to stderr
    #[arg(long)]
    summary: bool,

    /// Emit engine logs as JSON on stdout (filtered by RUST_LOG, default
    /// info); pair with --output
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        kolkhoz::telemetry::init_tracing();
    } else {
        let filter = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let variants: Variants = serde_json::from_str(&args.variants)?;
    let batch_seed = args.seed.unwrap_or_else(rand::random);
    info!(games = args.games, players = args.players, batch_seed, ?variants, "starting simulation");

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let simulator = Simulator::new(args.players, variants);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game in 1..=args.games {
        let seed = derive_game_seed(batch_seed, game);
        match simulator.simulate_game(game, seed) {
            Ok(record) => {
                serde_json::to_writer(&mut out, &record)?;
                writeln!(out)?;
                info!(game, winner = record.winner, scores = ?record.scores, "game completed");
                results.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!(game, seed, error = %e, "game failed");
            }
        }
    }
    out.flush()?;

    if args.summary {
        print_summary(&results, errors, start.elapsed(), args.players);
    }
    Ok(())
}

fn print_summary(results: &[GameRecord], errors: u32, elapsed: std::time::Duration, players: usize) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Games completed: {}", results.len());
    if errors > 0 {
        eprintln!("Errors: {errors}");
    }
    eprintln!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }

    let mut wins = vec![0u32; players];
    let mut totals = vec![0u64; players];
    for record in results {
        wins[record.winner as usize] += 1;
        for (seat, &score) in record.scores.iter().enumerate() {
            totals[seat] += u64::from(score);
        }
    }

    eprintln!("\n=== Results by Seat (lowest score wins) ===");
    let n = results.len() as f64;
    for seat in 0..players {
        eprintln!(
            "Seat {}: avg={:.1}, wins={} ({:.1}%)",
            seat,
            totals[seat] as f64 / n,
            wins[seat],
            f64::from(wins[seat]) / n * 100.0
        );
    }
    let famine: u64 = results.iter().map(|r| u64::from(r.famine_years)).sum();
    eprintln!("Famine years per game: {:.2}", famine as f64 / n);
}
