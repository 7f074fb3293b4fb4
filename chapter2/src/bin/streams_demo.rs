//! 2장 데모: 지연 스트림 (Lazy Streams)
//!
//! 실행 방법: cargo run --bin streams_demo -- --count 10 --budget 1000000 --workers 4

use clap::Parser;
use impatient_chapter2::section_2_2::{LcgParams, RandomLongs, clock_seed};
use impatient_chapter2::section_2_3::character_stream;
use impatient_chapter2::section_2_4::{DEFAULT_ITERATION_BUDGET, FinitenessProbe, zip};
use impatient_chapter2::section_2_9::running_average;
use impatient_common::{Counted, logging};
use tracing::info;

#[derive(Parser)]
#[command(name = "streams_demo")]
#[command(
    about = "Lazy stream exercises: LCG stream, finiteness probe, alternating zip",
    long_about = None
)]
struct Cli {
    /// Seed for the linear congruential generator (defaults to the clock).
    #[arg(long)]
    seed: Option<i64>,

    /// Number of generated values to print.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Iteration budget of the finiteness probe.
    #[arg(long, default_value_t = DEFAULT_ITERATION_BUDGET)]
    budget: u64,

    /// Worker threads used by the parallel probe.
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();

    println!("=== 2장: 스트림 (Chapter 2: Streams) ===\n");

    // 데모 1: 선형 합동 생성기 (Linear congruential generator)
    let seed = cli.seed.unwrap_or_else(clock_seed);
    let randoms = RandomLongs::new(LcgParams::reference(seed))?;
    let (randoms, pulled) = Counted::new(randoms);
    let values: Vec<i64> = randoms.take(cli.count).collect();
    println!("LCG (seed = {seed}), first {}:", cli.count);
    println!("  {values:?}");
    println!("  computed {} values of an infinite stream", pulled.pulled());

    let unit: Vec<f64> = values
        .iter()
        .map(|&x| x as f64 / LcgParams::reference(seed).m as f64)
        .collect();
    if let Some(mean) = running_average(unit) {
        println!("  mean of values scaled to [0, 1): {mean:.4}");
    }

    // 데모 2: 유한성 판별 (Finiteness probe)
    let probe = FinitenessProbe::new().with_budget(cli.budget).with_workers(cli.workers)?;
    info!(budget = probe.budget(), workers = probe.workers(), "running finiteness probe");
    println!("\nFiniteness probe (budget = {}, workers = {}):", probe.budget(), probe.workers());
    println!(
        "  \"Character Stream\" chars -> {:?}",
        probe.probe_parallel(character_stream("Character Stream").collect::<Vec<_>>())
    );
    println!(
        "  LCG stream               -> {:?}",
        probe.probe_parallel(RandomLongs::new(LcgParams::reference(seed))?)
    );

    // 데모 3: 교대 지퍼 (Alternating zipper)
    let odd = (1..).step_by(2).take(10);
    let (even, pulled) = Counted::new((2..).step_by(2));
    let zipped: Vec<i32> = zip(odd, even).collect();
    println!("\nzip(odd x10, even x∞):");
    println!("  {zipped:?}");
    println!("  pulled {} elements from the infinite side", pulled.pulled());

    Ok(())
}
