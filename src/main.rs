use anyhow::Context;
use clap::Parser;
use num_set::{Benchmark, BoolSet, NumSet, Workload};
use tracing_subscriber::EnvFilter;

/// Random insert/remove/contains workload with periodic clears.
#[derive(Parser, Debug)]
#[command(name = "num_set", version, about)]
struct Args {
    /// Exclusive upper bound on set members
    #[arg(long, default_value_t = Workload::default().capacity)]
    capacity: usize,

    /// Number of operations per run
    #[arg(long, default_value_t = Workload::default().ops)]
    ops: usize,

    /// Clear the set every N operations (0 disables clearing)
    #[arg(long, default_value_t = Workload::default().clear_every)]
    clear_every: usize,

    #[arg(long, default_value_t = Workload::default().seed)]
    seed: u32,

    /// Also run the workload on a plain boolean array and compare checksums
    #[arg(long)]
    baseline: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let bench = Benchmark::new(Workload {
        capacity: args.capacity,
        ops: args.ops,
        clear_every: args.clear_every,
        seed: args.seed,
    });

    let mut set: NumSet = NumSet::new(args.capacity).context("creating num_set")?;
    let report = bench.run("num_set", &mut set, None)?;
    println!("{}", report);

    if args.baseline {
        let mut baseline = BoolSet::new(args.capacity);
        println!(
            "{}",
            bench.run("bool_set", &mut baseline, Some(report.checksum))?
        );
    }

    Ok(())
}
