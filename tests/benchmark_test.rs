use num_set::{Benchmark, BoolSet, IndexSet, NumSet, Workload};
use std::time::Instant;

fn run_both(workload: Workload) {
    let bench = Benchmark::new(workload.clone());

    let mut set: NumSet = NumSet::new(workload.capacity).unwrap();
    let report = bench.run("num_set", &mut set, None).unwrap();
    println!("{}", report);

    let mut baseline = BoolSet::new(workload.capacity);
    let baseline_report = bench
        .run("bool_set", &mut baseline, Some(report.checksum))
        .unwrap();
    println!("{}", baseline_report);
}

#[test]
fn test_benchmark_100k() {
    run_both(Workload {
        capacity: 1000,
        ops: 100_000,
        clear_every: 64,
        seed: 123,
    });
}

#[test]
fn test_benchmark_never_clearing() {
    run_both(Workload {
        capacity: 50,
        ops: 100_000,
        clear_every: 0,
        seed: 99,
    });
}

#[test]
fn test_benchmark_u16_slots_match() {
    let workload = Workload {
        capacity: 300,
        ops: 50_000,
        clear_every: 17,
        seed: 5,
    };
    let bench = Benchmark::new(workload);
    let mut wide: NumSet = NumSet::new(300).unwrap();
    let mut narrow = NumSet::<u16>::new(300).unwrap();
    let expected = bench.run("u32", &mut wide, None).unwrap().checksum;
    bench.run("u16", &mut narrow, Some(expected)).unwrap();
}

#[test]
#[ignore] // Run with cargo test --release -- --ignored
fn benchmark_performance() {
    run_both(Workload::default());
    run_both(Workload {
        capacity: 1 << 20,
        ops: 10_000_000,
        clear_every: 64,
        seed: 123,
    });
}

#[test]
#[ignore] // Timing based; run with cargo test --release -- --ignored
fn clear_does_not_scale_with_member_count() {
    const CAPACITY: usize = 1 << 22;
    const ROUNDS: usize = 64;

    fn time_clears<S: IndexSet>(set: &mut S, fill: usize) -> f64 {
        let mut total = 0.0;
        for _ in 0..ROUNDS {
            for i in 0..fill {
                set.insert(i).unwrap();
            }
            let start = Instant::now();
            set.clear();
            total += start.elapsed().as_secs_f64();
            assert!(set.is_empty());
        }
        total
    }

    let mut set: NumSet = NumSet::new(CAPACITY).unwrap();
    let few = time_clears(&mut set, 1);
    let many = time_clears(&mut set, CAPACITY);

    let mut baseline = BoolSet::new(CAPACITY);
    let baseline_many = time_clears(&mut baseline, CAPACITY);

    println!(
        "num_set clear: {:.3e}s (1 member) / {:.3e}s (full); bool_set clear: {:.3e}s (full)",
        few, many, baseline_many
    );
    assert!(many < baseline_many / 10.0);
}
