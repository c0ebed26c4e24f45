use crate::fast_random::FastRandom;
use crate::index_set::IndexSet;
use crate::perf_counter::PerfCounter;
use std::fmt;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

// Percent of operations that are membership tests; the next
// `INSERT_PERCENT` are inserts and the rest removes.
const CONTAINS_PERCENT: u32 = 50;
const INSERT_PERCENT: u32 = 30;

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error(transparent)]
    Set(#[from] crate::error::Error),

    #[error("cannot draw indices from a set of capacity 0")]
    EmptySet,

    #[error("workload has no operations")]
    NoOps,

    #[error("workload capacity {workload} does not match set capacity {set}")]
    CapacityMismatch { workload: usize, set: usize },

    #[error("checksum mismatch for {name}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    pub capacity: usize,
    pub ops: usize,
    // Clear after every this many operations; 0 never clears.
    pub clear_every: usize,
    pub seed: u32,
}

impl Default for Workload {
    fn default() -> Self {
        Workload {
            capacity: 4096,
            ops: 10_000_000,
            clear_every: 64,
            seed: 123,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub name: String,
    pub ops: usize,
    pub clears: usize,
    pub seconds: f64,
    pub perf_cycles: Option<u64>,
    pub cpu_freq_ghz: f64,
    pub checksum: u64,
}

impl Report {
    pub fn mops(&self) -> f64 {
        self.ops as f64 / self.seconds / 1e6
    }

    pub fn cc_per_op(&self) -> f64 {
        self.seconds * self.cpu_freq_ghz * 1e9 / self.ops as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let perf_cc_per_op = match self.perf_cycles {
            Some(cycles) => format!("{:.1}", cycles as f64 / self.ops as f64),
            None => "N/A".to_string(),
        };
        write!(
            f,
            "\n{}: {} ops, {} clears\n\
             in {:.6} seconds => {:.3} Mops/s\n\
             CC/op (time*freq, perf counter): {:.1} / {}  @  CPU freq: {:.3} GHz\n\
             checksum = {}",
            self.name,
            self.ops,
            self.clears,
            self.seconds,
            self.mops(),
            self.cc_per_op(),
            perf_cc_per_op,
            self.cpu_freq_ghz,
            self.checksum
        )
    }
}

pub struct Benchmark {
    workload: Workload,
}

impl Benchmark {
    pub fn new(workload: Workload) -> Self {
        Benchmark { workload }
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    // Returns (checksum, clears). The checksum folds in every positive
    // membership test and the size seen before each clear.
    fn do_ops<S: IndexSet + ?Sized>(&self, set: &mut S) -> Result<(u64, usize), BenchmarkError> {
        let capacity = self.workload.capacity;
        if capacity == 0 {
            return Err(BenchmarkError::EmptySet);
        }
        if self.workload.ops == 0 {
            return Err(BenchmarkError::NoOps);
        }
        if set.capacity() != capacity {
            return Err(BenchmarkError::CapacityMismatch {
                workload: capacity,
                set: set.capacity(),
            });
        }

        let mut random = FastRandom::new(self.workload.seed);
        let mut checksum = 0u64;
        let mut clears = 0;

        for op in 1..=self.workload.ops {
            let index = random.next_below(capacity);
            let roll = random.next_percent();
            if roll < CONTAINS_PERCENT {
                if set.contains(index)? {
                    checksum = checksum.wrapping_add(1);
                }
            } else if roll < CONTAINS_PERCENT + INSERT_PERCENT {
                set.insert(index)?;
            } else {
                set.remove(index)?;
            }

            if self.workload.clear_every != 0 && op % self.workload.clear_every == 0 {
                checksum = checksum.wrapping_add(set.len() as u64);
                set.clear();
                clears += 1;
            }
        }

        checksum = checksum.wrapping_add(set.len() as u64);
        Ok((checksum, clears))
    }

    // Runs against `set` as is; callers clear it between runs.
    pub fn run<S: IndexSet + ?Sized>(
        &self,
        name: &str,
        set: &mut S,
        expected_checksum: Option<u64>,
    ) -> Result<Report, BenchmarkError> {
        debug!(name, workload = ?self.workload, "starting benchmark");

        let mut perf_counter = PerfCounter::new();
        let start = Instant::now();
        let (result, cycles) = perf_counter.measure(|| self.do_ops(set));
        let duration = start.elapsed();
        let (checksum, clears) = result?;

        if let Some(expected) = expected_checksum {
            if expected != checksum {
                return Err(BenchmarkError::ChecksumMismatch {
                    name: name.to_string(),
                    expected,
                    actual: checksum,
                });
            }
        }

        let report = Report {
            name: name.to_string(),
            ops: self.workload.ops,
            clears,
            seconds: duration.as_secs_f64(),
            perf_cycles: perf_counter.is_valid().then_some(cycles),
            cpu_freq_ghz: get_cpu_frequency_ghz(),
            checksum,
        };
        info!(name, checksum, seconds = report.seconds, "benchmark finished");
        Ok(report)
    }
}

fn get_cpu_frequency_ghz() -> f64 {
    for path in [
        "/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq",
        "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_cur_freq",
    ] {
        if let Ok(contents) = std::fs::read_to_string(path) {
            if let Ok(freq_khz) = contents.trim().parse::<f64>() {
                return freq_khz / 1_000_000.0;
            }
        }
    }

    warn!("could not read CPU frequency, assuming 1.0 GHz");
    1.0
}
