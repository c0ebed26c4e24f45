pub mod benchmark;
pub mod bool_set;
pub mod error;
pub mod fast_random;
pub mod index_set;
pub mod num_set;
pub mod perf_counter;
pub mod types;

// Re-export main types
pub use benchmark::{Benchmark, BenchmarkError, Report, Workload};
pub use bool_set::BoolSet;
pub use error::{Error, Result};
pub use index_set::IndexSet;
pub use num_set::NumSet;
pub use perf_counter::PerfCounter;
pub use types::{Slot, MAX_CAPACITY};
