use perf_event::events::Hardware;
use perf_event::{Builder, Counter};
use tracing::warn;

/// CPU-cycle counter for the calling thread. Falls back to reporting zero
/// cycles when perf events are unavailable (containers, restricted
/// `perf_event_paranoid`, non-Linux hosts).
pub struct PerfCounter {
    counter: Option<Counter>,
}

impl PerfCounter {
    pub fn new() -> Self {
        let counter = Builder::new()
            .kind(Hardware::CPU_CYCLES)
            .build()
            .map_err(|e| {
                warn!(error = %e, "failed to open perf counter, using time-based measurement");
                e
            })
            .ok();

        PerfCounter { counter }
    }

    pub fn start(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.reset();
            let _ = counter.enable();
        }
    }

    pub fn stop(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.disable();
        }
    }

    pub fn read(&mut self) -> u64 {
        match self.counter {
            Some(ref mut counter) => counter.read().unwrap_or_else(|e| {
                warn!(error = %e, "failed to read perf counter");
                0
            }),
            None => 0,
        }
    }

    /// Runs `f` between `start` and `stop`, returning its result and the
    /// cycles spent.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> (T, u64) {
        self.start();
        let out = f();
        self.stop();
        (out, self.read())
    }

    pub fn is_valid(&self) -> bool {
        self.counter.is_some()
    }
}

impl Default for PerfCounter {
    fn default() -> Self {
        Self::new()
    }
}
