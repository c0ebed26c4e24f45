// Park-Miller "minimal standard" PRNG. Benchmark checksums depend on the
// exact sequence, so the recurrence must not change.
#[derive(Clone, Debug)]
pub struct FastRandom {
    seed: u32,
}

impl FastRandom {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of the recurrence.
        FastRandom {
            seed: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u31(&mut self) -> u32 {
        let lo = 16807u32.wrapping_mul(self.seed & 0xffff);
        let hi = 16807u32.wrapping_mul(self.seed >> 16);
        let lo = lo.wrapping_add((hi & 0x7fff) << 16);
        let lo = lo.wrapping_add(hi >> 15);
        self.seed = (lo & 0x7FFFFFFF).wrapping_add(lo >> 31);
        self.seed
    }

    /// Uniform-ish index in `[0, bound)`; `bound` must be non-zero.
    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        let r = ((self.next_u31() as u64) << 31) | self.next_u31() as u64;
        (r % bound as u64) as usize
    }

    /// Percentage roll in `[0, 100)`.
    pub fn next_percent(&mut self) -> u32 {
        self.next_u31() % 100
    }
}
