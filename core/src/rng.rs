//! Mulberry32 pseudo-random generator
//!
//! Every maze published so far was generated with this exact mixing
//! function, so the output must stay bit-identical to it for the same
//! integer seed. Any replacement would silently change past and future
//! daily mazes.
//!
//! All arithmetic is on 32-bit words with wraparound; every right shift is
//! a logical (unsigned) shift.
//!
//! Reference: https://gist.github.com/tommyettinger/46a874533244883189143505d203312c

/// Mulberry32 generator
///
/// Generates a deterministic sequence of floats in `[0, 1)` from a seed.
/// Same seed always produces the same sequence.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Weyl-sequence increment added to the state on every draw
    const INCREMENT: u32 = 0x6d2b_79f5;

    /// Create a generator from a 32-bit seed
    ///
    /// Unlike an LCG there is no degenerate seed; 0 is a valid starting state.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let a = self.state;

        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Next float in `[0, 1)`: the raw output divided by 2^32
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}
