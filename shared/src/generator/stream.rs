//! Seeded uniform stream in [0, 1)

const INCREMENT: u32 = 0x6D2B_79F5;
const SCALE: f64 = 4_294_967_296.0;

/// One step of the stream: returns the drawn value and the next state.
pub fn next(state: u32) -> (f64, u32) {
    let state = state.wrapping_add(INCREMENT);
    let mut t = (state ^ (state >> 15)).wrapping_mul(state | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let value = f64::from(t ^ (t >> 14)) / SCALE;
    (value, state)
}

/// Per-call random stream. Each draw advances the state exactly once.
#[derive(Debug, Clone)]
pub struct RandomStream {
    state: u32,
    draws: u32,
}

impl RandomStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed, draws: 0 }
    }

    pub fn next_f64(&mut self) -> f64 {
        let (value, state) = next(self.state);
        self.state = state;
        self.draws += 1;
        value
    }

    /// Draws consumed since construction
    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
