//! Counted random stream
//!
//! A `StreamRng` wraps one xorshift128+ generator and counts every draw
//! made from it. The `(seed, counter)` pair is the stream's identity:
//! save files persist only that pair and restore by replaying `counter`
//! literal draws, so the counting rules here are load-bearing.
//!
//! # Counting rules
//!
//! - Every public draw increments the counter by exactly one, even when
//!   bounded sampling rejects and redraws raw words internally.
//! - Replay uses `draw_int_inclusive(0, 999)` per counted call.
//! - `set_counter` advances with `draw_bool()` calls.

use super::xorshift::Xs128State;

/// 2^-24, the float step for a 24-bit mantissa draw
const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// 2^-53, the double step for a 53-bit mantissa draw
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// One independent, counted random stream
///
/// # Example
/// ```
/// use spire_seed_core::rng::StreamRng;
///
/// let mut rng = StreamRng::new(12345);
/// let roll = rng.draw_int_inclusive(0, 99);
/// assert!((0..=99).contains(&roll));
/// assert_eq!(rng.counter(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StreamRng {
    seed: i64,
    counter: u32,
    state: Xs128State,
}

impl StreamRng {
    /// Create a fresh stream at counter 0
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            counter: 0,
            state: Xs128State::initialize(seed),
        }
    }

    /// Create a stream and replay `counter` draws
    ///
    /// Identical to `new(seed)` followed by `counter` calls to
    /// `draw_int_inclusive(0, 999)`. Replay is operational: rejection
    /// sampling means the raw state cannot be skipped ahead algebraically.
    pub fn with_counter(seed: i64, counter: u32) -> Self {
        let mut rng = Self::new(seed);
        for _ in 0..counter {
            rng.draw_int_inclusive(0, 999);
        }
        rng
    }

    /// Seed this stream was constructed from
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of counted draws since construction
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Current raw generator state (diagnostics only)
    pub fn state(&self) -> Xs128State {
        self.state
    }

    /// Advance with `draw_bool()` calls until the counter reaches `target`
    ///
    /// No-op when the counter is already at or past `target`.
    pub fn set_counter(&mut self, target: u32) {
        while self.counter < target {
            self.draw_bool();
        }
    }

    /// Uniform value in `[0, n)`
    ///
    /// Draws a 63-bit non-negative value and accepts `bits % n` unless
    /// `bits - (bits % n) + (n - 1)` overflows, in which case it redraws.
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn draw_bounded(&mut self, n: i64) -> i64 {
        assert!(n > 0, "n must be positive");
        self.counter += 1;
        self.bounded_raw(n)
    }

    /// Uniform value in `[lo, hi]`
    ///
    /// # Panics
    /// Panics if `hi < lo`.
    pub fn draw_int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        assert!(lo <= hi, "lo must not exceed hi");
        self.counter += 1;
        let span = hi as i64 - lo as i64 + 1;
        (lo as i64 + self.bounded_raw(span)) as i32
    }

    /// Uniform value in `[0, range]`
    pub fn draw_int(&mut self, range: i32) -> i32 {
        self.draw_int_inclusive(0, range)
    }

    /// Low bit of a raw draw
    pub fn draw_bool(&mut self) -> bool {
        self.counter += 1;
        self.state.next_u64() & 1 != 0
    }

    /// `true` with probability `chance`
    ///
    /// Always consumes one draw, including for `chance <= 0.0`.
    pub fn draw_bool_chance(&mut self, chance: f32) -> bool {
        self.draw_float() < chance
    }

    /// Float in `[0, 1)` from the top 24 bits of a raw draw
    pub fn draw_float(&mut self) -> f32 {
        self.counter += 1;
        self.float_raw()
    }

    /// Float in `[lo, hi)`
    pub fn draw_float_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.draw_float() * (hi - lo)
    }

    /// Double in `[0, 1)` from the top 53 bits of a raw draw
    pub fn draw_double(&mut self) -> f64 {
        self.counter += 1;
        self.double_raw()
    }

    /// Full raw draw reinterpreted as signed
    pub fn draw_long(&mut self) -> i64 {
        self.counter += 1;
        self.state.next_u64() as i64
    }

    /// `lo + trunc(double * (hi - lo))`
    pub fn draw_long_range(&mut self, lo: i64, hi: i64) -> i64 {
        self.counter += 1;
        lo + (self.double_raw() * hi.wrapping_sub(lo) as f64) as i64
    }

    fn bounded_raw(&mut self, n: i64) -> i64 {
        loop {
            let bits = (self.state.next_u64() >> 1) as i64;
            let value = bits % n;
            if bits.wrapping_sub(value).wrapping_add(n - 1) >= 0 {
                return value;
            }
        }
    }

    fn float_raw(&mut self) -> f32 {
        (self.state.next_u64() >> 40) as f32 * FLOAT_UNIT
    }

    fn double_raw(&mut self) -> f64 {
        (self.state.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }
}

/// Equal iff seed and counter match
impl PartialEq for StreamRng {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed && self.counter == other.counter
    }
}

impl Eq for StreamRng {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "n must be positive")]
    fn test_bounded_rejects_zero() {
        let mut rng = StreamRng::new(1);
        rng.draw_bounded(0);
    }

    #[test]
    #[should_panic(expected = "lo must not exceed hi")]
    fn test_inclusive_rejects_inverted_bounds() {
        let mut rng = StreamRng::new(1);
        rng.draw_int_inclusive(10, 9);
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = StreamRng::new(12345);
        for _ in 0..20 {
            assert_eq!(rng.draw_int_inclusive(7, 7), 7);
        }
        assert_eq!(rng.counter(), 20);
    }

    #[test]
    fn test_every_draw_counts_once() {
        let mut rng = StreamRng::new(99);
        rng.draw_bounded(10);
        rng.draw_int_inclusive(0, 5);
        rng.draw_int(3);
        rng.draw_bool();
        rng.draw_bool_chance(0.0);
        rng.draw_float();
        rng.draw_float_range(1.0, 2.0);
        rng.draw_double();
        rng.draw_long();
        rng.draw_long_range(0, 100);
        assert_eq!(rng.counter(), 10);
    }

    #[test]
    fn test_set_counter_only_moves_forward() {
        let mut rng = StreamRng::new(5);
        rng.set_counter(40);
        assert_eq!(rng.counter(), 40);
        let state = rng.state();
        rng.set_counter(10);
        assert_eq!(rng.counter(), 40);
        assert_eq!(rng.state(), state);
    }

    #[test]
    fn test_float_golden_values() {
        let mut rng = StreamRng::new(12345);
        assert_eq!(rng.draw_float(), 0.074_941_813_945_770_26);
        assert_eq!(rng.draw_float(), 0.487_497_806_549_072_27);
        assert_eq!(rng.draw_float(), 0.894_405_364_990_234_4);
        assert!(!rng.draw_bool());
        assert!(rng.draw_bool());
        assert!(!rng.draw_bool());
        assert!(rng.draw_bool());
        assert_eq!(rng.draw_long(), -3_551_486_133_838_269_301);
    }

    #[test]
    fn test_equality_is_seed_and_counter() {
        let mut a = StreamRng::new(3);
        let b = StreamRng::with_counter(3, 1);
        assert_ne!(a, b);
        a.draw_int_inclusive(0, 999);
        assert_eq!(a, b);
        assert_ne!(StreamRng::new(3), StreamRng::new(4));
    }
}
