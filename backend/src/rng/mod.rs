//! Deterministic random number generation
//!
//! Bit-exact reproductions of the generators the game uses:
//! xorshift128+ for its named streams and `java.util.Random` for seeded
//! shuffles. CRITICAL: every prediction in this crate draws through
//! this module.

mod java;
mod stream;
mod xorshift;

pub use java::JavaRandom;
pub use stream::StreamRng;
pub use xorshift::{finalize, Xs128State};
