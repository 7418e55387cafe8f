//! Match environment: the PRNG stream and the board generator that consumes
//! its first values.
mod map;
mod rng;

pub use map::{BoardGenerator, GeneratedBoard};
pub use rng::LcgRng;
