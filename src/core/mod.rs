//! Shared engine plumbing: deterministic RNG.

pub mod rng;

pub use rng::GameRng;
