//! Unit tests for the board core.

mod explore;
mod make_unmake;
#[cfg(feature = "serde")]
mod serialization;
mod topology;
