//! Containers and data structures.

mod pair;

pub use pair::{Pair, PairError};
