//! An unordered pair of values.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors produced by [`Pair`] lookups.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("Value is not a member of the pair")]
    NotAMember,
}

/// Two values whose order does not matter.
///
/// `Pair::new(a, b)` and `Pair::new(b, a)` compare equal and hash to the
/// same value, so a pair can be used as an undirected key, for example for
/// the two bodies of a contact.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Pair<T> {
    a: T,
    b: T,
}

impl<T> Pair<T> {
    /// Creates a new pair of the given values.
    #[inline]
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// The first value given on creation.
    #[inline]
    pub const fn a(&self) -> &T {
        &self.a
    }

    /// The second value given on creation.
    #[inline]
    pub const fn b(&self) -> &T {
        &self.b
    }
}

impl<T: PartialEq> Pair<T> {
    /// Whether either member of the pair equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.a == *value || self.b == *value
    }

    /// Returns the member of the pair that is not `value`.
    ///
    /// If both members equal `value`, the second one is returned.
    ///
    /// # Errors
    /// Returns [`PairError::NotAMember`] if `value` is not in the pair.
    pub fn other(&self, value: &T) -> Result<&T, PairError> {
        if self.a == *value {
            Ok(&self.b)
        } else if self.b == *value {
            Ok(&self.a)
        } else {
            Err(PairError::NotAMember)
        }
    }
}

impl<T: PartialEq> PartialEq for Pair<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<T: Eq> Eq for Pair<T> {}

impl<T: Hash> Hash for Pair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Members are hashed separately and combined with a commutative
        // operation so that the order does not affect the result
        let hash_a = member_hash(&self.a);
        let hash_b = member_hash(&self.b);
        state.write_u64(hash_a.wrapping_add(hash_b));
    }
}

fn member_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
