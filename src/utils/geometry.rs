//! The triple type shared by every part of the checker

use num_integer::Roots;
use std::fmt;

/// Three side lengths of a right triangle, in no particular order
///
/// Equality is positional, so `(3, 4, 5)` and `(4, 3, 5)` are different
/// triples even though they describe the same triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple {
    values: [i64; 3],
}

impl Triple {
    /// Creates a new triple from its three values
    pub const fn new(a: i64, b: i64, c: i64) -> Self {
        Self { values: [a, b, c] }
    }

    /// The values in the order they were given
    pub const fn values(&self) -> [i64; 3] {
        self.values
    }

    /// The values sorted ascending
    pub fn sorted(&self) -> [i64; 3] {
        let mut values = self.values;
        values.sort_unstable();
        values
    }

    /// Returns `true` if `value` appears anywhere in the triple
    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    /// Returns `true` if every value is strictly positive
    pub fn is_positive(&self) -> bool {
        self.values.iter().all(|&v| v > 0)
    }
}

impl From<(i64, i64, i64)> for Triple {
    fn from((a, b, c): (i64, i64, i64)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<[i64; 3]> for Triple {
    fn from(values: [i64; 3]) -> Self {
        Self { values }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c] = self.values;
        write!(f, "({}, {}, {})", a, b, c)
    }
}

/// Squares a value without overflow
///
/// Works on the magnitude, so `square(i64::MIN)` is `2^126` and the sum of any
/// two squares still fits in a `u128`.
pub fn square(value: i64) -> u128 {
    let magnitude = u128::from(value.unsigned_abs());
    magnitude * magnitude
}

/// Returns the exact square root of `n` if `n` is a perfect square
pub fn exact_sqrt(n: u128) -> Option<u128> {
    let root = Roots::sqrt(&n);
    (root * root == n).then_some(root)
}
