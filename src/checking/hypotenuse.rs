//! Locating the hypotenuse of a triple

use crate::utils::geometry::{square, Triple};

/// Finds which value of a triple is the hypotenuse
///
/// The three assignments are tried in a fixed order: `a² + b² = c²`, then
/// `a² + c² = b²`, then `b² + c² = a²`. The first one that holds wins, which
/// keeps degenerate inputs such as `(0, 0, 0)` deterministic.
///
/// # Returns
/// The hypotenuse value, or `None` if no assignment satisfies the relation.
/// Zero and negative values are not rejected here.
///
/// # Example
/// ```
/// use eulerbrick::{find_hypotenuse, Triple};
///
/// assert_eq!(find_hypotenuse(&Triple::new(5, 3, 4)), Some(5));
/// assert_eq!(find_hypotenuse(&Triple::new(3, 4, 6)), None);
/// ```
pub fn find_hypotenuse(triple: &Triple) -> Option<i64> {
    let [a, b, c] = triple.values();
    let (sa, sb, sc) = (square(a), square(b), square(c));

    if sa + sb == sc {
        Some(c)
    } else if sa + sc == sb {
        Some(b)
    } else if sb + sc == sa {
        Some(a)
    } else {
        None
    }
}

/// Checks a triple the conventional way: the largest value is the hypotenuse
///
/// Values are sorted ascending (signed order) and the two smallest must
/// square-sum to the largest. This is the input gate used before a pair is
/// handed to [`crate::is_euler_pair`]. It accepts `(0, 0, 0)`.
pub fn is_valid_pythagorean(triple: &Triple) -> bool {
    let [a, b, c] = triple.sorted();
    square(a) + square(b) == square(c)
}
