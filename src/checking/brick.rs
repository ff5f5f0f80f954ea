//! Deciding whether two faces can belong to the same Euler brick

use crate::checking::hypotenuse::find_hypotenuse;
use crate::models::EulerBrick;
use crate::utils::geometry::{exact_sqrt, square, Triple};
use std::collections::BTreeSet;

/// Returns the single value two triples have in common
///
/// Each triple is treated as a set, so repeated values inside one triple
/// collapse. `None` when the triples share no value or more than one.
pub fn shared_edge(first: &Triple, second: &Triple) -> Option<i64> {
    let lhs: BTreeSet<i64> = first.values().into_iter().collect();
    let rhs: BTreeSet<i64> = second.values().into_iter().collect();
    let mut common = lhs.intersection(&rhs);

    match (common.next(), common.next()) {
        (Some(&edge), None) => Some(edge),
        _ => None,
    }
}

/// The one leg of `triple` that is neither its hypotenuse nor the shared edge
fn remaining_leg(triple: &Triple, hypotenuse: i64, shared: i64) -> Option<i64> {
    let mut legs = triple
        .values()
        .into_iter()
        .filter(|&v| v != hypotenuse && v != shared);

    match (legs.next(), legs.next()) {
        (Some(leg), None) => Some(leg),
        _ => None,
    }
}

/// Reconstructs the Euler brick two triples describe, if there is one
///
/// The triples must share exactly one value, that value must be a leg (not the
/// hypotenuse) of both, and the two remaining legs must have an integer
/// diagonal. The diagonal test is exact for every `i64` input.
pub fn euler_brick(first: &Triple, second: &Triple) -> Option<EulerBrick> {
    let shared = shared_edge(first, second)?;

    let hyp1 = find_hypotenuse(first)?;
    let hyp2 = find_hypotenuse(second)?;

    if shared == hyp1 || shared == hyp2 {
        return None;
    }

    let dim1 = remaining_leg(first, hyp1, shared)?;
    let dim3 = remaining_leg(second, hyp2, shared)?;

    let third = exact_sqrt(square(dim1) + square(dim3))?;

    Some(EulerBrick {
        edges: [shared, dim1, dim3],
        diagonals: [hyp1, hyp2],
        third_diagonal: third,
    })
}

/// Returns `true` if the two triples can be adjacent faces of an Euler brick
///
/// Never fails: equal triples, zero or negative values and non-Pythagorean
/// input all simply give `false`.
///
/// # Example
/// ```
/// use eulerbrick::{is_euler_pair, Triple};
///
/// assert!(is_euler_pair(&Triple::new(44, 117, 125), &Triple::new(117, 240, 267)));
/// assert!(!is_euler_pair(&Triple::new(6, 8, 10), &Triple::new(8, 15, 17)));
/// ```
pub fn is_euler_pair(first: &Triple, second: &Triple) -> bool {
    euler_brick(first, second).is_some()
}
