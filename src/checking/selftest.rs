//! Built-in scenarios with known answers

use crate::checking::brick::is_euler_pair;
use crate::models::{SelfTestCase, SelfTestOutcome, SelfTestReport};
use crate::utils::geometry::Triple;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

/// Shuffled variants tried per case besides the order as written
const PERMUTED_RUNS: usize = 4;

const fn case(
    first: (i64, i64, i64),
    second: (i64, i64, i64),
    expected: bool,
    description: &'static str,
) -> SelfTestCase {
    SelfTestCase {
        first: Triple::new(first.0, first.1, first.2),
        second: Triple::new(second.0, second.1, second.2),
        expected,
        description,
    }
}

/// The scenario table
pub const SELF_TEST_CASES: [SelfTestCase; 9] = [
    case((44, 117, 125), (117, 240, 267), true, "Known Euler brick 44x117x240"),
    case((117, 44, 125), (240, 117, 267), true, "Permuted order, same Euler brick"),
    case((6, 8, 10), (8, 15, 17), false, "Third diagonal sqrt(36+225)=sqrt(261) not integer"),
    case((3, 4, 5), (4, 3, 5), false, "Both triples share both legs (3,4)"),
    case((44, 117, 125), (117, 240, 266), false, "Second triple invalid (117^2+240^2 != 266^2)"),
    case((44, 117, 125), (118, 240, 267), false, "No shared edge"),
    case((0, 0, 0), (3, 4, 5), false, "Invalid input (zeros)"),
    case((-3, 4, 5), (3, 4, 5), false, "Invalid input (negative number)"),
    case((4400000000000001, 117, 125), (117, 240, 267), false, "Large numbers - potential overflow"),
];

fn shuffled<R: Rng + ?Sized>(triple: &Triple, rng: &mut R) -> Triple {
    let mut values = triple.values();
    values.shuffle(rng);
    Triple::from(values)
}

/// Runs one case as written and with both triples shuffled
pub fn run_case<R: Rng + ?Sized>(case: SelfTestCase, rng: &mut R) -> SelfTestOutcome {
    let got = is_euler_pair(&case.first, &case.second);

    let failed_permutations = (0..PERMUTED_RUNS)
        .map(|_| (shuffled(&case.first, rng), shuffled(&case.second, rng)))
        .filter(|(first, second)| is_euler_pair(first, second) != case.expected)
        .collect();

    SelfTestOutcome {
        case,
        got,
        failed_permutations,
    }
}

/// Runs every built-in case
pub fn run_self_test() -> SelfTestReport {
    let mut rng = rand::rng();
    let outcomes: Vec<SelfTestOutcome> = SELF_TEST_CASES
        .iter()
        .map(|&case| run_case(case, &mut rng))
        .collect();

    let report = SelfTestReport { outcomes };
    if report.all_passed() {
        info!(total = report.total(), "self-test passed");
    } else {
        warn!(
            passed = report.passed(),
            total = report.total(),
            "self-test failed"
        );
    }
    report
}
