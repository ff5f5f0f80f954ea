//! Data structures for `eulerbrick`

use crate::config::AppConfig;
use crate::error::CheckError;
use crate::utils::geometry::Triple;

/// A cuboid recovered from two adjacent faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EulerBrick {
    /// The shared edge followed by the remaining leg of each face
    pub edges: [i64; 3],
    /// The hypotenuse of the first and second face
    pub diagonals: [i64; 2],
    /// The diagonal of the face spanned by the two remaining legs
    pub third_diagonal: u128,
}

/// Which of the two submitted triples a message is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The first triple entered
    First,
    /// The second triple entered
    Second,
}

/// The outcome of checking a pair that passed input validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairVerdict {
    /// The first triple, as parsed
    pub first: Triple,
    /// The second triple, as parsed
    pub second: Triple,
    /// The brick the pair describes, if any
    pub brick: Option<EulerBrick>,
}

/// The application state shared by every front end
#[derive(Debug, Clone, Default)]
pub struct CheckerApp {
    /// Settings read at process start
    pub config: AppConfig,
}

/// One evaluated line of a batch file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based line number in the input
    pub line: usize,
    /// The verdict, or why the line was rejected
    pub outcome: Result<PairVerdict, CheckError>,
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub euler: usize,
    pub not_euler: usize,
    pub rejected: usize,
}

/// A built-in scenario with a known answer
#[derive(Debug, Clone, Copy)]
pub struct SelfTestCase {
    pub first: Triple,
    pub second: Triple,
    pub expected: bool,
    pub description: &'static str,
}

/// The result of running one [`SelfTestCase`]
#[derive(Debug, Clone)]
pub struct SelfTestOutcome {
    pub case: SelfTestCase,
    /// Result for the triples as written
    pub got: bool,
    /// Permuted inputs that disagreed with `expected`
    pub failed_permutations: Vec<(Triple, Triple)>,
}

/// All outcomes of a self-test run
#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub outcomes: Vec<SelfTestOutcome>,
}
