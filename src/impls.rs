//! Implementations for structs within `models.rs`

use crate::checking::brick::euler_brick;
use crate::checking::hypotenuse::is_valid_pythagorean;
use crate::config::AppConfig;
use crate::error::CheckError;
use crate::models::{
    BatchEntry, BatchSummary, CheckerApp, EulerBrick, PairVerdict, Position, SelfTestOutcome,
    SelfTestReport,
};
use crate::parsing::parse_triple;
use crate::utils::geometry::Triple;
use std::fmt;
use tracing::debug;

impl CheckerApp {
    /// Creates the application with the given settings
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Checks two pieces of user input, the way the entry form does
    ///
    /// Both strings are parsed first; then identical triples are refused, then
    /// each triple must pass [`is_valid_pythagorean`] (and the positivity check
    /// when `strict_positive` is set). Only then is the pair handed to the core.
    pub fn evaluate(&self, first: &str, second: &str) -> Result<PairVerdict, CheckError> {
        let (Some(first), Some(second)) = (parse_triple(first.trim()), parse_triple(second.trim()))
        else {
            debug!(first, second, "rejected unparseable input");
            return Err(CheckError::Unparseable);
        };

        self.evaluate_triples(first, second)
    }

    /// Same as [`CheckerApp::evaluate`] for triples that are already parsed
    pub fn evaluate_triples(&self, first: Triple, second: Triple) -> Result<PairVerdict, CheckError> {
        if first == second {
            debug!(%first, "rejected identical triples");
            return Err(CheckError::Identical);
        }

        self.validate(Position::First, &first)?;
        self.validate(Position::Second, &second)?;

        let brick = euler_brick(&first, &second);
        debug!(%first, %second, euler = brick.is_some(), "checked pair");

        Ok(PairVerdict {
            first,
            second,
            brick,
        })
    }

    /// Applies the input gate to a single triple
    pub fn validate(&self, position: Position, triple: &Triple) -> Result<(), CheckError> {
        if self.config.strict_positive && !triple.is_positive() {
            return Err(CheckError::NonPositive {
                position,
                triple: *triple,
            });
        }

        if !is_valid_pythagorean(triple) {
            return Err(CheckError::NotPythagorean {
                position,
                triple: *triple,
            });
        }

        Ok(())
    }
}

impl PairVerdict {
    /// Returns `true` if the pair forms two faces of an Euler brick
    pub const fn is_euler(&self) -> bool {
        self.brick.is_some()
    }
}

impl BatchSummary {
    /// Tallies a finished batch
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                match &entry.outcome {
                    Ok(verdict) if verdict.is_euler() => summary.euler += 1,
                    Ok(_) => summary.not_euler += 1,
                    Err(_) => summary.rejected += 1,
                }
                summary
            })
    }

    /// Number of lines counted
    pub const fn total(&self) -> usize {
        self.euler + self.not_euler + self.rejected
    }
}

impl SelfTestOutcome {
    /// A case passes when every run, permuted or not, matched the expectation
    pub fn passed(&self) -> bool {
        self.got == self.case.expected && self.failed_permutations.is_empty()
    }
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Position::First => write!(f, "First"),
            Position::Second => write!(f, "Second"),
        }
    }
}

impl fmt::Display for EulerBrick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c] = self.edges;
        let [d1, d2] = self.diagonals;
        write!(
            f,
            "edges {} x {} x {}, face diagonals {}, {}, {}",
            a, b, c, d1, d2, self.third_diagonal
        )
    }
}

impl fmt::Display for PairVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.brick {
            Some(brick) => write!(
                f,
                "{} and {} CAN form two faces of an Euler brick ({})",
                self.first, self.second, brick
            ),
            None => write!(
                f,
                "{} and {} CANNOT form two faces of an Euler brick",
                self.first, self.second
            ),
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} lines: {} Euler pairs, {} not Euler, {} rejected",
            self.total(),
            self.euler,
            self.not_euler,
            self.rejected
        )
    }
}
