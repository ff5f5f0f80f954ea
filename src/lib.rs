//! Checks whether two Pythagorean triples can be adjacent faces of an Euler
//! brick: a cuboid whose edges and face diagonals are all integers.
//!
//! ```
//! use eulerbrick::{is_euler_pair, parse_triple};
//!
//! let first = parse_triple("(44, 117, 125)").unwrap();
//! let second = parse_triple("117 240 267").unwrap();
//! assert!(is_euler_pair(&first, &second));
//! ```

pub mod checking;
pub mod choices;
pub mod config;
pub mod error;
pub mod impls;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod parsing;
pub mod utils;

pub use checking::batch::{check_batch, check_batch_file};
pub use checking::brick::{euler_brick, is_euler_pair, shared_edge};
pub use checking::hypotenuse::{find_hypotenuse, is_valid_pythagorean};
pub use checking::selftest::run_self_test;
pub use config::{AppConfig, LogFormat};
pub use error::{CheckError, ConfigError};
pub use models::{BatchEntry, BatchSummary, CheckerApp, EulerBrick, PairVerdict, Position};
pub use parsing::{parse_pair_line, parse_triple};
pub use utils::geometry::Triple;
