use crate::checking::batch::check_batch_file;
use crate::checking::hypotenuse::find_hypotenuse;
use crate::checking::selftest::run_self_test;
use crate::choices::{MenuAction, OutputOrder};
use crate::error::CheckError;
use crate::models::{BatchEntry, BatchSummary, CheckerApp, Position, SelfTestReport};
use crate::parsing::parse_triple;
use anyhow::Context;
use inquire::{InquireError, Text};
#[allow(unused_imports)]
use inquiry::Choice;
use rand::seq::SliceRandom;
use tracing::{info, warn};

const TRIPLE_HELP: &str = "Formats: 3,4,5 or (3,4,5) or [3,4,5] or 3 4 5";

/// The interactive terminal front end
pub struct Session {
    app: CheckerApp,
}

/// Treats a cancelled prompt as "nothing entered"
fn prompt_text(message: &str, help: &str) -> anyhow::Result<Option<String>> {
    match Text::new(message).with_help_message(help).prompt() {
        Ok(text) => Ok(Some(text)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to get user input"),
    }
}

impl Session {
    pub fn new(app: CheckerApp) -> Self {
        Session { app }
    }

    pub fn run(app: CheckerApp) -> anyhow::Result<()> {
        let mut session = Session::new(app);
        session.execute()
    }

    fn check_pair(&self) -> anyhow::Result<()> {
        let Some(first) = prompt_text("First triple:", TRIPLE_HELP)? else {
            return Ok(());
        };
        let Some(second) = prompt_text("Second triple:", TRIPLE_HELP)? else {
            return Ok(());
        };

        match self.app.evaluate(&first, &second) {
            Ok(verdict) => println!("{}", verdict),
            Err(err) => println!("Error: {}", err),
        }

        Ok(())
    }

    fn validate_triple(&self) -> anyhow::Result<()> {
        let Some(text) = prompt_text("Triple:", TRIPLE_HELP)? else {
            return Ok(());
        };

        let Some(triple) = parse_triple(text.trim()) else {
            println!("Please enter a valid triple in the format: 3,4,5 or (3,4,5) or [3,4,5]");
            return Ok(());
        };

        match self.app.validate(Position::First, &triple) {
            Ok(()) => match find_hypotenuse(&triple) {
                Some(hypotenuse) => println!(
                    "{} is a valid Pythagorean triple with hypotenuse {}",
                    triple, hypotenuse
                ),
                None => println!("{} is a valid Pythagorean triple", triple),
            },
            Err(CheckError::NonPositive { .. }) => {
                println!("{} must contain only positive integers", triple)
            }
            Err(_) => println!("{} is not a valid Pythagorean triple", triple),
        }

        Ok(())
    }

    fn batch(&self) -> anyhow::Result<()> {
        let Some(path) = prompt_text(
            "Path to the batch file:",
            "One pair per line, e.g. (44,117,125); (117,240,267)",
        )?
        else {
            return Ok(());
        };
        let path = path.trim();

        let Ok(order) = OutputOrder::choice("What order should the results be reported in?") else {
            return Ok(());
        };

        let mut entries = check_batch_file(&self.app, path, self.app.config.show_progress)
            .with_context(|| format!("Failed to read batch file {}", path))?;

        if order == OutputOrder::Shuffled {
            entries.shuffle(&mut rand::rng());
        }

        print_batch(&entries);
        Ok(())
    }

    fn self_test(&self) {
        print_self_test(&run_self_test());
    }

    fn execute(&mut self) -> anyhow::Result<()> {
        if self.app.config.self_test_on_start {
            self.self_test();
        }

        loop {
            let Ok(action) = MenuAction::choice("What would you like to do?") else {
                info!("menu closed");
                break;
            };

            match action {
                MenuAction::CheckPair => self.check_pair()?,
                MenuAction::ValidateTriple => self.validate_triple()?,
                MenuAction::Batch => {
                    if let Err(err) = self.batch() {
                        warn!(error = %err, "batch check failed");
                        println!("Error: {:#}", err);
                    }
                }
                MenuAction::SelfTest => self.self_test(),
                MenuAction::Quit => break,
            }

            println!();
        }

        println!("Quitting!");
        Ok(())
    }
}

fn print_batch(entries: &[BatchEntry]) {
    for entry in entries {
        match &entry.outcome {
            Ok(verdict) => println!("line {}: {}", entry.line, verdict),
            Err(err) => println!("line {}: Error: {}", entry.line, err),
        }
    }

    println!("{}", BatchSummary::from_entries(entries));
}

/// Prints the report in the same layout as the startup test run
pub fn print_self_test(report: &SelfTestReport) {
    println!("Testing Euler Brick Logic");
    println!("{}", "=".repeat(60));

    for (i, outcome) in report.outcomes.iter().enumerate() {
        let case = &outcome.case;
        println!("Test {}: {}", i + 1, case.description);
        println!("  Input:    {} + {}", case.first, case.second);
        println!("  Expected: {}", case.expected);
        println!("  Got:      {}", outcome.got);
        for (first, second) in &outcome.failed_permutations {
            println!("  Permuted: {} + {} disagreed", first, second);
        }
        println!(
            "  Status:   {}",
            if outcome.passed() { "PASS" } else { "FAIL" }
        );
        println!();
    }

    println!("{}", "=".repeat(60));
    println!(
        "Results: {}/{} tests passed",
        report.passed(),
        report.total()
    );

    if report.all_passed() {
        println!("All tests passed!");
    } else {
        println!("{} tests failed", report.total() - report.passed());
    }
}
