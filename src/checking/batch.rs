//! Checking many pairs at once

use crate::error::CheckError;
use crate::models::{BatchEntry, CheckerApp};
use crate::parsing::split_pair_line;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Returns `true` for lines that hold no pair
fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{wide_bar} {pos}/{len} ({eta})") {
        pb.set_style(style.progress_chars("=>="));
    }
    pb
}

/// Checks every pair line of `text` in parallel
///
/// Each non-blank line not starting with `#` must hold two triples separated by
/// `;` or `|`. Lines go through the same input gate as [`CheckerApp::evaluate`].
/// Entries come back in input order.
#[instrument(skip(app, text))]
pub fn check_batch(app: &CheckerApp, text: &str, show_progress: bool) -> Vec<BatchEntry> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    let pb = if show_progress {
        progress_bar(lines.len())
    } else {
        ProgressBar::hidden()
    };

    let entries: Vec<BatchEntry> = lines
        .par_iter()
        .map(|&(line, content)| BatchEntry {
            line,
            outcome: match split_pair_line(content) {
                Some((first, second)) => app.evaluate(first, second),
                None => Err(CheckError::Unparseable),
            },
        })
        .progress_with(pb.clone())
        .collect();

    pb.finish_and_clear();
    info!(lines = entries.len(), "batch checked");
    entries
}

/// Reads `path` and checks it with [`check_batch`]
pub fn check_batch_file(
    app: &CheckerApp,
    path: impl AsRef<Path>,
    show_progress: bool,
) -> io::Result<Vec<BatchEntry>> {
    let text = fs::read_to_string(path)?;
    Ok(check_batch(app, &text, show_progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_and_blanks() {
        let text = "# header\n\n(44,117,125); (117,240,267)\n   \n6,8,10 | 8,15,17\n";
        let entries = check_batch(&CheckerApp::default(), text, false);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line, 3);
        assert!(entries[0].outcome.as_ref().unwrap().is_euler());
        assert_eq!(entries[1].line, 5);
        assert!(!entries[1].outcome.as_ref().unwrap().is_euler());
    }

    #[test]
    fn test_missing_separator_is_unparseable() {
        let entries = check_batch(&CheckerApp::default(), "3,4,5 4,3,5", false);
        assert_eq!(entries[0].outcome, Err(CheckError::Unparseable));
    }

    #[test]
    fn test_keeps_input_order() {
        let text: String = (0..200)
            .map(|i| {
                if i % 2 == 0 {
                    "44,117,125; 117,240,267\n"
                } else {
                    "3,4,5; 3,4,5\n"
                }
            })
            .collect();
        let entries = check_batch(&CheckerApp::default(), &text, false);

        assert_eq!(entries.len(), 200);
        for (idx, entry) in entries.iter().enumerate() {
            assert_eq!(entry.line, idx + 1);
            assert_eq!(entry.outcome.is_ok(), idx % 2 == 0);
        }
    }
}
