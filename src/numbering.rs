//! Hierarchical numbering of headings.
//!
//! Level 1 headings are front matter and stay unnumbered. Every deeper heading bumps the
//! counter of its own level and zeroes the counters below it, so a heading's number depends
//! only on the levels seen before it.

use crate::heading::{Heading, NumberedHeading};

/// Deepest heading level that takes part in numbering.
pub const MAX_LEVEL: usize = 6;

/// Per-level counters for one numbering run.
#[derive(Default)]
struct Counters([usize; MAX_LEVEL]);

impl Counters {
    fn next_number(&mut self, level: usize) -> String {
        if level <= 1 {
            return String::new();
        }
        let level = level.min(MAX_LEVEL);
        self.0[level - 1] += 1;
        self.0[level..].fill(0);

        // Skipped levels still hold zero and are left out, so `## A` then `#### B` gives B
        // the number `1.1`.
        let parts: Vec<String> = self.0[1..level]
            .iter()
            .filter(|&&count| count > 0)
            .map(ToString::to_string)
            .collect();
        let mut number = parts.join(".");
        if parts.len() == 1 {
            number.push('.');
        }
        number
    }
}

/// Number every heading in document order.
///
/// The counters live only for the duration of this call.
#[must_use]
pub fn assign_numbers<I>(headings: I) -> Vec<NumberedHeading>
where
    I: IntoIterator<Item = Heading>,
{
    let mut counters = Counters::default();
    headings
        .into_iter()
        .map(|heading| {
            let number = counters.next_number(heading.level);
            NumberedHeading { heading, number }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/numbering.rs"]
mod tests;
