//! Heading extraction from a sequence of document lines.
//!
//! The scanner walks lines in order and flips a single in-fence flag on every line that
//! contains the format's fence marker. The flip happens before the heading test, so a line
//! that closes a fence is itself eligible to be a heading. Fences do not nest; an unclosed
//! fence hides every heading after it.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::heading::Heading;
use std::iter::Enumerate;

/// Lazy iterator over the headings of a line sequence.
pub struct HeadingScanner<'f, I, F: ?Sized> {
    lines: Enumerate<I>,
    format: &'f F,
    in_fence: bool,
}

impl<'f, I, F> HeadingScanner<'f, I, F>
where
    I: Iterator,
    I::Item: AsRef<str>,
    F: Format + ?Sized,
{
    /// Start scanning `lines` with the heading syntax of `format`.
    pub fn new(lines: I, format: &'f F) -> Self {
        Self {
            lines: lines.enumerate(),
            format,
            in_fence: false,
        }
    }

    /// Whether the scan position is inside a fenced block.
    ///
    /// After the scanner is exhausted this reports an unbalanced fence.
    #[must_use]
    pub fn in_fence(&self) -> bool {
        self.in_fence
    }
}

impl<I, F> Iterator for HeadingScanner<'_, I, F>
where
    I: Iterator,
    I::Item: AsRef<str>,
    F: Format + ?Sized,
{
    type Item = Heading;

    fn next(&mut self) -> Option<Heading> {
        for (index, line) in self.lines.by_ref() {
            let line = line.as_ref();
            if line.contains(self.format.fence_marker()) {
                self.in_fence = !self.in_fence;
            }
            if self.in_fence {
                continue;
            }
            if let Some(caps) = self.format.heading_pattern().captures(line) {
                return Some(Heading {
                    location: index + 1,
                    level: caps[1].chars().count(),
                    text: caps[2].trim().to_string(),
                });
            }
        }
        None
    }
}

/// Scan any sequence of lines for headings in the given format.
#[must_use]
pub fn scan_headings<L, F>(lines: L, format: &F) -> HeadingScanner<'_, L::IntoIter, F>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
    F: Format + ?Sized,
{
    HeadingScanner::new(lines.into_iter(), format)
}

/// Collect the Markdown headings of a whole document in document order.
#[must_use]
pub fn extract_headings(source: &str) -> Vec<Heading> {
    scan_headings(source.lines(), &MarkdownFormat).collect()
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
