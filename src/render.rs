//! Rewriting heading lines to carry their numbers.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::heading::{NumberedHeading, RenderedHeading};

/// Build the replacement line for one heading.
///
/// Level 1 is canonicalised to a single marker; deeper levels keep their marker count and
/// gain the number between markers and text.
#[must_use]
pub fn render_line<F: Format + ?Sized>(heading: &NumberedHeading, format: &F) -> String {
    let level = heading.heading.level;
    let text = &heading.heading.text;
    if level <= 1 {
        format!("{} {text}", format.heading_marker())
    } else {
        let markers = format.heading_marker().to_string().repeat(level);
        format!("{markers} {} {text}", heading.number)
    }
}

/// Render every numbered heading in the given format.
#[must_use]
pub fn render_headings_as<I, F>(headings: I, format: &F) -> Vec<RenderedHeading>
where
    I: IntoIterator<Item = NumberedHeading>,
    F: Format + ?Sized,
{
    headings
        .into_iter()
        .map(|heading| {
            let rendered_text = render_line(&heading, format);
            RenderedHeading {
                heading,
                rendered_text,
            }
        })
        .collect()
}

/// Render every numbered heading as a Markdown heading line.
#[must_use]
pub fn render_headings<I>(headings: I) -> Vec<RenderedHeading>
where
    I: IntoIterator<Item = NumberedHeading>,
{
    render_headings_as(headings, &MarkdownFormat)
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
