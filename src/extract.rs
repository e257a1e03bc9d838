//! Isolates one subsection's block from a content document.
//!
//! A subsection starts at the first line whose trimmed text is exactly `## <title>` and runs up
//! to, but not including, the next line that starts with `## `. If no such heading exists the
//! whole document is the block. Only default-locale documents follow this convention, so callers
//! pass alternate-locale text through untouched.
//!
//! The block is a slice of the input, so its lines keep their terminators exactly as written.

use std::ops::Range;

/// Marker that opens a subsection heading.
pub const SUBSECTION_MARKER: &str = "## ";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScanState {
    Outside,
    Inside,
    Done,
}

/// Lazy iterator over the lines of one subsection.
///
/// Lines are yielded without their terminators (`\n` or `\r\n`), in document order.
pub struct SubsectionLines<'a> {
    text: &'a str,
    cursor: usize,
    heading: String,
    state: ScanState,
    span: Option<Range<usize>>,
}

impl<'a> SubsectionLines<'a> {
    #[must_use]
    /// Scan `text` for the subsection titled `title`.
    pub fn new(text: &'a str, title: &str) -> Self {
        Self {
            text,
            cursor: 0,
            heading: format!("{SUBSECTION_MARKER}{title}"),
            state: ScanState::Outside,
            span: None,
        }
    }

    #[must_use]
    /// Byte range of the lines yielded so far, terminators included, or `None` before the heading
    /// is found.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    /// Next line and the byte offset it starts at.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let start = self.cursor;
        let rest = self.text.get(start..).filter(|rest| !rest.is_empty())?;
        let (raw, advance) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.cursor = start + advance;
        Some((start, raw.strip_suffix('\r').unwrap_or(raw)))
    }
}

impl<'a> Iterator for SubsectionLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                ScanState::Done => return None,
                ScanState::Outside => {
                    let Some((start, line)) = self.next_line() else {
                        self.state = ScanState::Done;
                        return None;
                    };
                    if line.trim() == self.heading {
                        self.state = ScanState::Inside;
                        self.span = Some(start..self.cursor);
                        return Some(line);
                    }
                }
                ScanState::Inside => match self.next_line() {
                    Some((_, line)) if !line.starts_with(SUBSECTION_MARKER) => {
                        if let Some(span) = self.span.as_mut() {
                            span.end = self.cursor;
                        }
                        return Some(line);
                    }
                    _ => {
                        self.state = ScanState::Done;
                        return None;
                    }
                },
            }
        }
    }
}

#[must_use]
/// The block for `title`, or `None` when `text` has no matching heading.
pub fn find_block<'a>(text: &'a str, title: &str) -> Option<&'a str> {
    let mut lines = SubsectionLines::new(text, title);
    for _ in lines.by_ref() {}
    lines.span().and_then(|span| text.get(span))
}

#[must_use]
/// Extract the block for `title` from `text`.
///
/// Returns `text` itself, byte for byte, when the heading is absent.
pub fn extract<'a>(text: &'a str, title: &str) -> &'a str {
    find_block(text, title).unwrap_or(text)
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
