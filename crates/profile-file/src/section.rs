use crate::header::{SectionHeader, is_header_line};
use std::ops::Range;

/// A section located in a line sequence. `range` covers the header line and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: SectionHeader,
    pub range: Range<usize>,
}

impl Section {
    /// Body lines of the section, without the header.
    pub fn body<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.range.start + 1..self.range.end]
    }
}

/// Index of the first line starting with `prefix`.
pub fn find_header<S: AsRef<str>>(lines: &[S], prefix: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().starts_with(prefix))
}

/// End (exclusive) of the section whose header sits at `header`: the next line opening a
/// section, or the end of the sequence.
pub fn section_end<S: AsRef<str>>(lines: &[S], header: usize) -> usize {
    lines[header + 1..]
        .iter()
        .position(|line| is_header_line(line.as_ref()))
        .map_or(lines.len(), |offset| header + 1 + offset)
}

/// Line range of the first section whose header starts with `prefix`.
pub fn section_range<S: AsRef<str>>(lines: &[S], prefix: &str) -> Option<Range<usize>> {
    let start = find_header(lines, prefix)?;
    Some(start..section_end(lines, start))
}

/// All parseable sections in file order. Lines before the first header and bracket lines
/// that do not parse as headers belong to no section.
pub fn sections<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            SectionHeader::parse(line.as_ref()).map(|header| Section {
                header,
                range: idx..section_end(lines, idx),
            })
        })
        .collect()
}

/// Splits a body line into a trimmed `(key, value)` pair. Comments and blank lines yield `None`.
pub fn property<S: AsRef<str> + ?Sized>(line: &S) -> Option<(&str, &str)> {
    let line = line.as_ref().trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
