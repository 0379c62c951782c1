use std::iter::Peekable;

use super::classify::{LineClass, LineKind};

/// The lines belonging to one `outline:` header.
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    pub header: LineClass<'a>,
    pub body: Vec<LineClass<'a>>,
}

impl<'a> Segment<'a> {
    /// The name given on the header line, possibly empty.
    pub fn name(&self) -> &'a str {
        match self.header.kind {
            LineKind::Header(name) => name,
            _ => "",
        }
    }
}

/// Splits a stream of classified lines into one [`Segment`] per header.
///
/// A body runs until the next header at the same or a shallower indent, or
/// until a non-blank line indented less than its header. Lines indented the same as the header belong to it.
/// Lines outside any segment are skipped.
pub struct DocumentScanner<'a, I: Iterator<Item = LineClass<'a>>> {
    lines: Peekable<I>,
}

impl<'a, I: Iterator<Item = LineClass<'a>>> DocumentScanner<'a, I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
        }
    }
}

impl<'a, I: Iterator<Item = LineClass<'a>>> Iterator for DocumentScanner<'a, I> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = loop {
            let line = self.lines.next()?;
            if matches!(line.kind, LineKind::Header(_)) {
                break line;
            }
            if !line.is_blank() {
                log::trace!("line {}: outside any outline, skipped", line.number);
            }
        };

        let mut body = vec![];
        while let Some(line) = self
            .lines
            .next_if(|l| !ends_segment(&header, l))
        {
            body.push(line);
        }

        Some(Segment { header, body })
    }
}

/// An `outline:` line nested deeper than the current header is body text.
fn ends_segment(header: &LineClass<'_>, line: &LineClass<'_>) -> bool {
    match line.kind {
        LineKind::Blank => false,
        LineKind::Header(_) => line.indent <= header.indent,
        _ => line.indent < header.indent,
    }
}
