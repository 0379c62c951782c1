//! # Indentation
//!
//! Nesting depth is a function of *relative* indentation: a line is deeper
//! than another only if its leading whitespace is wider. No indent unit is
//! assumed, so a file indented with tabs and one indented with two spaces
//! produce the same structure.
//!
//! Width is measured in columns under an [`IndentPolicy`]. A tab advances to
//! the next tab stop instead of counting as one character, which keeps a
//! tab-indented line from looking shallower than a two-space sibling when a
//! file mixes both.

/// How leading whitespace is converted to a column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentPolicy {
    /// Distance between tab stops. Always at least 1.
    pub tab_width: usize,
}

impl IndentPolicy {
    pub const DEFAULT_TAB_WIDTH: usize = 4;

    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
        }
    }

    /// Measures the leading whitespace of `line`.
    ///
    /// Returns the indentation in columns and the byte offset where content
    /// starts.
    pub fn measure(&self, line: &str) -> (usize, usize) {
        let mut columns = 0;
        for (offset, c) in line.char_indices() {
            match c {
                '\t' => columns += self.tab_width - columns % self.tab_width,
                c if c.is_whitespace() => columns += 1,
                _ => return (columns, offset),
            }
        }
        (columns, line.len())
    }
}

impl Default for IndentPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TAB_WIDTH)
    }
}

/// Structural effect of one non-blank line on the open blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentEvent {
    /// Number of blocks closed because the line is shallower than them.
    pub closed: usize,
    /// True when the line is deeper than every block still open, i.e. it
    /// opens a new nesting level. False means it is a sibling of the block
    /// at the top of the stack.
    pub opened: bool,
}

/// Stack of indentation extents for the currently open blocks.
#[derive(Debug, Default, Clone)]
pub struct IndentTracker {
    extents: Vec<usize>,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the indentation of the next non-blank line.
    pub fn track(&mut self, extent: usize) -> IndentEvent {
        let mut closed = 0;
        while self.extents.last().is_some_and(|&top| extent < top) {
            self.extents.pop();
            closed += 1;
        }

        let opened = self.extents.last().is_none_or(|&top| extent > top);
        if opened {
            self.extents.push(extent);
        }

        IndentEvent { closed, opened }
    }

    /// Number of open nesting levels.
    pub fn depth(&self) -> usize {
        self.extents.len()
    }
}
