/// Accumulates free-text lines into a description.
///
/// Lines are joined with `\n`. Interior blank lines are kept as empty lines;
/// blank lines at either end are trimmed.
#[derive(Debug, Default)]
pub struct DescriptionBuffer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> DescriptionBuffer<'a> {
    pub fn push_line(&mut self, line: &'a str) {
        self.lines.push(line);
    }

    pub fn push_blank(&mut self) {
        self.lines.push("");
    }

    pub fn finish(self) -> String {
        let start = self.lines.iter().position(|l| !l.is_empty());
        let end = self.lines.iter().rposition(|l| !l.is_empty());
        match (start, end) {
            (Some(start), Some(end)) => self.lines[start..=end].join("\n"),
            _ => String::new(),
        }
    }
}
