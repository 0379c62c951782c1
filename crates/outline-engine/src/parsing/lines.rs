/// A reference to a single line of input with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

/// Returns an iterator over the lines of `input`.
///
/// A trailing newline does not produce an extra empty line.
pub fn lines_with_numbers(input: &str) -> impl Iterator<Item = LineRef<'_>> {
    input.lines().enumerate().map(|(i, text)| LineRef {
        number: i + 1,
        text,
    })
}
