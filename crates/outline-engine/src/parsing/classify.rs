use std::sync::OnceLock;

use regex::Regex;

use super::{indent::IndentPolicy, lines::LineRef};

/// The closed vocabulary of section keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Functions,
    Types,
    Methods,
    Fields,
    Operators,
    Examples,
    Params,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Functions,
        SectionKind::Types,
        SectionKind::Methods,
        SectionKind::Fields,
        SectionKind::Operators,
        SectionKind::Examples,
        SectionKind::Params,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            SectionKind::Functions => "functions",
            SectionKind::Types => "types",
            SectionKind::Methods => "methods",
            SectionKind::Fields => "fields",
            SectionKind::Operators => "operators",
            SectionKind::Examples => "examples",
            SectionKind::Params => "params",
        }
    }

    /// Exact, case-sensitive match of a bare keyword (colon already removed).
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == word)
    }
}

/// What a line is, judged from its own content only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `outline: <name>`. The name may be empty; the assembler rejects that.
    Header(&'a str),
    /// `path: <value>`
    Path(&'a str),
    Section(SectionKind),
    /// Anything else: an entity declaration or description text, depending
    /// on where it appears.
    Text,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub number: usize,
    /// Indentation in columns under the active [`IndentPolicy`].
    pub indent: usize,
    /// Line content with surrounding whitespace removed.
    pub content: &'a str,
    pub kind: LineKind<'a>,
}

impl LineClass<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineLineClassifier {
    policy: IndentPolicy,
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE_REGEX: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE_REGEX.get_or_init(|| {
        Regex::new(r"^(outline|path):(.*)$").expect("Invalid directive regex")
    })
}

impl OutlineLineClassifier {
    pub fn new(policy: IndentPolicy) -> Self {
        Self { policy }
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Directives win over keywords, and anything unrecognized is `Text`;
    /// classification never fails.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text: &'a str = lr.text;
        let (indent, offset) = self.policy.measure(text);
        let content = text[offset..].trim_end();

        LineClass {
            number: lr.number,
            indent,
            content,
            kind: classify_content(content),
        }
    }
}

fn classify_content(content: &str) -> LineKind<'_> {
    if content.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = directive_regex().captures(content) {
        let value = caps.get(2).map_or("", |m| m.as_str().trim());
        return match &caps[1] {
            "outline" => LineKind::Header(value),
            _ => LineKind::Path(value),
        };
    }

    let word = content.strip_suffix(':').unwrap_or(content);
    match SectionKind::from_keyword(word) {
        Some(kind) => LineKind::Section(kind),
        None => LineKind::Text,
    }
}
