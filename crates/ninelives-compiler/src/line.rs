/// Line classification
///
/// Every physical line of a story file is one element whose kind is decided
/// by its leading character. Classification never fails: anything without a
/// recognised marker is narrative text.

use regex::Regex;
use std::sync::OnceLock;

/// The kind of a story line, keyed by its leading marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `=id= title` starts a new node.
    Node,
    /// `>id description` offers the player a choice.
    Choice,
    /// `| statement` is passed through as JavaScript.
    Code,
    /// `!name body` is a one-line directive.
    Command,
    /// `# ...` is dropped before transpilation.
    Comment,
    /// Everything else.
    Text,
}

impl LineKind {
    /// Kind implied by a leading character.
    pub fn for_marker(marker: char) -> Self {
        match marker {
            '=' => LineKind::Node,
            '>' => LineKind::Choice,
            '|' => LineKind::Code,
            '!' => LineKind::Command,
            '#' => LineKind::Comment,
            _ => LineKind::Text,
        }
    }
}

/// A classified line of story source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    kind: LineKind,
    content: String,
    line_number: usize,
}

impl SourceLine {
    /// Classify one raw line. `line_number` is 1-based.
    pub fn classify(line: &str, line_number: usize) -> Self {
        let Some(first) = line.chars().next() else {
            return Self::new(LineKind::Text, "", line_number);
        };

        // `\` escapes whatever marker follows it.
        if let Some(escaped) = line.strip_prefix('\\') {
            return Self::new(LineKind::Text, escaped, line_number);
        }

        // Only `=id=` with no space inside the id is a node header; lines such as
        // "== win ? 'happy' : 'sad'} days ahead" are text with one `=` removed.
        if first == '=' && !node_header_regex().is_match(line) {
            return Self::new(LineKind::Text, &line[1..], line_number);
        }

        Self::new(LineKind::for_marker(first), line, line_number)
    }

    fn new(kind: LineKind, content: &str, line_number: usize) -> Self {
        Self {
            kind,
            content: content.to_string(),
            line_number,
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn is_kind(&self, kind: LineKind) -> bool {
        self.kind == kind
    }

    /// True when nothing but spaces and control characters remain.
    pub fn is_blank(&self) -> bool {
        trim_control(&self.content).is_empty()
    }
}

fn node_header_regex() -> &'static Regex {
    static NODE_HEADER: OnceLock<Regex> = OnceLock::new();
    NODE_HEADER.get_or_init(|| Regex::new(r"^=[^ ]+=").expect("Invalid node header regex"))
}

/// Strip leading and trailing spaces and ASCII control characters.
///
/// Unicode whitespace such as U+00A0 is content and is kept.
pub fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Split story source into lines at `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not start another line.
pub fn split_lines(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&source[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&source[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < source.len() {
        lines.push(&source[start..]);
    }
    lines
}

/// Classify every line of `lines`, numbering from 1 and dropping comments.
pub fn classify_lines<I, S>(lines: I) -> Vec<SourceLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| SourceLine::classify(line.as_ref(), i + 1))
        .filter(|line| !line.is_kind(LineKind::Comment))
        .collect()
}
