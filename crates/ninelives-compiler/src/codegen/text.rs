use super::Transpiler;
use crate::error::Result;
use crate::line::{LineKind, SourceLine};

impl Transpiler {
    /// Generate a `game.say` call for one paragraph of narrative text.
    ///
    /// Leading blank lines are consumed without output. The paragraph ends at
    /// the next blank line or at a line of another kind.
    pub(super) fn transpile_text<'a>(&mut self, lines: &'a [SourceLine]) -> Result<&'a [SourceLine]> {
        let start = lines
            .iter()
            .position(|line| !(line.is_kind(LineKind::Text) && line.is_blank()))
            .unwrap_or(lines.len());
        let lines = &lines[start..];

        if !lines.first().is_some_and(|line| line.is_kind(LineKind::Text)) {
            return Ok(lines);
        }

        let end = lines
            .iter()
            .position(|line| !line.is_kind(LineKind::Text) || line.is_blank())
            .unwrap_or(lines.len());

        self.output.push_str("game.say(`");
        for (i, line) in lines[..end].iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.output.push_str(line.content());
        }
        self.output.push_str("`);\n");

        Ok(&lines[end..])
    }
}
