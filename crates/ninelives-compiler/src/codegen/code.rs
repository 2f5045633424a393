use super::Transpiler;
use crate::error::Result;
use crate::line::{LineKind, SourceLine};

impl Transpiler {
    /// Copy a run of `| statement` lines into the output unchanged.
    pub(super) fn transpile_code<'a>(
        &mut self,
        lines: &'a [SourceLine],
        indent: &str,
    ) -> Result<&'a [SourceLine]> {
        let run = lines
            .iter()
            .take_while(|line| line.is_kind(LineKind::Code))
            .count();

        for line in &lines[..run] {
            self.output.push_str(indent);
            self.output.push_str(strip_code_marker(line.content()));
            self.output.push('\n');
        }

        Ok(&lines[run..])
    }
}

/// Drop the `|` and the separator after it.
fn strip_code_marker(content: &str) -> &str {
    let mut chars = content.chars();
    chars.next();
    chars.next();
    chars.as_str()
}
