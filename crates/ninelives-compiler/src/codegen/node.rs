use super::Transpiler;
use crate::error::{Result, TranspileError};
use crate::line::{LineKind, SourceLine};
use crate::scope::GLOBAL_SCOPE;
use std::fmt::Write as _;

impl Transpiler {
    /// Generate a node registration and its body.
    ///
    /// The body runs until the next node header or the end of input. The
    /// returned remainder starts at that header.
    pub(super) fn transpile_node<'a>(&mut self, lines: &'a [SourceLine]) -> Result<&'a [SourceLine]> {
        let Some((header, mut rest)) = lines.split_first() else {
            return Ok(lines);
        };

        let id = self.scope.resolve(parse_node_id(header)?);
        tracing::debug!(line = header.line_number(), id = %id, "transpiling node");

        write!(self.output, "\n/* {} */\n", header.content())?;
        write!(self.output, "game.gameNodes['{}'] =\n", id)?;
        write!(self.output, "new GameNode('{}').setExecFn(function(game, choice) {{\n", id)?;
        write!(self.output, "game.player.location = '{}';\n", id)?;
        write!(self.output, "game.scope = '{}';\n", self.scope.scope())?;

        while let Some(next) = rest.first() {
            if next.is_kind(LineKind::Node) {
                break;
            }
            rest = self.transpile_in_node(rest)?;
        }

        write!(self.output, "game.scope = '{}';\n", GLOBAL_SCOPE)?;
        self.output.push_str("});\n");

        Ok(rest)
    }
}

/// Extract the unqualified id from a `=id= title` header.
fn parse_node_id(line: &SourceLine) -> Result<&str> {
    if !line.is_kind(LineKind::Node) {
        return Err(TranspileError::bug(line.line_number(), "Expected node line."));
    }
    let Some(after) = line.content().strip_prefix('=') else {
        return Err(TranspileError::bug(
            line.line_number(),
            "Encountered node line that does not start with =.",
        ));
    };
    match after.find('=') {
        Some(end) => Ok(&after[..end]),
        None => Err(TranspileError::fatal(
            line.line_number(),
            "failed to parse an id from node line.",
        )),
    }
}
