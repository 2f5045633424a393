/// Code generation module
///
/// Transforms classified story lines into JavaScript for the Nine Lives game
/// runtime. Each line kind has a handler that consumes a prefix of the
/// remaining lines, appends to the output buffer and hands back the rest.

mod choice;
mod code;
mod command;
mod node;
mod text;

use crate::error::{Result, TranspileError};
use crate::line::{LineKind, SourceLine, classify_lines};
use crate::scope::{GLOBAL_SCOPE, ScopeResolver};
use std::fmt::Write as _;

/// Imports every generated story module starts with.
pub const RUNTIME_IMPORTS: &str = concat!(
    "import {game, back, visited, GameNode} from \"./game.js\";\n",
    "import {story} from \"./story.js\";\n",
);

/// Where the dispatcher currently is in the story structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Outside any node.
    TopLevel,
    /// Inside the body of a node.
    InNode,
}

/// JavaScript generator for one story file
pub struct Transpiler {
    /// Scope used to qualify node ids
    scope: ScopeResolver,
    /// Output buffer
    output: String,
}

impl Default for Transpiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Transpiler {
    pub fn new() -> Self {
        Self {
            scope: ScopeResolver::new(),
            output: String::new(),
        }
    }

    /// Classify raw source lines and transpile them.
    pub fn transpile_lines<I, S>(self, lines: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = classify_lines(lines);
        self.transpile(&lines)
    }

    /// Generate the full module for already classified lines.
    ///
    /// `lines` must not contain comments; [`classify_lines`] removes them.
    pub fn transpile(mut self, lines: &[SourceLine]) -> Result<String> {
        tracing::debug!(lines = lines.len(), "transpiling story");

        self.output.push_str(RUNTIME_IMPORTS);

        let mut rest = lines;
        while !rest.is_empty() {
            rest = self.transpile_top_level(rest)?;
        }

        // The resolver keeps its scope; only the generated program is reset.
        write!(self.output, "game.scope = \"{}\";", GLOBAL_SCOPE)?;

        tracing::debug!(
            bytes = self.output.len(),
            scope = self.scope.scope(),
            "transpilation finished"
        );
        Ok(self.output)
    }

    fn transpile_top_level<'a>(&mut self, lines: &'a [SourceLine]) -> Result<&'a [SourceLine]> {
        self.dispatch(lines, Level::TopLevel)
    }

    fn transpile_in_node<'a>(&mut self, lines: &'a [SourceLine]) -> Result<&'a [SourceLine]> {
        self.dispatch(lines, Level::InNode)
    }

    /// Route the next line to its handler and return what the handler left.
    fn dispatch<'a>(&mut self, lines: &'a [SourceLine], level: Level) -> Result<&'a [SourceLine]> {
        let Some(line) = lines.first() else {
            return Ok(lines);
        };

        tracing::trace!(
            line = line.line_number(),
            kind = ?line.kind(),
            ?level,
            "dispatching"
        );

        match (line.kind(), level) {
            (LineKind::Node, Level::TopLevel) => self.transpile_node(lines),
            (LineKind::Node, Level::InNode) => Err(TranspileError::bug(
                line.line_number(),
                "Nested nodes are not possible!",
            )),
            (LineKind::Command, _) => self.transpile_command(lines),
            (LineKind::Code, _) => self.transpile_code(lines, ""),
            (LineKind::Choice, Level::InNode) => self.transpile_choice(lines),
            (LineKind::Choice, Level::TopLevel) => Err(TranspileError::fatal(
                line.line_number(),
                "Choice (>) found before the beginning of a node.",
            )),
            (LineKind::Text, _) => self.transpile_text(lines),
            (LineKind::Comment, _) => Err(TranspileError::bug(
                line.line_number(),
                "unhandled line type.",
            )),
        }
    }
}
