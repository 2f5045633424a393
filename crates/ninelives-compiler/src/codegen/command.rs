use super::Transpiler;
use crate::error::Result;
use crate::line::{SourceLine, trim_control};
use std::fmt::Write as _;

/// A parsed `!name body` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Command<'a> {
    name: &'a str,
    body: &'a str,
}

impl<'a> Command<'a> {
    fn parse(content: &'a str) -> Self {
        let rest = content.strip_prefix('!').unwrap_or(content);
        match rest.split_once(' ') {
            Some((name, body)) => Self {
                name,
                body: trim_control(body),
            },
            None => Self { name: rest, body: "" },
        }
    }
}

impl Transpiler {
    /// Generate the statement for a single command line.
    ///
    /// `!img` shows an image, `!scope` changes the scope used for every
    /// following id, and any other name is a styled `sayWith` call.
    pub(super) fn transpile_command<'a>(&mut self, lines: &'a [SourceLine]) -> Result<&'a [SourceLine]> {
        let Some((line, rest)) = lines.split_first() else {
            return Ok(lines);
        };

        let cmd = Command::parse(line.content());
        match cmd.name {
            "img" => {
                write!(self.output, "game.img(\"{}\");\n", cmd.body)?;
            }
            "scope" => {
                tracing::debug!(line = line.line_number(), scope = cmd.body, "scope changed");
                self.scope.set_scope(cmd.body);
                write!(self.output, "game.scope = \"{}\";\n", cmd.body)?;
            }
            name => {
                write!(self.output, "game.sayWith(\"{}\", `{}`);\n", name, cmd.body)?;
            }
        }

        Ok(rest)
    }
}
