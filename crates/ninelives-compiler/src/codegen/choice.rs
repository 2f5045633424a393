use super::Transpiler;
use crate::error::{Result, TranspileError};
use crate::line::{LineKind, SourceLine, trim_control};
use crate::scope::ScopeResolver;
use std::fmt::Write as _;

/// Description used when a choice line names only its target.
const DEFAULT_DESCRIPTION: &str = "continue";

/// The argument shape of a single choice line
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChoiceForm<'a> {
    /// `>id description`
    Simple { description: &'a str },
    /// `>id description; expr`
    WithArg { description: &'a str, arg: &'a str },
    /// `>id ? condition; expr`
    Conditional { condition: &'a str, arg: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChoiceLine<'a> {
    id: &'a str,
    form: ChoiceForm<'a>,
}

impl<'a> ChoiceLine<'a> {
    fn parse(line: &'a SourceLine) -> Result<Self> {
        let content = line.content();
        let body = content.strip_prefix('>').unwrap_or(content);
        let (id, rest) = match body.split_once(' ') {
            Some((id, rest)) => (id, trim_control(rest)),
            None => (body, ""),
        };

        let form = if rest.is_empty() {
            ChoiceForm::Simple {
                description: DEFAULT_DESCRIPTION,
            }
        } else if let Some(conditional) = rest.strip_prefix('?') {
            let Some((condition, arg)) = conditional.split_once(';') else {
                return Err(TranspileError::fatal(
                    line.line_number(),
                    "conditional choice is missing ';'.",
                ));
            };
            ChoiceForm::Conditional {
                condition: trim_control(condition),
                arg: trim_control(arg),
            }
        } else if let Some((description, arg)) = rest.split_once(';') {
            ChoiceForm::WithArg {
                description: trim_control(description),
                arg: trim_control(arg),
            }
        } else {
            ChoiceForm::Simple { description: rest }
        };

        Ok(Self { id, form })
    }

    /// Render as one argument of `game.choose(...)`.
    ///
    /// Descriptions go into template literals; `arg` and `condition` are
    /// author-written JavaScript and are emitted unquoted.
    fn render(&self, scope: &ScopeResolver, out: &mut String) -> Result<()> {
        let id = scope.resolve(self.id);
        match self.form {
            ChoiceForm::Simple { description } => {
                write!(out, "game.choice(\"{}\", `{}`)", id, description)?;
            }
            ChoiceForm::WithArg { description, arg } => {
                write!(out, "game.choice(\"{}\", `{}`, {})", id, description, arg)?;
            }
            ChoiceForm::Conditional { condition, arg } => {
                write!(out, "({}) ? game.choice(\"{}\", {}) : false", condition, id, arg)?;
            }
        }
        Ok(())
    }
}

impl Transpiler {
    /// Generate one `game.choose(...)` call for a run of consecutive choices.
    pub(super) fn transpile_choice<'a>(&mut self, lines: &'a [SourceLine]) -> Result<&'a [SourceLine]> {
        let run = lines
            .iter()
            .take_while(|line| line.is_kind(LineKind::Choice))
            .count();
        let (choices, rest) = lines.split_at(run);

        self.output.push_str("game.choose(");
        for (i, line) in choices.iter().enumerate() {
            self.output.push('\n');
            ChoiceLine::parse(line)?.render(&self.scope, &mut self.output)?;
            if i + 1 < choices.len() {
                self.output.push(',');
            }
        }
        self.output.push_str(");\n");

        Ok(rest)
    }
}
