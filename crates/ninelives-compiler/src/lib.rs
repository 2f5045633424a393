/// Nine Lives compiler
///
/// Transpiles Nine Lives story files, one story element per line, into
/// JavaScript modules for the Nine Lives game runtime.

pub mod codegen;
pub mod driver;
pub mod error;
pub mod line;
pub mod scope;

pub use codegen::{Level, RUNTIME_IMPORTS, Transpiler};
pub use driver::{CompileOptions, CompileOutput, Compiler};
pub use error::{Result, TranspileError};
pub use line::{LineKind, SourceLine, classify_lines, split_lines};
pub use scope::{GLOBAL_SCOPE, ScopeResolver};

/// Transpile story source held in memory.
pub fn transpile_source(source: &str) -> Result<String> {
    Transpiler::new().transpile_lines(split_lines(source))
}
