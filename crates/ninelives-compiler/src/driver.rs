/// Compiler driver that reads a story file and writes the generated module

use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::codegen::Transpiler;
use crate::error::{Result, TranspileError};
use crate::line::split_lines;

/// Compilation output structure
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Story file that was compiled
    pub source_file: PathBuf,
    /// Generated JavaScript module
    pub javascript: String,
}

impl CompileOutput {
    /// Write the generated module to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path.as_ref())?;
        file.write_all(self.javascript.as_bytes())?;
        Ok(())
    }
}

/// Options for compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Input story file
    pub input: PathBuf,
    /// Output file (optional; the caller prints the module when absent)
    pub output: Option<PathBuf>,
}

impl CompileOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }
}

/// The Nine Lives compiler
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Read and transpile the input file.
    pub fn compile(&self) -> Result<CompileOutput> {
        let source = self.read_source()?;
        tracing::info!("Compiling: {}", self.options.input.display());

        let javascript = Transpiler::new().transpile_lines(split_lines(&source))?;
        tracing::info!("Code generation successful: {} bytes", javascript.len());

        Ok(CompileOutput {
            source_file: self.options.input.clone(),
            javascript,
        })
    }

    /// Compile and write the module to the configured output, if any.
    pub fn run(&self) -> Result<CompileOutput> {
        let output = self.compile()?;
        if let Some(path) = &self.options.output {
            output.write_to(path)?;
            tracing::info!("Wrote {}", path.display());
        }
        Ok(output)
    }

    fn read_source(&self) -> Result<String> {
        if !self.options.input.exists() {
            return Err(TranspileError::FileNotFound(self.options.input.clone()));
        }

        std::fs::read_to_string(&self.options.input).map_err(TranspileError::from)
    }
}
