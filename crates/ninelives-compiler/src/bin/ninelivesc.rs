/// Nine Lives compiler CLI

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use ninelives_compiler::{CompileOptions, Compiler};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ninelivesc")]
#[command(about = "Nine Lives compiler - transpiles story files into JavaScript for the game runtime")]
#[command(version)]
struct Args {
    /// Input story file
    #[arg(long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Output JavaScript file (printed to stdout when omitted)
    #[arg(long = "out", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the full error chain on failure
    #[arg(long)]
    debug: bool,

    /// Log progress (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        if args.debug {
            eprintln!("Compilation failed: {:?}", e);
        } else {
            eprintln!("Compilation failed: {:#}", e);
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut options = CompileOptions::new(&args.input);
    if let Some(output) = &args.output {
        options = options.output(output);
    }

    let compiler = Compiler::new(options);
    let output = compiler
        .run()
        .with_context(|| format!("failed to compile {}", args.input.display()))?;

    if args.output.is_none() {
        print!("{}", output.javascript);
    }
    Ok(())
}
