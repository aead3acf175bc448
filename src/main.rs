//! cppify — transpile a typed script file to C++.
//!
//! Reads the input, parses it, emits C++ next to it (or to `-o`), and
//! optionally writes the JSON AST alongside.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use cppify::artifact::{ast_path, is_same_file, output_path, write_artifact};
use cppify::config::{load_config, load_config_from, Config};
use cppify::lang::{Compiler, CppEmitter};

#[derive(Debug, Parser)]
#[command(name = "cppify", version, about = "Transpile a typed script file to C++")]
struct Cli {
    /// Source file to transpile.
    input: PathBuf,

    /// Output file (defaults to the input with its extension replaced).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the JSON AST next to the input.
    #[arg(long)]
    emit_ast: bool,

    /// Print the JSON AST to stdout and skip C++ emission.
    #[arg(long, conflicts_with_all = ["output", "stdout"])]
    ast_only: bool,

    /// Print the C++ to stdout instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Config file (defaults to ~/.cppify/config.yaml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suppress status lines.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config: Config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => load_config(),
    };

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let program = Compiler::parse(&source)
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    let ast_json = program.to_json().context("serializing AST")?;
    if cli.ast_only {
        println!("{ast_json}");
        return Ok(());
    }

    let cpp = CppEmitter::new(config.emit_options())
        .emit(&program)
        .with_context(|| format!("emitting C++ for {}", cli.input.display()))?;

    if cli.stdout {
        print!("{cpp}");
    } else {
        let out = cli
            .output
            .clone()
            .unwrap_or_else(|| output_path(&cli.input, &config.output_extension));
        if is_same_file(&out, &cli.input) {
            bail!("output path {} would overwrite the input", out.display());
        }
        write_artifact(&out, &cpp).with_context(|| format!("writing {}", out.display()))?;
        if !cli.quiet {
            println!("transpiled {} -> {}", cli.input.display(), out.display());
        }
    }

    if cli.emit_ast || config.emit_ast {
        let path = ast_path(&cli.input, &config.ast_suffix);
        write_artifact(&path, &ast_json).with_context(|| format!("writing {}", path.display()))?;
        if !cli.quiet {
            println!("AST saved to {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
