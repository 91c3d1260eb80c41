use clap::Parser;
use std::io::{self, Write};

use glyphgen::io_utils::{glyphgen_cli_error, io_cli_error, simple_cli_error};
use glyphgen::{Config, Generator, GlyphGenError};

/// Print C++ code registering the glyphs each language needs with ImGui.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Language codes, e.g. `en fr uk_UA`
    languages: Vec<String>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::from_env();
    let tables = config
        .load_tables()
        .map_err(|e| match (e, &config.tables_path) {
            (GlyphGenError::Io(err), Some(path)) => {
                io_cli_error("reading character tables", path, err)
            }
            (e, _) => glyphgen_cli_error("loading character tables", e),
        })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = Generator::new(&tables).generate(&mut out, &args.languages);
    out.flush()
        .map_err(|e| simple_cli_error(&format!("writing output: {e}")))?;
    result.map_err(|e| glyphgen_cli_error("generating glyph ranges", e))?;
    Ok(())
}
