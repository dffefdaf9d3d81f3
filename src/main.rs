//! tres2exr CLI - convert a Godot RFLOAT `.tres` heightmap to a `.exr` file.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use tres2exr::export::export_grid_exr;
use tres2exr::extract::extract_height_grid;

/// Convert a Godot RFLOAT .tres heightmap to a single-channel float EXR.
#[derive(Parser)]
#[command(name = "tres2exr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input .tres resource file.
    input: PathBuf,

    /// Output .exr image file.
    output: PathBuf,
}

fn main() {
    // Missing or surplus arguments print usage and exit 1; help and
    // version requests are not errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", err.render());
            std::process::exit(0);
        }
        Err(err) => {
            println!("{}", err.render());
            std::process::exit(1);
        }
    };

    let grid = extract_height_grid(&cli.input).unwrap_or_else(|e| {
        eprintln!("Error extracting heightmap: {}", e);
        std::process::exit(1);
    });

    export_grid_exr(&grid, &cli.output).unwrap_or_else(|e| {
        eprintln!("Error exporting EXR: {}", e);
        std::process::exit(1);
    });

    println!("Saved EXR to {}", cli.output.display());
}
