//! Panelgrid CLI
//!
//! Usage:
//!   panelgrid [FILE]
//!
//! Reads a layout spec in TOML form from FILE (or stdin) and prints
//! the solved layout: figure size, panel boxes, colorbar boxes, and
//! axis-sharing hints.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use panelgrid::{compute_layout, LayoutSpec};

#[derive(Parser)]
#[command(name = "panelgrid")]
#[command(about = "Exact panel-grid layout solver for publication figures")]
struct Cli {
    /// Layout spec file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Show an annotated example spec
    #[arg(short, long)]
    example: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.example {
        print_example();
        return;
    }

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let content = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let spec = match LayoutSpec::from_toml(&content) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match compute_layout(&spec) {
        Ok(layout) => {
            print!("{}", layout.report());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Panelgrid - exact panel-grid layout solver for publication figures

USAGE:
    panelgrid [FILE]
    cat spec.toml | panelgrid

OPTIONS:
    -e, --example      Show an annotated example spec
    -h, --help         Print help

A layout spec is a TOML file naming a grid shape, two of width, height,
and aspect, padding, and an optional colorbar configuration. Run
--example for a complete spec."#
    );
}

fn print_example() {
    println!(
        r#"# Example panelgrid spec: a 2x3 grid, 8 in wide, with one shared
# colorbar along the bottom edge.

rows = 2
cols = 3
width = 8.0          # inches; set exactly two of width/height/aspect
aspect = 0.618       # panel height / width

top_pad = 0.25       # inches between figure edge and panels
bottom_pad = 0.25
left_pad = 0.25
right_pad = 0.25
internal_pad = 0.33  # or a pair: [horizontal, vertical]

cbar_mode = "single"     # "single", "edge", or "each"; omit for none
cbar_location = "bottom" # "top", "bottom", "left", or "right"
cbar_thickness = 0.125
cbar_short_side_pad = 0.0
cbar_long_side_pad = 0.5

sharex = "all"       # "all", "row", "col", "none", or a bool
sharey = "all""#
    );
}
