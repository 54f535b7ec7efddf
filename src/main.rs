//! Justified Layout CLI
//!
//! Usage:
//!   justified-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -w, --width <N>        Target row width in grid units
//!   -c, --config <FILE>    Layout configuration file (TOML format)
//!   -d, --debug            Trace every row transition to stderr
//!   -r, --rows             Print one line of spans per row
//!   -l, --lint             Report degraded fit quality on stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use justified_layout::layout::lint;
use justified_layout::{Gallery, InputError, LayoutConfig};

#[derive(Parser)]
#[command(name = "justified-layout")]
#[command(about = "Lay out photo galleries into rows of equal width")]
struct Cli {
    /// Gallery file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Target row width; overrides the gallery's `width`
    #[arg(short, long)]
    width: Option<u32>,

    /// Layout configuration file (TOML format); overrides the gallery's `[layout]`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug mode: trace every row transition to stderr
    #[arg(short, long)]
    debug: bool,

    /// Print one line of spans per row
    #[arg(short, long)]
    rows: bool,

    /// Report fit-quality warnings on stderr
    #[arg(short, long)]
    lint: bool,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut gallery = match Gallery::from_str(&source) {
        Ok(g) => g,
        Err(e) => exit_with(&e, &source, &filename),
    };

    // Load layout configuration
    if let Some(path) = &cli.config {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        match LayoutConfig::from_str(&content) {
            Ok(config) => gallery = gallery.with_layout(config),
            Err(e) => exit_with(&e, &content, &path.display().to_string()),
        }
    }
    if cli.debug {
        gallery.layout.debug = true;
    }

    let width = match cli.width.or(gallery.width) {
        Some(w) if w > 0 => w,
        _ => {
            eprintln!("Error: a target width greater than zero is required (--width or `width` in the gallery)");
            std::process::exit(1);
        }
    };

    let arrangement = gallery.engine().arrange(width);

    if cli.rows {
        for row in arrangement.row_spans() {
            println!("{}", join(&row));
        }
    } else {
        println!("{}", join(&arrangement.spans()));
    }

    if cli.lint {
        for warning in lint::check(&arrangement, &gallery.layout, width) {
            eprintln!("warning: {}", warning);
        }
    }
}

fn exit_with(error: &InputError, source: &str, filename: &str) -> ! {
    eprintln!("Error: {}", error.format(source, filename));
    std::process::exit(1);
}

fn join(spans: &[u32]) -> String {
    spans
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_intro() {
    println!(
        r#"Justified Layout - lay out photo galleries into rows of equal width

USAGE:
    justified-layout [OPTIONS] [FILE]
    cat gallery.toml | justified-layout --width 12

OPTIONS:
    -w, --width <N>      Target row width in grid units
    -c, --config <FILE>  Layout configuration (TOML file)
    -d, --debug          Trace row transitions to stderr
    -r, --rows           Print one line of spans per row
    -l, --lint           Report degraded fit quality
    -h, --help           Print help

GALLERY FORMAT:
    width = 12

    [layout.landscape]
    width = 4
    min_width = 3
    max_width = 5

    [[items]]
    width = 4000
    height = 3000

Prints one span per item, in input order."#
    );
}
