//! Command-line interface for autobind
//! Reads a C++ header and prints the `ClassDB` registration statements for
//! its public methods, ready to paste into `_bind_methods()`.
//!
//! Usage:
//!   autobind `<file>` [--config `<json>`] [-v...]
//!
//! `<file>` may name the header itself, the matching source file, or the
//! bare stem: `gd_lz4.cpp`, `gd_lz4.h` and `gd_lz4` all read `gd_lz4.h`.

use autobind_api::{
    header_path_for, BindConfig, BindResult, BindingEmitter, BindingParser, ParserMetrics,
};
use autobind_cpp::CppBinder;
use clap::{ArgAction, Parser};
use log::{debug, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "autobind",
    version,
    about = "Generate ClassDB registration code for the public methods of a C++ header"
)]
struct Cli {
    /// Header, source file or stem; the sibling header is read
    file: PathBuf,

    /// JSON configuration (suppression marker, emitted names, header extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("autobind: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> BindResult<()> {
    let config = match &cli.config {
        Some(path) => BindConfig::from_json_file(path)?,
        None => BindConfig::default(),
    };

    debug!(
        "reading {}",
        header_path_for(&cli.file, &config.header_extension).display()
    );

    let binder = CppBinder::with_config(config);
    let bindings = binder.parse_input(&cli.file)?;

    let stdout = io::stdout();
    BindingEmitter::new(binder.config()).emit(&bindings.methods, stdout.lock())?;

    info!("{}", summary(&binder.metrics()));
    Ok(())
}

/// One-line run summary for `-v`
fn summary(metrics: &ParserMetrics) -> String {
    format!(
        "{} methods from {} classes, {} suppressed, parsed in {:.2?}",
        metrics.total_methods,
        metrics.total_classes,
        metrics.total_suppressed,
        metrics.total_parse_time
    )
}

/// Log to stderr so stdout carries only generated code
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
