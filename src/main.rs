//! minicheck command line interface
//!
//! Usage:
//!   minicheck [OPTIONS] [FILE]
//!
//! Examples:
//!   minicheck snippet.c                      # JSON analysis result
//!   minicheck --format report snippet.c      # Human-readable report
//!   echo '{"code": "int main(){}"}' | minicheck --request
//!   minicheck --serve                        # POST /analyze on 0.0.0.0:8080

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use minicheck::{analyze, decode_source, render_report, request::decode_request, server};

/// Lexical, syntax and semantic checker for a small C-like language
#[derive(Parser, Debug)]
#[command(name = "minicheck")]
#[command(version)]
#[command(about = "Lexical, syntax and semantic checker for a small C-like language", long_about = None)]
struct Cli {
    /// Source file to analyse (reads stdin when absent or `-`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Treat the input as a JSON request: {"code": "<source>"}
    #[arg(long)]
    request: bool,

    /// Output format
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Exit with status 1 when either check reports errors
    #[arg(long)]
    strict: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Serve `POST /analyze` over HTTP instead of analysing one input
    #[arg(long, value_name = "ADDR", num_args = 0..=1, default_missing_value = "0.0.0.0:8080")]
    serve: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Compact JSON analysis result
    Json,
    /// Indented JSON analysis result
    Pretty,
    /// Token table, statistics and rendered diagnostics
    Report,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    if let Some(addr) = cli.serve.as_deref() {
        server::serve(addr)?;
        return Ok(ExitCode::SUCCESS);
    }

    let input = read_input(cli.input.as_ref())?;

    let source = if cli.request {
        decode_request(&input).context("Rejected analysis request")?
    } else {
        input
    };

    debug!("Analysing code:\n{}", source);

    let start = Instant::now();
    let result = analyze(&source);

    info!("Analysed in {:?}", start.elapsed());
    info!(
        "Results: syntax={}, semantic={}",
        result.syntax_valid, result.semantic_valid
    );

    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string(&result)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&result)?,
        OutputFormat::Report => render_report(&result, &source, &input_name(cli.input.as_ref())),
    };
    println!("{}", output);

    if cli.strict && !result.is_valid() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let bytes = match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path))?
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        }
    };

    Ok(decode_source(&bytes))
}

fn input_name(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) if path.as_os_str() != "-" => path.to_string_lossy().into_owned(),
        _ => String::from("<stdin>"),
    }
}
