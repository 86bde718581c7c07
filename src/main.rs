//! wikimeta - link and outline index for parsed Markdown documents

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use wikimeta::{CompileConfig, Node, OutputFormat, compile_with, slugify, transform};

#[derive(Parser)]
#[command(name = "wikimeta")]
#[command(version, about = "Link and outline index for parsed Markdown documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    wikimeta notes.json                    Index an mdast tree dumped as JSON
    wikimeta - --filename notes.md         Read the tree from stdin
    wikimeta notes.json --format json      Emit the reconciled index as JSON")]
struct Cli {
    /// mdast tree as JSON ("-" for stdin)
    #[arg(value_name = "TREE")]
    input: String,

    /// Source document filename used for root heading checks
    /// [default: input file stem + ".md"]
    #[arg(short, long)]
    filename: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Path marker character
    #[arg(short, long, default_value_t = wikimeta::compile::DEFAULT_MARKER)]
    marker: char,

    /// Suppress warning lines
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Lines,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Lines => OutputFormat::Lines,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = read_input(&cli.input)?;
    let tree = Node::from_json(&json).map_err(|e| e.to_string())?;

    let filename = cli
        .filename
        .clone()
        .unwrap_or_else(|| default_filename(&cli.input));
    let doc = transform(&tree, &filename);

    let config = CompileConfig::new()
        .with_marker(cli.marker)
        .with_format(cli.format.into());
    let compiled = compile_with(&doc, &config, &slugify).map_err(|e| e.to_string())?;

    if !cli.quiet {
        for line in compiled.warning_lines() {
            eprintln!("{line}");
        }
    }
    if !compiled.text.is_empty() {
        println!("{}", compiled.text);
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String, String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("stdin: {e}"))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("{input}: {e}"))
    }
}

fn default_filename(input: &str) -> String {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| *s != "-")
        .unwrap_or("stdin");
    format!("{stem}.md")
}
