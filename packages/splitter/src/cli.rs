//! Command-line interface for the splitter.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;

use crate::error::{Result, SplitterError};
use crate::sink::{DirectorySink, MemorySink};
use crate::splitter::Splitter;
use crate::types::SplitSummary;

/// Split a stream of `===== name =====` sections into separate files.
#[derive(Parser, Debug)]
#[command(name = "segment-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file (default: standard input, also selected by "-")
    pub input: Option<PathBuf>,

    /// Directory to write files into (default: working directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// List the files that would be written without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print every file written
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Input file to read, or `None` for standard input.
    fn input_file(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(&Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    // Fail on a bad output directory before consuming any input
    let sink = match &cli.output_dir {
        Some(dir) => DirectorySink::existing(dir)?,
        None => DirectorySink::default(),
    };

    let input = open_input(cli)?;

    if cli.dry_run {
        let mut splitter = Splitter::new(MemorySink::new());
        let summary = splitter.split(input)?;
        print_dry_run(&splitter.into_sink(), sink.root(), &summary);
        return Ok(());
    }

    let summary = Splitter::new(sink).split(input)?;
    tracing::info!(
        flushed = summary.flushed.len(),
        files = summary.distinct_files(),
        "Split complete"
    );

    if cli.verbose {
        for record in &summary.flushed {
            println!(
                "{} {} ({} lines, {} bytes)",
                style("Wrote").green().bold(),
                record.path.display(),
                record.lines,
                record.bytes
            );
        }
    }

    Ok(())
}

fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>> {
    let Some(path) = cli.input_file() else {
        return Ok(Box::new(io::stdin().lock()));
    };

    let file = File::open(path).map_err(|source| SplitterError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn print_dry_run(sink: &MemorySink, root: &Path, summary: &SplitSummary) {
    println!(
        "{} {} file(s), nothing written",
        style("Would write").bold(),
        sink.files().len()
    );
    for (name, content) in sink.files() {
        println!(
            "  {} ({} bytes)",
            style(root.join(name).display()).cyan(),
            content.len()
        );
    }
    if summary.discarded_lines > 0 {
        println!(
            "{} {} line(s) before the first marker",
            style("Discarded").yellow().bold(),
            summary.discarded_lines
        );
    }
}
