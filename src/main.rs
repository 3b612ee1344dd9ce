//! treecat - dump a folder as an ASCII tree plus its text file contents.
//!
//! Usage:
//!   tcat [PATH]              Print the dump to stdout
//!   tcat -o FILE [PATH]      Write the dump to a file
//!   tcat -v [PATH]           Raise log verbosity (repeatable)
//!   tcat --help              Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use treecat_render::render;
use treecat_scan::Walker;

#[derive(Parser)]
#[command(
    name = "treecat",
    version,
    about = "Dump a folder as an ASCII tree plus the contents of its text files",
    long_about = "treecat walks a folder and prints a single text document: an ASCII \
                  tree of its layout, followed by the contents of every recognized \
                  text file delimited by path and start/end markers.\n\n\
                  Well-known junk directories (.git, node_modules, target, ...) are \
                  skipped entirely. The dump goes to stdout; status lines go to stderr."
)]
struct Cli {
    /// Folder to dump (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Write the dump to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    eprintln!("Scanning {}...", cli.path.display());

    let walker = Walker::new();
    let tree = walker.walk(&cli.path).context("Scan failed")?;

    for warning in &tree.warnings {
        tracing::warn!("{}: {}", warning.path.display(), warning.message);
    }

    let dump = render(&tree);

    match &cli.output {
        Some(output_path) => {
            std::fs::write(output_path, &dump)
                .with_context(|| format!("Could not write {}", output_path.display()))?;
            eprintln!("Wrote {}", output_path.display());
        }
        None => {
            print!("{dump}");
        }
    }

    eprintln!(
        " {} files, {} directories - {}",
        tree.total_files(),
        tree.total_dirs(),
        format_size(dump.len() as u64)
    );
    eprintln!(" Scanned in {:.2}s", tree.walk_duration.as_secs_f64());

    if tree.has_warnings() {
        eprintln!(" {} warning(s) during scan", tree.warnings.len());
    }

    Ok(())
}

/// Route tracing diagnostics to stderr, level set by the -v count;
/// RUST_LOG overrides.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
