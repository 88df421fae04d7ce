//! bionic-bold - Bionic reading for HTML files

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bionic_bold::{EmphasisMode, FileStore, Page, SettingsStore};

#[derive(Parser)]
#[command(name = "bionic-bold")]
#[command(version, about = "Bionic reading for HTML files", long_about = None)]
#[command(after_help = "EXAMPLES:
    bionic-bold page.html out.html             Emphasize with auto lengths
    bionic-bold --bold 2 page.html             Fixed 2 characters, print to stdout
    bionic-bold --revert out.html page.html    Strip emphasis again
    bionic-bold --messages page.html < msgs    Drive the page with JSON messages")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output HTML file (stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Emphasis mode: "auto" or a character count
    #[arg(short, long, value_name = "MODE")]
    bold: Option<EmphasisMode>,

    /// Settings file (bionicEnabled / boldCount JSON); --bold overrides its mode
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Remove existing emphasis instead of adding it
    #[arg(short, long, conflicts_with_all = ["bold", "settings", "messages"])]
    revert: bool,

    /// Read JSON requests from stdin, one per line, and print the responses
    #[arg(short, long)]
    messages: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "bionic_bold=warn" } else { "bionic_bold=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> bionic_bold::Result<()> {
    let mut page = Page::open(&cli.input)?;

    if cli.revert {
        let removed = page.revert();
        tracing::info!(markers = removed, "reverted {}", cli.input.display());
    } else if cli.messages {
        if let Some(mode) = cli.bold {
            page.set_mode(mode);
        }
        drive_with_messages(&mut page)?;
    } else if let Some(path) = &cli.settings {
        let mut settings = FileStore::new(path).load()?;
        if let Some(mode) = cli.bold {
            settings.bold_count = mode;
        }
        let stats = page.load_settings(&settings);
        log_applied(&cli.input, page.mode(), stats.words_emphasized);
    } else {
        page.set_mode(cli.bold.unwrap_or_default());
        let stats = page.apply();
        log_applied(&cli.input, page.mode(), stats.words_emphasized);
    }

    write_output(&page.to_html()?, cli.output.as_deref())
}

fn drive_with_messages(page: &mut Page) -> bionic_bold::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match page.handle_json(&line) {
            Ok(reply) => writeln!(out, "{reply}")?,
            Err(e) => tracing::warn!("ignoring message {line:?}: {e}"),
        }
    }
    Ok(())
}

fn log_applied(input: &Path, mode: EmphasisMode, words: usize) {
    tracing::info!(%mode, words, "emphasized {}", input.display());
}

fn write_output(html: &str, output: Option<&Path>) -> bionic_bold::Result<()> {
    match output {
        Some(path) => std::fs::write(path, html)?,
        None => std::io::stdout().lock().write_all(html.as_bytes())?,
    }
    Ok(())
}
