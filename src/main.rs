mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod state;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_dataset};
use crate::model::policy::DisplayPolicy;
use crate::model::record::{CensusVersion, Species};
use crate::model::selection::{PrimaryFilter, Selection};
use crate::pipeline::{HistCache, PipelineError};
use crate::report::text::render_report_text;
use crate::report::{ReportError, write_reports};
use crate::state::selection::{
    SelectionOverrides, clear_selection, persist_selection, resolve_selection,
};
use crate::state::{FileStore, MemoryStore, StateError, StateStore};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Per-tissue cell counts from CELLxGENE Census records"
)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce the dataset for one selection and write the chart inputs
    Plot(PlotArgs),
    /// List census releases with per-release totals
    Versions(VersionsArgs),
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Dataset JSON (optionally .gz)
    #[arg(long)]
    data: PathBuf,

    /// homo_sapiens | mus_musculus
    #[arg(long)]
    species: Option<Species>,

    /// Census release, e.g. 2025-01-30 (defaults to the latest)
    #[arg(long)]
    census: Option<String>,

    /// all | primary | secondary
    #[arg(long)]
    primary: Option<PrimaryFilter>,

    /// JSON file holding the last selection
    #[arg(long)]
    state: Option<PathBuf>,

    /// Forget the stored selection before resolving this one
    #[arg(long, requires = "state")]
    reset_state: bool,

    /// Write hist.json, hist.tsv and report.txt here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Maximum visible label length before eliding
    #[arg(long, default_value_t = DisplayPolicy::default_v1().elide_at)]
    elide_at: usize,
}

#[derive(Args, Debug)]
struct VersionsArgs {
    /// Dataset JSON (optionally .gz)
    #[arg(long)]
    data: PathBuf,

    #[arg(long, default_value = "homo_sapiens")]
    species: Species,

    #[arg(long, default_value = "all")]
    primary: PrimaryFilter,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Plot(args) => run_plot(args),
        Command::Versions(args) => run_versions(args),
    }
}

fn run_plot(args: PlotArgs) -> Result<(), AppError> {
    let dataset = load_dataset(&args.data)?;

    let mut store: Box<dyn StateStore> = match &args.state {
        Some(path) => Box::new(FileStore::open(path)?),
        None => Box::new(MemoryStore::new()),
    };
    if args.reset_state {
        clear_selection(store.as_mut())?;
    }
    let overrides = SelectionOverrides {
        species: args.species,
        census: args.census.as_deref().map(CensusVersion::from),
        primary: args.primary,
    };
    let selection = resolve_selection(store.as_ref(), &dataset.versions, &overrides)?;
    persist_selection(store.as_mut(), &selection)?;
    if !dataset.versions.contains(&selection.census) {
        tracing::warn!(census = %selection.census, "census not present in dataset");
    }

    let policy = DisplayPolicy::default_v1().with_elide_at(args.elide_at);
    let mut cache = HistCache::new(&dataset.records, policy);
    let view = cache.view(&selection)?;

    match &args.out {
        Some(out_dir) => {
            let paths = write_reports(view, out_dir)?;
            for path in [&paths.json, &paths.tsv, &paths.text] {
                println!("{}", path.display());
            }
        }
        None => print!("{}", render_report_text(view)),
    }
    Ok(())
}

fn run_versions(args: VersionsArgs) -> Result<(), AppError> {
    let dataset = load_dataset(&args.data)?;
    let mut cache = HistCache::new(&dataset.records, DisplayPolicy::default_v1());

    println!("census\ttissues\tcells");
    for census in dataset.versions.iter() {
        let selection = Selection::new(args.species, census.clone(), args.primary);
        let view = cache.view(&selection)?;
        println!("{}\t{}\t{}", census, view.bars.len(), view.total_text);
    }
    tracing::debug!(views = cache.cached_views(), "computed per-release views");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
