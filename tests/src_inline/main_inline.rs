use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::CommandFactory;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("census_tissue_hist_main_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const SAMPLE: &str = r#"[
  {"species": "homo_sapiens", "census": "2025-01-30", "tissue": "lung", "is_primary": true, "n_cells": 1000},
  {"species": "homo_sapiens", "census": "2025-01-30", "tissue": "Lung", "is_primary": true, "n_cells": 2000},
  {"species": "homo_sapiens", "census": "2025-01-30", "tissue": "liver", "is_primary": false, "n_cells": 500},
  {"species": "homo_sapiens", "census": "2024-07-01", "tissue": "liver", "is_primary": true, "n_cells": 80}
]"#;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_plot_args() {
    let cli = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        "hist.json",
        "--species",
        "mus_musculus",
        "--primary",
        "all",
        "--census",
        "2024-07-01",
    ])
    .unwrap();
    let Command::Plot(args) = cli.command else {
        panic!("expected plot");
    };
    assert_eq!(args.species, Some(Species::MusMusculus));
    assert_eq!(args.primary, Some(PrimaryFilter::All));
    assert_eq!(args.census.as_deref(), Some("2024-07-01"));
    assert_eq!(args.elide_at, 15);
    assert!(args.out.is_none());
}

#[test]
fn test_parse_rejects_bad_primary() {
    let res = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        "hist.json",
        "--primary",
        "sometimes",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_reset_state_requires_state() {
    let res = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        "hist.json",
        "--reset-state",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_plot_writes_reports_and_state() {
    let dir = make_temp_dir();
    let data = dir.join("hist.json");
    fs::write(&data, SAMPLE).unwrap();
    let state = dir.join("state.json");
    let out = dir.join("out");

    let cli = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        data.to_str().unwrap(),
        "--state",
        state.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();
    run(cli.command).unwrap();

    let tsv = fs::read_to_string(out.join("hist.tsv")).unwrap();
    assert_eq!(tsv.lines().count(), 2);
    assert!(tsv.contains("Lung\tLung \t3000\t3.00k"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(stored["species"], "homo_sapiens");
    assert_eq!(stored["census"], "2025-01-30");
    assert_eq!(stored["isPrimary"], true);
}

#[test]
fn test_versions_command_runs() {
    let dir = make_temp_dir();
    let data = dir.join("hist.json");
    fs::write(&data, SAMPLE).unwrap();
    let cli = Cli::try_parse_from([
        "census-tissue-hist",
        "versions",
        "--data",
        data.to_str().unwrap(),
    ])
    .unwrap();
    run(cli.command).unwrap();
}

#[test]
fn test_missing_dataset_is_error() {
    let dir = make_temp_dir();
    let cli = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        dir.join("absent.json").to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(run(cli.command), Err(AppError::Input(_))));
}

#[test]
fn test_plot_with_max_elide_at_keeps_full_names() {
    let dir = make_temp_dir();
    let data = dir.join("hist.json");
    fs::write(
        &data,
        r#"[{"species": "homo_sapiens", "census": "2025-01-30", "tissue": "gastrointestinal system", "is_primary": true, "n_cells": 10}]"#,
    )
    .unwrap();
    let out = dir.join("out");
    let max = usize::MAX.to_string();
    let cli = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        data.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--elide-at",
        &max,
    ])
    .unwrap();
    run(cli.command).unwrap();

    let tsv = fs::read_to_string(out.join("hist.tsv")).unwrap();
    assert!(tsv.contains("Gastrointestinal System\tGastrointestinal System \t10\t10"));
}

#[test]
fn test_plot_cell_count_overflow_is_error() {
    let dir = make_temp_dir();
    let data = dir.join("hist.json");
    let max = u64::MAX;
    fs::write(
        &data,
        format!(
            r#"[
  {{"species": "homo_sapiens", "census": "2025-01-30", "tissue": "lung", "is_primary": true, "n_cells": {max}}},
  {{"species": "homo_sapiens", "census": "2025-01-30", "tissue": "Lung", "is_primary": true, "n_cells": 1}}
]"#
        ),
    )
    .unwrap();
    let cli = Cli::try_parse_from([
        "census-tissue-hist",
        "plot",
        "--data",
        data.to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(run(cli.command), Err(AppError::Pipeline(_))));
}
