use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use mic_cli::report::{ColumnSummary, NormalizeOutcome, ValidationReport, describe_normalization};
use mic_core::{Comparator, LevelTable, Mic, ValidationOptions};
use mic_ingest::{guess_mic_columns, read_csv_table, validate_frame, write_csv};

use crate::cli::{LevelsArgs, NormalizeArgs, ValidateArgs};
use crate::summary::apply_table_style;

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("validate", file = %args.input.display());
    let _guard = span.enter();

    let table = read_csv_table(&args.input)?;
    let df = table.to_dataframe()?;
    info!(
        rows = df.height(),
        columns = df.width(),
        "loaded {}",
        args.input.display()
    );

    let columns = if args.columns.is_empty() {
        let guessed = guess_mic_columns(&df);
        if guessed.is_empty() {
            warn!("no column holds only valid MICs; pass --column to choose columns");
        } else {
            info!(columns = ?guessed, "guessed MIC columns");
        }
        guessed
    } else {
        args.columns.clone()
    };

    let options = ValidationOptions::new()
        .with_drop_missing(args.na_rm)
        .with_keep_operators(args.keep_operators.into());
    let (cleaned, validations) = validate_frame(&df, &columns, &options)?;

    if let Some(path) = &args.output {
        write_csv(&cleaned, path).with_context(|| format!("write {}", path.display()))?;
        info!(rows = cleaned.height(), "wrote {}", path.display());
    }

    Ok(ValidationReport {
        source: args.input.clone(),
        rows: cleaned.height(),
        columns: validations
            .iter()
            .map(ColumnSummary::from_validation)
            .collect(),
        output: args.output.clone(),
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Vec<NormalizeOutcome> {
    args.values
        .iter()
        .map(|value| describe_normalization(value))
        .collect()
}

pub fn run_levels(args: &LevelsArgs) {
    let comparator: Option<Comparator> = args.comparator.map(Into::into);
    let levels: Vec<Mic> = (0..LevelTable::global().len())
        .filter_map(Mic::from_rank)
        .filter(|mic| comparator.is_none_or(|wanted| mic.comparator() == wanted))
        .collect();
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Level", "Comparator", "Magnitude"]);
    apply_table_style(&mut table);
    for mic in &levels {
        table.add_row(vec![
            mic.rank().to_string(),
            mic.to_string(),
            mic.comparator().as_str().to_string(),
            mic.magnitude_str().to_string(),
        ]);
    }
    println!("{table}");
    println!("{} levels", levels.len());
}
