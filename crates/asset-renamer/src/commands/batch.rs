use asset_names::{AssetRecord, NameNormalizer, RenameEntry};
use colored::Colorize;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};

use crate::utils::{create_filter_pattern, normalize_asset_type, truncate_middle};

const MAX_NAME_LEN: usize = 60;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Default human-readable table format
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
    /// Simple flat list of new names only
    Flat,
}

pub struct BatchArgs {
    pub input: Option<String>,
    pub basename: String,
    pub pattern: Option<String>,
    pub changed_only: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct BatchOutput {
    basename: String,
    total_assets: usize,
    matched_assets: usize,
    renamed_assets: usize,
    renames: Vec<RenameEntry>,
}

pub fn batch(args: BatchArgs) -> eyre::Result<()> {
    let records = match &args.input {
        Some(path) => {
            tracing::info!("reading asset listing from {}", path);
            let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path))?;
            read_records(file)?
        }
        None => {
            tracing::debug!("reading asset listing from stdin");
            read_records(io::stdin().lock())?
        }
    };

    let filter_pattern = create_filter_pattern(args.pattern)?;
    let matched: Vec<AssetRecord> = records
        .iter()
        .filter(|record| match &filter_pattern {
            Some(regex) => regex.is_match(&record.name).unwrap_or(false),
            None => true,
        })
        .cloned()
        .collect();

    let normalizer = NameNormalizer::new();
    let mut renames = normalizer.plan(&args.basename, &matched);
    let renamed_assets = renames.iter().filter(|entry| entry.changed()).count();
    if args.changed_only {
        renames.retain(RenameEntry::changed);
    }

    tracing::info!(
        "{} of {} assets get a new name",
        renamed_assets,
        matched.len()
    );

    let output = BatchOutput {
        basename: args.basename,
        total_assets: records.len(),
        matched_assets: matched.len(),
        renamed_assets,
        renames,
    };

    match args.format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Csv => print_csv(&output)?,
        OutputFormat::Flat => print_flat(&output),
        OutputFormat::Table => print_table(&output),
    }

    Ok(())
}

/// Reads `asset_type,name` rows. Asset types are normalized the same way as
/// on the command line.
///
/// Errors name the data row, counted from 1 after the header.
fn read_records(reader: impl Read) -> eyre::Result<Vec<AssetRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<AssetRecord>().enumerate() {
        let mut record = row.wrap_err_with(|| format!("malformed asset row {}", index + 1))?;
        record.asset_type = normalize_asset_type(record.asset_type.trim());
        records.push(record);
    }
    Ok(records)
}

fn print_json(output: &BatchOutput) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

fn print_csv(output: &BatchOutput) -> eyre::Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());

    for entry in &output.renames {
        writer.serialize(entry)?;
    }

    writer.flush()?;
    Ok(())
}

fn print_flat(output: &BatchOutput) {
    for entry in &output.renames {
        println!("{}", entry.to);
    }
}

fn print_table(output: &BatchOutput) {
    println!(
        "{}: {}",
        "Basename".bright_cyan().bold(),
        if output.basename.is_empty() {
            "<none>".bright_black().to_string()
        } else {
            output.basename.bright_white().to_string()
        }
    );
    println!(
        "{}: {} ({} matched, {} renamed)",
        "Assets".bright_cyan().bold(),
        output.total_assets.to_string().bright_yellow(),
        output.matched_assets.to_string().bright_green(),
        output.renamed_assets.to_string().bright_green()
    );
    println!();

    println!(
        "{:14}  {:60}  {}",
        "TYPE".bright_blue().bold(),
        "CURRENT".bright_blue().bold(),
        "CANONICAL".bright_blue().bold()
    );
    println!("{}", "─".repeat(100).bright_black());

    for entry in &output.renames {
        let from = truncate_middle(&entry.from, MAX_NAME_LEN);
        let to = truncate_middle(&entry.to, MAX_NAME_LEN);
        let to_colored = if entry.changed() {
            to.bright_green().to_string()
        } else {
            to.bright_black().to_string()
        };

        println!(
            "{:14}  {:60}  {}",
            entry.asset_type.bright_magenta(),
            from,
            to_colored
        );
    }

    println!("{}", "─".repeat(100).bright_black());
    println!(
        "{} renames listed",
        output.renames.len().to_string().bright_green().bold()
    );
}
