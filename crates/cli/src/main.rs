use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mutasi_parse::{CategoryRuleTable, StatementParser};

#[derive(Parser, Debug)]
#[command(
    name = "mutasi",
    version,
    about = "Convert extracted BCA mutasi text into a categorized spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statement text and write a categorized CSV
    Convert {
        /// Extracted statement text (UTF-8)
        input: PathBuf,

        /// Output file; defaults to a timestamped name next to the input
        #[arg(long)]
        out: Option<PathBuf>,

        /// Category rule table (TOML); the bundled table when omitted
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Print entries as JSON to stdout instead of writing a CSV
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            input,
            out,
            rules,
            json,
        } => convert(input, out, rules, json),
    }
}

fn convert(
    input: PathBuf,
    out: Option<PathBuf>,
    rules: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;

    let table = match rules {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading rules {}", path.display()))?;
            CategoryRuleTable::from_toml(&content)
                .with_context(|| format!("loading rules {}", path.display()))?
        }
        None => CategoryRuleTable::builtin(),
    };
    tracing::debug!(rules = table.len(), "category rule table loaded");

    let parser = StatementParser::new(table);
    let entries = parser.parse(&text);
    tracing::info!(entries = entries.len(), "statement parsed");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let out = out.unwrap_or_else(|| input.with_file_name(mutasi_export::download_file_name()));
    let file = std::fs::File::create(&out)
        .with_context(|| format!("creating {}", out.display()))?;
    mutasi_export::write_csv(&entries, file)?;
    println!("Wrote {} entries to {}", entries.len(), out.display());
    Ok(())
}
