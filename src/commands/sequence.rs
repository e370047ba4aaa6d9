use crate::cli::SequenceArgs;
use crate::config::{Config, SequenceFormat};
use crate::core::egregore::generate_egregores;
use crate::core::partitions::partition_counts;
use crate::utils::error::{AppResult, positive};
use crate::utils::{OutputStyle, print_json};
use anyhow::Result;
use serde::Serialize;

/// One sequence entry; `partitions` is `None` once p(n) leaves 64 bits.
#[derive(Debug, PartialEq, Serialize)]
struct SequenceRow {
    index: u64,
    prime: u64,
    partitions: Option<u64>,
}

fn sequence_rows(count: u64) -> AppResult<Vec<SequenceRow>> {
    let egregores = generate_egregores(count)?;
    let counts = partition_counts(count)?;
    Ok(egregores
        .iter()
        .zip(counts)
        .map(|(eg, partitions)| SequenceRow {
            index: eg.index(),
            prime: eg.prime(),
            partitions,
        })
        .collect())
}

pub fn handle_sequence_command(config: &Config, args: &SequenceArgs) -> Result<()> {
    let count = positive(args.count, "count")?;
    let format = args.format.unwrap_or(config.general.sequence_format);

    match format {
        SequenceFormat::Simple => {
            for eg in &generate_egregores(count)? {
                println!("{}: {}", eg.index(), eg.prime());
            }
        }
        SequenceFormat::Table => {
            println!(
                "{:>5} | {:>5} | {:>10}",
                OutputStyle::header("Index"),
                OutputStyle::header("Prime"),
                OutputStyle::header("Partitions")
            );
            println!("{}", "-".repeat(30));
            for row in sequence_rows(count)? {
                let partitions = match row.partitions {
                    Some(p) => p.to_string(),
                    None => "overflow".to_string(),
                };
                println!(
                    "{:>5} | {:>5} | {:>10}",
                    OutputStyle::index(&row.index.to_string()),
                    OutputStyle::prime(&row.prime.to_string()),
                    partitions
                );
            }
        }
        SequenceFormat::Json => print_json(&sequence_rows(count)?)?,
    }

    Ok(())
}
