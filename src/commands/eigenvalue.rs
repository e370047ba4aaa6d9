use crate::cli::EigenvalueArgs;
use crate::commands::ensure_enumerable;
use crate::config::Config;
use crate::core::egregore::prime_eigenvalue;
use crate::utils::OutputStyle;
use crate::utils::error::positive;
use crate::utils::format::{format_list, format_partition};
use anyhow::Result;

pub fn handle_eigenvalue_command(config: &Config, args: &EigenvalueArgs) -> Result<()> {
    let index = positive(args.index, "index")?;
    let egregore = prime_eigenvalue(index)?;

    OutputStyle::print_field_colored("Index", &egregore.index().to_string(), OutputStyle::index);
    OutputStyle::print_field_colored("Prime", &egregore.prime().to_string(), OutputStyle::prime);

    if args.verbose {
        ensure_enumerable(index, config)?;
        let ensemble = egregore.encapsulate()?;
        let structure = &ensemble.composite_structure;

        println!("\n{}:", OutputStyle::header("Encapsulated ensemble"));
        println!("  Partitions: {}", ensemble.partitions.len());
        for partition in ensemble.partitions.iter().take(config.general.preview_len) {
            println!("    {}", OutputStyle::muted(&format_partition(partition)));
        }
        if ensemble.partitions.len() > config.general.preview_len {
            println!(
                "    {}",
                OutputStyle::muted(&format!(
                    "... and {} more",
                    ensemble.partitions.len() - config.general.preview_len
                ))
            );
        }
        println!("  Divisors: {}", format_list(&ensemble.divisors, config.general.preview_len));
        println!("  Prime factorization of index: {}", ensemble.prime_factorization);
        println!("  Matula structure: {}", OutputStyle::structure(&ensemble.matula));
        println!(
            "  Composite structure: prime={}, composite={}, factors={} {}, unique={}",
            structure.is_prime,
            structure.is_composite,
            structure.factor_count,
            format_list(&structure.factors, config.general.preview_len),
            structure.unique_factors
        );
    }

    Ok(())
}
