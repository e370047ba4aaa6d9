use crate::cli::DaemonArgs;
use crate::commands::{ensure_enumerable, resolve_limit};
use crate::config::Config;
use crate::core::egregore::prime_eigenvalue;
use crate::utils::OutputStyle;
use crate::utils::error::positive;
use crate::utils::format::format_list;
use anyhow::Result;

pub fn handle_daemon_command(config: &Config, args: &DaemonArgs) -> Result<()> {
    let index = positive(args.index, "index")?;
    let limit = resolve_limit(args.limit, config)?;
    ensure_enumerable(index, config)?;

    let egregore = prime_eigenvalue(index)?;
    OutputStyle::print_header(&format!("Prime Egregore Daemon Process for Index {}", index));

    println!("\n{}", OutputStyle::title("Phase 1: ENCAPSULATE"));
    println!("  Capturing computational ensemble of index...");
    let ensemble = egregore.encapsulate()?;
    OutputStyle::print_step(&format!("Partitions: {}", ensemble.partitions.len()));
    OutputStyle::print_step(&format!(
        "Divisors: {}",
        format_list(&ensemble.divisors, config.general.preview_len)
    ));
    OutputStyle::print_step(&format!("Factorization: {}", ensemble.prime_factorization));
    OutputStyle::print_step(&format!("Structure: {}", OutputStyle::structure(&ensemble.matula)));

    println!("\n{}", OutputStyle::title("Phase 2: PURIFY"));
    println!("  Transforming into irreducible eigenvalue...");
    let prime = egregore.purify();
    OutputStyle::print_step(&format!("Prime eigenvalue: {}", OutputStyle::prime(&prime.to_string())));

    println!("\n{}", OutputStyle::title("Phase 3: PROJECT"));
    println!("  Projecting identity through multiples (up to {})...", limit);
    let multiples = egregore.project(limit);
    OutputStyle::print_step(&format!(
        "Multiples: {}",
        format_list(&multiples, config.general.preview_len)
    ));
    OutputStyle::print_step(&format!("Total reach: {} numbers", multiples.len()));

    Ok(())
}
