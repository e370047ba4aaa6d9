use crate::cli::AnalyzeArgs;
use crate::commands::{ensure_enumerable, resolve_limit};
use crate::config::Config;
use crate::core::egregore::{analyze_prime_projection, prime_eigenvalue};
use crate::utils::error::positive;
use crate::utils::format::{format_list, format_percent};
use crate::utils::{OutputStyle, print_json};
use anyhow::Result;

pub fn handle_analyze_command(config: &Config, args: &AnalyzeArgs) -> Result<()> {
    let index = positive(args.index, "index")?;
    let limit = resolve_limit(args.limit, config)?;
    ensure_enumerable(index, config)?;

    let egregore = prime_eigenvalue(index)?;
    let analysis = analyze_prime_projection(&egregore, limit)?;

    if args.json {
        return print_json(&analysis);
    }

    OutputStyle::print_header(&format!("Analysis of Prime Egregore at Index {}", index));
    println!("Prime eigenvalue: {}", OutputStyle::prime(&analysis.prime.to_string()));
    println!("Purified value: {}", analysis.purified_value);

    let ensemble = &analysis.ensemble_structure;
    println!("\n{}:", OutputStyle::header("Ensemble Structure"));
    println!("  Partitions: {} ways to decompose {}", ensemble.partitions.len(), index);
    println!("  Divisors: {}", format_list(&ensemble.divisors, config.general.preview_len));
    println!("  Prime factorization: {}", ensemble.prime_factorization);
    println!("  Index is prime: {}", ensemble.composite_structure.is_prime);

    let projection = &analysis.projection;
    println!("\n{}:", OutputStyle::header("Projection (Daemon's Reach)"));
    println!("  Multiples (up to {}): {}", limit, projection.multiples_count);
    println!("  Projection density: {}", format_percent(projection.projection_density));

    if args.show_multiples {
        println!(
            "  Multiples: {}",
            format_list(&projection.multiples, config.general.preview_len)
        );
    }

    Ok(())
}
