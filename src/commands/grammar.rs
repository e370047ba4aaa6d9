use crate::cli::GrammarArgs;
use crate::config::Config;
use crate::core::grammar::{Letter, analyze_cognitive_grammar};
use crate::utils::error::AppError;
use crate::utils::format::format_list;
use crate::utils::{OutputStyle, print_json};
use anyhow::Result;

pub fn handle_grammar_command(config: &Config, args: &GrammarArgs) -> Result<()> {
    if args.bound < 0 {
        return Err(AppError::invalid(format!("prime bound must be >= 2, got {}", args.bound)).into());
    }
    let analysis = analyze_cognitive_grammar(args.bound as u64)?;

    if args.json {
        return print_json(&analysis);
    }

    println!();
    OutputStyle::print_header(&format!("COGNITIVE GRAMMAR: Prime Alphabet up to {}", args.bound));
    println!();
    println!("Alphabet size: {} primes", analysis.alphabet_size);
    println!("Primes: {}", format_list(&analysis.primes, config.general.preview_len));
    println!();
    println!("{}:", OutputStyle::header("Grammatical Capabilities"));
    for capability in &analysis.capabilities {
        println!("  • {}", capability);
    }
    println!();

    print_letters("Pure Binary Depths", &analysis.pure_binary);
    print_letters("Squared Structures", &analysis.squared);
    print_letters("Mixed Ensembles", &analysis.mixed);

    println!(
        "Grammatical expressiveness score: {}",
        OutputStyle::info(&analysis.grammatical_expressiveness.to_string())
    );
    println!("{}", OutputStyle::header_separator());
    println!();
    Ok(())
}

fn print_letters(title: &str, letters: &[Letter]) {
    if letters.is_empty() {
        return;
    }
    println!("{}:", OutputStyle::header(title));
    for letter in letters.iter().take(5) {
        println!(
            "  p_{} = {:>3} : {}",
            letter.index,
            OutputStyle::prime(&letter.prime.to_string()),
            letter.persona
        );
    }
    if letters.len() > 5 {
        println!("  {}", OutputStyle::muted(&format!("... and {} more", letters.len() - 5)));
    }
    println!();
}
