use crate::cli::{PersonaArgs, PersonaTableArgs};
use crate::config::Config;
use crate::core::egregore::prime_eigenvalue;
use crate::core::persona::{generate_index_persona_table, get_index_persona};
use crate::utils::error::positive;
use crate::utils::{OutputStyle, print_json};
use anyhow::Result;

pub fn handle_persona_command(args: &PersonaArgs) -> Result<()> {
    let index = positive(args.index, "index")?;
    let persona = get_index_persona(index)?;

    if args.json {
        return print_json(&persona);
    }

    OutputStyle::print_header(&format!("Index Persona Analysis for {}", index));
    OutputStyle::print_persona(&persona);

    if args.show_prime {
        let eg = prime_eigenvalue(index)?;
        println!("\n{}:", OutputStyle::header("Prime inheritance"));
        println!(
            "  Index {} → Prime {}",
            OutputStyle::index(&index.to_string()),
            OutputStyle::prime(&eg.prime().to_string())
        );
        println!("  The prime {} inherits: {}", eg.prime(), persona.character);
    }

    Ok(())
}

pub fn handle_persona_table_command(config: &Config, args: &PersonaTableArgs) -> Result<()> {
    let count = match args.count {
        Some(value) => positive(value, "count")?,
        None => config.general.persona_table_size,
    };
    let rows = generate_index_persona_table(count)?;

    if args.json {
        return print_json(&rows);
    }

    OutputStyle::print_persona_table(&rows);
    Ok(())
}
