use crate::cli::MatulaArgs;
use crate::core::matula::{MatulaTree, number_to_matula};
use crate::core::persona::get_index_persona;
use crate::utils::OutputStyle;
use crate::utils::error::positive;
use crate::utils::format::format_list;
use anyhow::Result;

pub fn handle_matula_command(args: &MatulaArgs) -> Result<()> {
    let number = if let Some(value) = args.number {
        let number = positive(value, "number")?;
        let structure = number_to_matula(number)?;
        OutputStyle::print_field_colored("Number", &number.to_string(), OutputStyle::index);
        OutputStyle::print_field_colored("Structure", &structure, OutputStyle::structure);
        number
    } else if let Some(structure) = &args.structure {
        let tree: MatulaTree = structure.parse()?;
        let number = tree.number()?;
        OutputStyle::print_field_colored("Structure", structure, OutputStyle::structure);
        OutputStyle::print_field_colored("Number", &number.to_string(), OutputStyle::index);

        let canonical = tree.canonical()?.to_string();
        if &canonical != structure {
            OutputStyle::print_field_colored("Canonical", &canonical, OutputStyle::structure);
        }
        number
    } else {
        return Err(anyhow::anyhow!("either --number or --structure is required"));
    };

    if args.verbose {
        let persona = get_index_persona(number)?;
        println!("\n{}:", OutputStyle::header("Persona analysis"));
        println!("  Character: {}", persona.character);
        println!("  Type: {}", persona.kind);
        println!("  Factors: {}", format_list(&persona.factors, usize::MAX));
    }

    Ok(())
}
