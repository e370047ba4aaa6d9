use colored::*;
use crate::core::persona::{IndexPersona, PersonaRow};
use crate::utils::format::{format_list, truncate_string};

pub struct OutputStyle;

impl OutputStyle {
    // Primary colors for different value kinds
    pub fn prime(text: &str) -> ColoredString {
        text.bright_green().bold()
    }

    pub fn index(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn structure(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    // Formatting helpers
    pub fn header_separator() -> String {
        "═".repeat(80)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>14}: {}", Self::label(label), color_fn(value));
    }

    pub fn print_step(message: &str) {
        println!("  {} {}", Self::success("✓"), message);
    }

    /// Print a persona in the `persona` command's layout
    pub fn print_persona(persona: &IndexPersona) {
        Self::print_field_colored("Structure", &persona.structure, Self::structure);
        Self::print_field_colored("Character", &persona.character, Self::content);
        Self::print_field_colored("Type", persona.kind.as_str(), Self::info);
        Self::print_field_colored("Factors", &format_list(&persona.factors, usize::MAX), Self::content);
        Self::print_field_colored(
            "Unique factors",
            &format_list(&persona.unique_factors, usize::MAX),
            Self::content,
        );
    }

    /// Print the index persona table
    pub fn print_persona_table(rows: &[PersonaRow]) {
        println!();
        Self::print_header("INDEX PERSONA TABLE: How Primes Inherit Structure");
        println!();
        println!(
            "{:>5} | {:>5} | {:>15} | {}",
            Self::header("Prime"),
            Self::header("Index"),
            Self::header("Structure"),
            Self::header("Inherited Persona")
        );
        println!("{}", "-".repeat(80));

        for row in rows {
            println!(
                "{:>5} | {:>5} | {:>15} | {}",
                Self::prime(&row.prime.to_string()),
                Self::index(&row.index.to_string()),
                Self::structure(&truncate_string(&row.structure, 15)),
                truncate_string(&row.persona, 50)
            );
        }

        println!("{}", Self::header_separator());
        println!();
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Print any serializable record as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize output to JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}
