use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{OutputStyle, print_success, print_warning};
use anyhow::Result;
use std::path::PathBuf;

pub fn handle_config_command(
    config: Config,
    config_path: Option<PathBuf>,
    command: Option<ConfigCommands>,
) -> Result<()> {
    let path = config_path.unwrap_or_else(Config::config_file_path);
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(&config, &path),
        Some(ConfigCommands::Path) => {
            println!("{}", path.display());
            Ok(())
        }
        Some(ConfigCommands::Init { force }) => handle_init_command(&path, force),
    }
}

fn handle_show_command(config: &Config, path: &std::path::Path) -> Result<()> {
    OutputStyle::print_header("⚙️  e9 Configuration");
    OutputStyle::print_field_colored("File", &path.display().to_string(), OutputStyle::muted);
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}

fn handle_init_command(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        print_warning(&format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(path)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
