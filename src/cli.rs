use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::{Config, SequenceFormat};
use crate::commands::{analyze, configure, daemon, eigenvalue, grammar, matula, persona, sequence, trees};

#[derive(Parser)]
#[command(name = "e9")]
#[command(about = "e9 - Prime Eigenvalue Function CLI")]
#[command(long_about = "Concept: the nth prime is the prime shell around the ensemble structure of n")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, config_path: Option<PathBuf>) -> Result<()> {
        match self {
            Commands::Eigenvalue(args) => eigenvalue::handle_eigenvalue_command(&config, &args)?,
            Commands::Sequence(args) => sequence::handle_sequence_command(&config, &args)?,
            Commands::Analyze(args) => analyze::handle_analyze_command(&config, &args)?,
            Commands::Daemon(args) => daemon::handle_daemon_command(&config, &args)?,
            Commands::Matula(args) => matula::handle_matula_command(&args)?,
            Commands::Persona(args) => persona::handle_persona_command(&args)?,
            Commands::PersonaTable(args) => persona::handle_persona_table_command(&config, &args)?,
            Commands::Grammar(args) => grammar::handle_grammar_command(&config, &args)?,
            Commands::Tower(args) => trees::handle_tower_command(&args)?,
            Commands::A000081(args) => trees::handle_a000081_command(&args)?,
            Commands::Config(args) => {
                configure::handle_config_command(config, config_path, args.command)?
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get the prime eigenvalue for an index
    Eigenvalue(EigenvalueArgs),

    /// Generate the prime sequence
    Sequence(SequenceArgs),

    /// Full analysis of a prime egregore
    Analyze(AnalyzeArgs),

    /// Show the encapsulate / purify / project phases
    Daemon(DaemonArgs),

    /// Convert to or from Matula tree structures
    Matula(MatulaArgs),

    /// Show the persona of an index
    Persona(PersonaArgs),

    /// Display the index persona table
    PersonaTable(PersonaTableArgs),

    /// Analyze the cognitive grammar of a prime alphabet
    Grammar(GrammarArgs),

    /// Generate a prime tower from a seed
    Tower(TowerArgs),

    /// Show A000081, the number of rooted unlabeled trees
    #[command(name = "a000081")]
    A000081(A000081Args),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct EigenvalueArgs {
    #[arg(help = "Index n (1-indexed)", allow_negative_numbers = true)]
    pub index: i64,

    #[arg(short, long, help = "Show the encapsulated ensemble")]
    pub verbose: bool,
}

#[derive(Args)]
pub struct SequenceArgs {
    #[arg(help = "Number of primes to generate", allow_negative_numbers = true)]
    pub count: i64,

    #[arg(short, long, help = "Output format (defaults to the config value)")]
    pub format: Option<SequenceFormat>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[arg(help = "Index n (1-indexed)", allow_negative_numbers = true)]
    pub index: i64,

    #[arg(short, long, help = "Limit for multiples (defaults to the config value)", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    #[arg(short = 'm', long, help = "Show list of multiples")]
    pub show_multiples: bool,

    #[arg(long, help = "Print the analysis as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct DaemonArgs {
    #[arg(help = "Index n (1-indexed)", allow_negative_numbers = true)]
    pub index: i64,

    #[arg(short, long, help = "Limit for projection (defaults to the config value)", allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(Args)]
pub struct MatulaArgs {
    #[arg(
        short,
        long,
        help = "Number to encode as a tree",
        allow_negative_numbers = true,
        conflicts_with = "structure",
        required_unless_present = "structure"
    )]
    pub number: Option<i64>,

    #[arg(short, long, help = "Tree structure to decode")]
    pub structure: Option<String>,

    #[arg(short, long, help = "Show persona analysis")]
    pub verbose: bool,
}

#[derive(Args)]
pub struct PersonaArgs {
    #[arg(help = "Index to analyze", allow_negative_numbers = true)]
    pub index: i64,

    #[arg(short = 'p', long, help = "Show prime inheritance")]
    pub show_prime: bool,

    #[arg(long, help = "Print the persona as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct PersonaTableArgs {
    #[arg(help = "Number of indices to show (defaults to the config value)", allow_negative_numbers = true)]
    pub count: Option<i64>,

    #[arg(long, help = "Print the table as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct GrammarArgs {
    #[arg(help = "Prime bound for the alphabet", allow_negative_numbers = true)]
    pub bound: i64,

    #[arg(long, help = "Print the analysis as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct TowerArgs {
    #[arg(help = "Starting seed (typically 8)", allow_negative_numbers = true)]
    pub seed: i64,

    #[arg(help = "Number of nth-prime applications")]
    pub depth: usize,
}

#[derive(Args)]
pub struct A000081Args {
    #[arg(default_value_t = 15, help = "Number of terms to show", allow_negative_numbers = true)]
    pub count: i64,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        #[arg(short, long, help = "Overwrite an existing file")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eigenvalue_args() {
        let cli = Cli::try_parse_from(["e9", "eigenvalue", "5", "-v"]).unwrap();
        match cli.command {
            Commands::Eigenvalue(args) => {
                assert_eq!(args.index, 5);
                assert!(args.verbose);
            }
            _ => panic!("expected eigenvalue"),
        }
    }

    #[test]
    fn test_negative_index_reaches_handler() {
        let cli = Cli::try_parse_from(["e9", "persona", "-1"]).unwrap();
        match cli.command {
            Commands::Persona(args) => assert_eq!(args.index, -1),
            _ => panic!("expected persona"),
        }
    }

    #[test]
    fn test_sequence_format() {
        let cli = Cli::try_parse_from(["e9", "sequence", "10", "-f", "simple"]).unwrap();
        match cli.command {
            Commands::Sequence(args) => {
                assert_eq!(args.count, 10);
                assert_eq!(args.format, Some(SequenceFormat::Simple));
            }
            _ => panic!("expected sequence"),
        }
    }

    #[test]
    fn test_matula_requires_exactly_one_input() {
        assert!(Cli::try_parse_from(["e9", "matula"]).is_err());
        assert!(Cli::try_parse_from(["e9", "matula", "-n", "4", "-s", "()"]).is_err());
        let cli = Cli::try_parse_from(["e9", "matula", "-s", "(()())"]).unwrap();
        match cli.command {
            Commands::Matula(args) => assert_eq!(args.structure.as_deref(), Some("(()())")),
            _ => panic!("expected matula"),
        }
    }

    #[test]
    fn test_persona_table_and_a000081_defaults() {
        let cli = Cli::try_parse_from(["e9", "persona-table"]).unwrap();
        assert!(matches!(cli.command, Commands::PersonaTable(PersonaTableArgs { count: None, .. })));

        let cli = Cli::try_parse_from(["e9", "a000081"]).unwrap();
        assert!(matches!(cli.command, Commands::A000081(A000081Args { count: 15 })));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["e9", "daemon", "6", "--debug", "-l", "50"]).unwrap();
        assert!(cli.debug);
        match cli.command {
            Commands::Daemon(args) => assert_eq!(args.limit, Some(50)),
            _ => panic!("expected daemon"),
        }
    }
}
