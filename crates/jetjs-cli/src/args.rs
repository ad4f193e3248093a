use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the jetjs binary.
#[derive(Parser, Debug)]
#[command(
    name = "jetjs",
    version,
    about = "Lower resolved jet programs to JavaScript"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a jetjs.json configuration file.
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Start from an empty intrinsic table instead of the standard library one.
    #[arg(long = "no-builtins", global = true)]
    pub no_builtins: bool,

    /// Indentation width of the emitted JavaScript; overrides the config file.
    #[arg(long, global = true)]
    pub indent: Option<usize>,

    /// Output format for `classify`.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text, global = true)]
    pub format: ReportFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the JavaScript lowering of a resolved program.
    Lower {
        /// Resolved program serialized as JSON.
        program: PathBuf,
    },
    /// Report which operations of a resolved program lower to an intrinsic.
    Classify {
        /// Resolved program serialized as JSON.
        program: PathBuf,
    },
}

impl Command {
    pub fn program_path(&self) -> &PathBuf {
        match self {
            Self::Lower { program } | Self::Classify { program } => program,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
