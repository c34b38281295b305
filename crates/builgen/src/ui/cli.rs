use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::converter::FinalFieldMode;

#[derive(Parser, Debug)]
#[command(name = "builgen")]
#[command(author, version, about = "Java accessor and builder generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a class descriptor
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate constructors, accessors, and a builder from a class descriptor
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the class descriptor JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path for the generated output (stdout if omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Output shape: the assembled class source, or the member fragments as JSON
  #[arg(short, long, value_enum, default_value = "class")]
  pub emit: EmitMode,

  /// Accessor policy for fields declared final
  #[arg(long, value_enum, default_value = "exclude")]
  pub final_fields: FinalFieldArg,

  /// Enable verbose output with one line per generated member
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EmitMode {
  /// The complete augmented class as Java source
  Class,
  /// The ordered member fragments as a JSON array
  Members,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FinalFieldArg {
  /// No getters or setters for final fields
  Exclude,
  /// Accessors for every field regardless of finality
  Accessors,
}

impl From<FinalFieldArg> for FinalFieldMode {
  fn from(arg: FinalFieldArg) -> Self {
    match arg {
      FinalFieldArg::Exclude => Self::Exclude,
      FinalFieldArg::Accessors => Self::Accessors,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the fields declared in a class descriptor
  Fields {
    /// Path to the class descriptor JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
