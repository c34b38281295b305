use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    ast::GeneratedMember,
    converter::FinalFieldMode,
    descriptor::ClassDescriptor,
    orchestrator::{GenerationStats, GeneratorOptions, Orchestrator},
  },
  ui::{Colors, EmitMode, GenerateCommand},
  utils::descriptor::DescriptorLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub emit: EmitMode,
  pub final_field_mode: FinalFieldMode,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      emit,
      final_fields,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      output,
      emit,
      final_field_mode: final_fields.into(),
      verbose,
      quiet,
    }
  }

  async fn load_descriptor(&self) -> anyhow::Result<ClassDescriptor> {
    DescriptorLoader::open(&self.input).await?.parse()
  }

  async fn write_output(&self, content: String, logger: &GenerateLogger<'_>) -> anyhow::Result<()> {
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent() {
          tokio::fs::create_dir_all(parent).await?;
        }
        logger.log_writing(path);
        tokio::fs::write(path, content).await?;
      }
      None => println!("{content}"),
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading class descriptor from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, class_name: &str) {
    self.info(
      &format!("Generating members for class {class_name}...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Members generated:", stats.members_generated.to_string());
    self.stat("", format!("{} constructors", stats.constructors_generated));
    self.stat("", format!("{} accessors", stats.accessors_generated));
    self.stat("", format!("{} builder methods", stats.builder_methods_generated));
    if stats.final_fields_skipped > 0 {
      self.stat("Final fields skipped:", stats.final_fields_skipped.to_string());
    }
  }

  fn print_members(&self, members: &[GeneratedMember]) {
    if self.config.quiet || !self.config.verbose {
      return;
    }

    for member in members {
      println!(
        "              {} {}",
        member.kind.to_string().with(self.colors.accent()),
        member.name.as_str().with(self.colors.info())
      );
    }
  }

  fn log_writing(&self, path: &PathBuf) {
    self.info(
      &format!("Writing to: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated accessors and builder".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let descriptor = config.load_descriptor().await?;

  logger.log_generating(&descriptor.name);
  let options = GeneratorOptions {
    final_field_mode: config.final_field_mode,
  };
  let orchestrator = Orchestrator::new(descriptor, options)?;

  match config.emit {
    EmitMode::Class => {
      let (class, stats) = orchestrator.generate_class()?;
      logger.print_statistics(&stats);
      config.write_output(class, &logger).await?;
    }
    EmitMode::Members => {
      let output = orchestrator.generate()?;
      logger.print_statistics(&output.stats);
      logger.print_members(&output.members);
      let json = serde_json::to_string_pretty(&output.members)?;
      config.write_output(json, &logger).await?;
    }
  }

  logger.log_success();
  Ok(())
}
