//! Orchestration for the descriptor to Java member generation pipeline.
//!
//! The `Orchestrator` hides the converter and codegen stages behind a small
//! API: construct it with a validated descriptor, then ask for either the
//! ordered member stream or a fully assembled class.
//!
//! ## Usage
//!
//! ```no_run
//! use builgen::generator::orchestrator::{GeneratorOptions, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let raw = std::fs::read_to_string("descriptor.json")?;
//! let descriptor = serde_json::from_str(&raw)?;
//!
//! let orchestrator = Orchestrator::new(descriptor, GeneratorOptions::default())?;
//! let output = orchestrator.generate()?;
//!
//! println!("Generated {} members", output.stats.members_generated);
//! # Ok(())
//! # }
//! ```

use super::{
  ast::{GeneratedMember, MemberKind},
  codegen,
  converter::{FinalFieldMode, MemberConverter},
  descriptor::ClassDescriptor,
  errors::DescriptorError,
};

/// Options controlling generation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
  pub final_field_mode: FinalFieldMode,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
  /// Total members produced, outer and builder together.
  pub members_generated: usize,
  /// Outer-class constructors (always 2: no-arg and copy).
  pub constructors_generated: usize,
  /// Getters plus setters.
  pub accessors_generated: usize,
  /// Fluent methods on the builder.
  pub builder_methods_generated: usize,
  /// Final fields that got no accessor pair under the active policy.
  pub final_fields_skipped: usize,
}

/// The full result of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  /// Members in emission order, each tagged with its kind and target class.
  pub members: Vec<GeneratedMember>,
  /// Name of the nested builder class the `BuilderClass` members belong to.
  pub builder_name: String,
  /// Name of the builder's backing field and the copy-constructor parameter.
  pub backing_field: String,
  pub stats: GenerationStats,
}

/// High-level entry point: one descriptor in, an ordered member list out.
///
/// Generation is pure and deterministic; the orchestrator holds no state
/// between calls and two calls on the same input produce identical output.
pub struct Orchestrator {
  descriptor: ClassDescriptor,
  options: GeneratorOptions,
}

impl Orchestrator {
  /// Validates the descriptor eagerly. A descriptor that fails any
  /// precondition never reaches generation, so a constructed orchestrator
  /// cannot produce partial output.
  pub fn new(descriptor: ClassDescriptor, options: GeneratorOptions) -> Result<Self, DescriptorError> {
    descriptor.validate()?;
    Ok(Self { descriptor, options })
  }

  /// Produces every member in the fixed order: no-arg constructor, copy
  /// constructor, accessor pairs per field, builder members.
  pub fn generate(&self) -> Result<GeneratedOutput, DescriptorError> {
    let converter = MemberConverter::new(&self.descriptor, self.options.final_field_mode)?;
    let entries = converter.convert()?;

    let members: Vec<GeneratedMember> = entries
      .iter()
      .map(|entry| GeneratedMember {
        kind: entry.kind,
        target: entry.target,
        name: entry.def.name().to_string(),
        source: codegen::render_member(&entry.def),
      })
      .collect();

    let stats = self.collect_stats(&members);
    let spec = converter.builder_spec();

    Ok(GeneratedOutput {
      builder_name: spec.builder_name.to_string(),
      backing_field: spec.backing_field.to_string(),
      members,
      stats,
    })
  }

  /// Renders the complete augmented class source for hosts that want one
  /// fragment instead of the member stream.
  pub fn generate_class(&self) -> Result<(String, GenerationStats), DescriptorError> {
    let output = self.generate()?;
    let builder_class = codegen::classes::render_builder_class(&output.builder_name, &output.members);
    let class = codegen::classes::render_augmented_class(&self.descriptor, &output.members, &builder_class);
    Ok((class, output.stats))
  }

  fn collect_stats(&self, members: &[GeneratedMember]) -> GenerationStats {
    let count = |kinds: &[MemberKind]| members.iter().filter(|m| kinds.contains(&m.kind)).count();

    let final_fields_skipped = match self.options.final_field_mode {
      FinalFieldMode::Exclude => self.descriptor.final_field_count(),
      FinalFieldMode::Accessors => 0,
    };

    GenerationStats {
      members_generated: members.len(),
      constructors_generated: count(&[MemberKind::Constructor]),
      accessors_generated: count(&[MemberKind::Getter, MemberKind::Setter]),
      builder_methods_generated: count(&[MemberKind::BuilderMethod]),
      final_fields_skipped,
    }
  }
}
