mod accessors;
mod builder;
mod constructors;

#[cfg(test)]
mod tests;

use super::{
  ast::{BuilderSpec, MemberDef, MemberKind, MemberTarget},
  descriptor::{ClassDescriptor, FieldDescriptor},
  errors::DescriptorError,
};

pub(crate) type ConversionResult<T> = Result<T, DescriptorError>;

/// Policy for fields declared `final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalFieldMode {
  /// No getter or setter for `final` fields. They still appear in the copy
  /// constructor (which reads them through getters) and in the builder's
  /// fluent methods (which write them through setters), so the emitted class
  /// only compiles if those accessors exist elsewhere.
  #[default]
  Exclude,
  /// Generate accessors for every field regardless of finality, making the
  /// copy constructor and builder self-contained.
  Accessors,
}

impl FinalFieldMode {
  pub(crate) fn generates_accessors(self, field: &FieldDescriptor) -> bool {
    match self {
      Self::Exclude => !field.is_final,
      Self::Accessors => true,
    }
  }
}

/// A converted member, not yet rendered to source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MemberEntry {
  pub kind: MemberKind,
  pub target: MemberTarget,
  pub def: MemberDef,
}

impl MemberEntry {
  pub(crate) fn outer(kind: MemberKind, def: MemberDef) -> Self {
    Self {
      kind,
      target: MemberTarget::OuterClass,
      def,
    }
  }

  pub(crate) fn builder(kind: MemberKind, def: MemberDef) -> Self {
    Self {
      kind,
      target: MemberTarget::BuilderClass,
      def,
    }
  }
}

/// Converts a validated descriptor into the fixed member sequence.
pub(crate) struct MemberConverter<'a> {
  descriptor: &'a ClassDescriptor,
  builder_spec: BuilderSpec,
  final_field_mode: FinalFieldMode,
}

impl<'a> MemberConverter<'a> {
  pub(crate) fn new(descriptor: &'a ClassDescriptor, final_field_mode: FinalFieldMode) -> ConversionResult<Self> {
    let builder_spec = BuilderSpec::derive(&descriptor.name)?;
    Ok(Self {
      descriptor,
      builder_spec,
      final_field_mode,
    })
  }

  pub(crate) fn builder_spec(&self) -> &BuilderSpec {
    &self.builder_spec
  }

  /// Emission order: no-arg constructor, copy constructor, accessor pairs
  /// per field in declaration order, then the builder members (backing
  /// field, constructor, fluent methods, `build()`).
  pub(crate) fn convert(&self) -> ConversionResult<Vec<MemberEntry>> {
    let mut members = Vec::with_capacity(2 * self.descriptor.fields.len() + 6);

    members.push(MemberEntry::outer(
      MemberKind::Constructor,
      MemberDef::Method(constructors::no_arg(&self.builder_spec)),
    ));
    members.push(MemberEntry::outer(
      MemberKind::Constructor,
      MemberDef::Method(constructors::copying(self.descriptor, &self.builder_spec)?),
    ));

    members.extend(accessors::accessor_members(self.descriptor, self.final_field_mode)?);
    members.extend(builder::builder_members(self.descriptor, &self.builder_spec)?);

    Ok(members)
  }
}
