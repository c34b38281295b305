use super::{ConversionResult, MemberEntry};
use crate::generator::{
  ast::{BuilderSpec, FieldDecl, MemberDef, MemberKind, MethodDef, ParamDef},
  descriptor::{ClassDescriptor, FieldDescriptor},
  naming::identifiers,
};

/// The nested builder's members, in order: backing field, constructor, one
/// fluent method per field (final ones included), `build()`.
pub(super) fn builder_members(descriptor: &ClassDescriptor, spec: &BuilderSpec) -> ConversionResult<Vec<MemberEntry>> {
  let mut members = Vec::with_capacity(descriptor.fields.len() + 3);

  members.push(MemberEntry::builder(
    MemberKind::BuilderField,
    MemberDef::Field(
      FieldDecl::builder()
        .name(spec.backing_field.as_str())
        .java_type(spec.class_name.as_str())
        .build(),
    ),
  ));

  members.push(MemberEntry::builder(
    MemberKind::BuilderConstructor,
    MemberDef::Method(
      MethodDef::builder()
        .name(spec.builder_name.as_str())
        .body(vec![format!("this.{} = new {}();", spec.backing_field, spec.class_name)])
        .build(),
    ),
  ));

  for field in &descriptor.fields {
    members.push(MemberEntry::builder(
      MemberKind::BuilderMethod,
      MemberDef::Method(fluent_method(field, spec)?),
    ));
  }

  members.push(MemberEntry::builder(
    MemberKind::BuildMethod,
    MemberDef::Method(
      MethodDef::builder()
        .name("build")
        .return_type(spec.class_name.as_str())
        .body(vec![format!("return new {}(this.{});", spec.class_name, spec.backing_field)])
        .build(),
    ),
  ));

  Ok(members)
}

/// `public PointBuilder x(int x) { this.point.setX(x); return this; }`
fn fluent_method(field: &FieldDescriptor, spec: &BuilderSpec) -> ConversionResult<MethodDef> {
  Ok(
    MethodDef::builder()
      .name(field.name.as_str())
      .return_type(spec.builder_name.as_str())
      .params(vec![
        ParamDef::builder()
          .name(field.name.as_str())
          .java_type(field.java_type.as_str())
          .build(),
      ])
      .body(vec![
        format!(
          "this.{}.{}({});",
          spec.backing_field,
          identifiers::setter_name(&field.name)?,
          field.name
        ),
        "return this;".to_string(),
      ])
      .build(),
  )
}
