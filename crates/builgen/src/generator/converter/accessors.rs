use super::{ConversionResult, FinalFieldMode, MemberEntry};
use crate::generator::{
  ast::{MemberDef, MemberKind, MethodDef, ParamDef},
  descriptor::{ClassDescriptor, FieldDescriptor},
  naming::identifiers,
};

/// Getter then setter for each field that passes the policy filter,
/// fields in declaration order.
pub(super) fn accessor_members(
  descriptor: &ClassDescriptor,
  mode: FinalFieldMode,
) -> ConversionResult<Vec<MemberEntry>> {
  let mut members = Vec::new();

  for field in descriptor.fields.iter().filter(|f| mode.generates_accessors(f)) {
    members.push(MemberEntry::outer(MemberKind::Getter, MemberDef::Method(getter(field)?)));
    members.push(MemberEntry::outer(MemberKind::Setter, MemberDef::Method(setter(field)?)));
  }

  Ok(members)
}

fn getter(field: &FieldDescriptor) -> ConversionResult<MethodDef> {
  Ok(
    MethodDef::builder()
      .name(identifiers::getter_name(&field.name)?)
      .return_type(field.java_type.as_str())
      .body(vec![format!("return this.{};", field.name)])
      .build(),
  )
}

fn setter(field: &FieldDescriptor) -> ConversionResult<MethodDef> {
  Ok(
    MethodDef::builder()
      .name(identifiers::setter_name(&field.name)?)
      .return_type("void")
      .params(vec![
        ParamDef::builder()
          .name(field.name.as_str())
          .java_type(field.java_type.as_str())
          .build(),
      ])
      .body(vec![format!("this.{0} = {0};", field.name)])
      .build(),
  )
}
