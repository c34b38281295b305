use super::ConversionResult;
use crate::generator::{
  ast::{BuilderSpec, MethodDef, ParamDef},
  descriptor::ClassDescriptor,
  naming::identifiers,
};

/// `public Point() {}`
pub(super) fn no_arg(spec: &BuilderSpec) -> MethodDef {
  MethodDef::builder().name(spec.class_name.as_str()).build()
}

/// `public Point(Point point) { this.x = point.getX(); ... }`
///
/// Copies every field, final ones included, through its getter. The builder's
/// `build()` delegates here to materialize the final object.
pub(super) fn copying(descriptor: &ClassDescriptor, spec: &BuilderSpec) -> ConversionResult<MethodDef> {
  let source = spec.backing_field.as_str();

  let assignments = descriptor
    .fields
    .iter()
    .map(|field| {
      Ok(format!(
        "this.{} = {}.{}();",
        field.name,
        source,
        identifiers::getter_name(&field.name)?
      ))
    })
    .collect::<ConversionResult<Vec<_>>>()?;

  Ok(
    MethodDef::builder()
      .name(spec.class_name.as_str())
      .params(vec![
        ParamDef::builder()
          .name(source)
          .java_type(spec.class_name.as_str())
          .build(),
      ])
      .body(assignments)
      .build(),
  )
}
