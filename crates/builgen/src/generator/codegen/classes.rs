use itertools::Itertools;

use super::{INDENT, indent};
use crate::generator::{
  ast::{GeneratedMember, MemberTarget},
  descriptor::ClassDescriptor,
};

/// Wraps the builder members in their nested class shell.
///
/// The class is `static` so it can be instantiated without an enclosing
/// instance.
pub(crate) fn render_builder_class(builder_name: &str, members: &[GeneratedMember]) -> String {
  let body = members
    .iter()
    .filter(|m| m.target == MemberTarget::BuilderClass)
    .map(|m| indent(&m.source))
    .join("\n\n");

  format!("public static class {builder_name} {{\n{body}\n}}")
}

/// Assembles the complete augmented class: field declarations, the outer
/// members, then the nested builder. For hosts that want one source fragment
/// instead of the member stream.
pub(crate) fn render_augmented_class(
  descriptor: &ClassDescriptor,
  members: &[GeneratedMember],
  builder_class: &str,
) -> String {
  let fields = descriptor
    .fields
    .iter()
    .map(|field| {
      let modifiers = if field.is_final { "private final" } else { "private" };
      format!("{INDENT}{modifiers} {} {};", field.java_type, field.name)
    })
    .join("\n");

  let outer_members = members
    .iter()
    .filter(|m| m.target == MemberTarget::OuterClass)
    .map(|m| indent(&m.source))
    .join("\n\n");

  format!(
    "public class {} {{\n{fields}\n\n{outer_members}\n\n{}\n}}\n",
    descriptor.name,
    indent(builder_class)
  )
}
