use itertools::Itertools;

use super::INDENT;
use crate::generator::ast::{FieldDecl, MethodDef};

/// Renders a method or constructor as formatted Java.
///
/// An empty body collapses to `{}` on the signature line; otherwise each
/// statement gets its own indented line.
pub(crate) fn render_method(def: &MethodDef) -> String {
  let params = def
    .params
    .iter()
    .map(|p| format!("{} {}", p.java_type, p.name))
    .join(", ");

  let signature = match &def.return_type {
    Some(return_type) => format!("public {return_type} {}({params})", def.name),
    None => format!("public {}({params})", def.name),
  };

  if def.body.is_empty() {
    return format!("{signature} {{}}");
  }

  let body = def.body.iter().map(|line| format!("{INDENT}{line}")).join("\n");
  format!("{signature} {{\n{body}\n}}")
}

pub(crate) fn render_field(decl: &FieldDecl) -> String {
  format!("private {} {};", decl.java_type, decl.name)
}
