pub(crate) mod classes;
pub(crate) mod methods;

#[cfg(test)]
mod tests;

use itertools::Itertools;

use super::ast::MemberDef;

/// Java output indentation. One level per nesting depth.
pub(crate) const INDENT: &str = "    ";

pub(crate) fn render_member(def: &MemberDef) -> String {
  match def {
    MemberDef::Field(decl) => methods::render_field(decl),
    MemberDef::Method(method) => methods::render_method(method),
  }
}

/// Indents every non-empty line by one level.
pub(crate) fn indent(source: &str) -> String {
  source
    .lines()
    .map(|line| {
      if line.is_empty() {
        String::new()
      } else {
        format!("{INDENT}{line}")
      }
    })
    .join("\n")
}
