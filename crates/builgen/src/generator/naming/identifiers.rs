use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::generator::errors::DescriptorError;

pub(crate) static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "extends", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "package", "private",
    "protected", "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while",
    // literals, equally unusable as names
    "true", "false", "null",
  ]
  .into_iter()
  .collect()
});

// Matches a plain or qualified type name, an optional generic argument list,
// and any number of trailing array brackets. Angle-bracket balance is checked
// separately; the regex alone accepts `List<String>` and `List<Str>ing<`.
static TYPE_EXPR_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*(<.+>)?(\s*\[\s*\])*$").unwrap());

/// Uppercases only the first character, leaving the rest unchanged.
///
/// `"name"` becomes `"Name"`; `"URL"` stays `"URL"`. An empty input is an
/// error rather than an empty result.
pub(crate) fn first_uppercase(input: &str) -> Result<String, DescriptorError> {
  let mut chars = input.chars();
  match chars.next() {
    None => Err(DescriptorError::EmptyIdentifier),
    Some(first) => Ok(first.to_uppercase().collect::<String>() + chars.as_str()),
  }
}

/// Lowercases only the first character, leaving the rest unchanged.
pub(crate) fn first_lowercase(input: &str) -> Result<String, DescriptorError> {
  let mut chars = input.chars();
  match chars.next() {
    None => Err(DescriptorError::EmptyIdentifier),
    Some(first) => Ok(first.to_lowercase().collect::<String>() + chars.as_str()),
  }
}

/// `getX` for field `x`.
pub(crate) fn getter_name(field_name: &str) -> Result<String, DescriptorError> {
  Ok(format!("get{}", first_uppercase(field_name)?))
}

/// `setX` for field `x`.
pub(crate) fn setter_name(field_name: &str) -> Result<String, DescriptorError> {
  Ok(format!("set{}", first_uppercase(field_name)?))
}

/// A legal Java identifier: letter, `_` or `$` first, then letters, digits,
/// `_` or `$`, and not a reserved word.
pub(crate) fn is_valid_identifier(input: &str) -> bool {
  let mut chars = input.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  if !(first.is_alphabetic() || first == '_' || first == '$') {
    return false;
  }
  if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
    return false;
  }
  !RESERVED_WORDS.contains(input)
}

/// A display-form type expression: `int`, `List<String>`, `int[]`,
/// `java.util.Map<String, List<Integer>>`. Primitive keywords are valid
/// here even though they are reserved as identifiers.
pub(crate) fn is_valid_type_expression(input: &str) -> bool {
  let trimmed = input.trim();
  if trimmed.is_empty() || !TYPE_EXPR_RE.is_match(trimmed) {
    return false;
  }
  balanced_angle_brackets(trimmed)
}

fn balanced_angle_brackets(input: &str) -> bool {
  let mut depth: i32 = 0;
  for c in input.chars() {
    match c {
      '<' => depth += 1,
      '>' => {
        depth -= 1;
        if depth < 0 {
          return false;
        }
      }
      _ => {}
    }
  }
  depth == 0
}
