use crate::generator::{errors::DescriptorError, naming::identifiers::*};

#[test]
fn test_first_uppercase_changes_only_first_char() {
  assert_eq!(first_uppercase("name").unwrap(), "Name");
  assert_eq!(first_uppercase("alreadyCamel").unwrap(), "AlreadyCamel");
  assert_eq!(first_uppercase("URL").unwrap(), "URL");
  assert_eq!(first_uppercase("x").unwrap(), "X");
}

#[test]
fn test_first_lowercase_changes_only_first_char() {
  assert_eq!(first_lowercase("Name").unwrap(), "name");
  assert_eq!(first_lowercase("Person").unwrap(), "person");
  assert_eq!(first_lowercase("already").unwrap(), "already");
  assert_eq!(first_lowercase("XMLParser").unwrap(), "xMLParser");
}

#[test]
fn test_empty_input_is_an_error() {
  assert_eq!(first_uppercase(""), Err(DescriptorError::EmptyIdentifier));
  assert_eq!(first_lowercase(""), Err(DescriptorError::EmptyIdentifier));
}

#[test]
fn test_accessor_names() {
  assert_eq!(getter_name("name").unwrap(), "getName");
  assert_eq!(setter_name("name").unwrap(), "setName");
  assert_eq!(getter_name("x").unwrap(), "getX");
}

#[test]
fn test_valid_identifiers() {
  assert!(is_valid_identifier("x"));
  assert!(is_valid_identifier("_internal"));
  assert!(is_valid_identifier("$cash"));
  assert!(is_valid_identifier("camelCase9"));
}

#[test]
fn test_invalid_identifiers() {
  assert!(!is_valid_identifier(""));
  assert!(!is_valid_identifier("9lives"));
  assert!(!is_valid_identifier("with-dash"));
  assert!(!is_valid_identifier("with space"));
  assert!(!is_valid_identifier("class"));
  assert!(!is_valid_identifier("final"));
  assert!(!is_valid_identifier("null"));
}

#[test]
fn test_valid_type_expressions() {
  assert!(is_valid_type_expression("int"));
  assert!(is_valid_type_expression("String"));
  assert!(is_valid_type_expression("List<String>"));
  assert!(is_valid_type_expression("Map<String, List<Integer>>"));
  assert!(is_valid_type_expression("int[]"));
  assert!(is_valid_type_expression("List<String>[]"));
  assert!(is_valid_type_expression("java.util.List<String>"));
}

#[test]
fn test_invalid_type_expressions() {
  assert!(!is_valid_type_expression(""));
  assert!(!is_valid_type_expression("List<"));
  assert!(!is_valid_type_expression("List<String"));
  assert!(!is_valid_type_expression("List<>"));
  assert!(!is_valid_type_expression(">String<"));
  assert!(!is_valid_type_expression("9int"));
}

#[test]
fn test_reserved_words_cover_keywords_and_literals() {
  assert!(RESERVED_WORDS.contains("while"));
  assert!(RESERVED_WORDS.contains("goto"));
  assert!(RESERVED_WORDS.contains("true"));
  assert!(!RESERVED_WORDS.contains("value"));
}
