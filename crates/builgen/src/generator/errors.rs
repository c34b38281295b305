use thiserror::Error;

/// Precondition violations for a class descriptor.
///
/// Generation is all-or-nothing: any of these fails the whole invocation
/// before a single member is produced. There is nothing to retry; every
/// failure is a bad input, never a transient fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
  #[error("class name is empty")]
  EmptyClassName,

  #[error("class has no fields")]
  NoFields,

  #[error("`{0}` is not a valid Java identifier")]
  InvalidIdentifier(String),

  #[error("field `{field}` has invalid type `{java_type}`")]
  InvalidFieldType { field: String, java_type: String },

  #[error("duplicate field `{0}`")]
  DuplicateField(String),

  #[error("field `{field}` collides with the backing name derived from class `{class}`")]
  BackingFieldCollision { field: String, class: String },

  #[error("cannot change the case of an empty identifier")]
  EmptyIdentifier,
}
