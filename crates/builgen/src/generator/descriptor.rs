use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{errors::DescriptorError, naming::identifiers};

/// A class to augment: its name plus the declared fields.
///
/// Field order is the declaration order of the source class and is preserved
/// through every generated member: constructor parameters, accessor pairs,
/// and builder fluent methods all follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDescriptor {
  pub name: String,
  pub fields: Vec<FieldDescriptor>,
}

/// One declared field in display form, e.g. `("items", "List<String>", false)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
  pub name: String,
  #[serde(rename = "type")]
  pub java_type: String,
  #[serde(rename = "final", default)]
  pub is_final: bool,
}

impl ClassDescriptor {
  pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
    Self {
      name: name.into(),
      fields,
    }
  }

  /// Checks every generation precondition.
  ///
  /// Rejects an empty or invalid class name, an empty field list, invalid
  /// field names or type expressions, duplicate field names, and a field
  /// whose name collides with the derived backing name (the lowercased
  /// class name used for the copy-constructor parameter and the builder's
  /// backing field).
  pub fn validate(&self) -> Result<(), DescriptorError> {
    if self.name.is_empty() {
      return Err(DescriptorError::EmptyClassName);
    }
    if !identifiers::is_valid_identifier(&self.name) {
      return Err(DescriptorError::InvalidIdentifier(self.name.clone()));
    }
    if self.fields.is_empty() {
      return Err(DescriptorError::NoFields);
    }

    let backing_name = identifiers::first_lowercase(&self.name)?;
    let mut seen: IndexMap<&str, &FieldDescriptor> = IndexMap::with_capacity(self.fields.len());

    for field in &self.fields {
      if !identifiers::is_valid_identifier(&field.name) {
        return Err(DescriptorError::InvalidIdentifier(field.name.clone()));
      }
      if !identifiers::is_valid_type_expression(&field.java_type) {
        return Err(DescriptorError::InvalidFieldType {
          field: field.name.clone(),
          java_type: field.java_type.clone(),
        });
      }
      if seen.insert(field.name.as_str(), field).is_some() {
        return Err(DescriptorError::DuplicateField(field.name.clone()));
      }
      if field.name == backing_name {
        return Err(DescriptorError::BackingFieldCollision {
          field: field.name.clone(),
          class: self.name.clone(),
        });
      }
    }

    Ok(())
  }

  pub(crate) fn final_field_count(&self) -> usize {
    self.fields.iter().filter(|f| f.is_final).count()
  }
}

impl FieldDescriptor {
  pub fn new(name: impl Into<String>, java_type: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      java_type: java_type.into(),
      is_final: false,
    }
  }

  #[must_use]
  pub fn into_final(mut self) -> Self {
    self.is_final = true;
    self
  }
}
