use std::fmt::{Display, Formatter};

use string_cache::DefaultAtom;

/// Interned name of a class (outer class or builder class).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassNameToken(DefaultAtom);

impl ClassNameToken {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ClassNameToken {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for ClassNameToken {
  fn from(s: String) -> Self {
    Self::new(s)
  }
}

impl Display for ClassNameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// Interned name of a field or parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldNameToken(DefaultAtom);

impl FieldNameToken {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for FieldNameToken {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for FieldNameToken {
  fn from(s: String) -> Self {
    Self::new(s)
  }
}

impl Display for FieldNameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// Interned name of a method or constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodNameToken(DefaultAtom);

impl MethodNameToken {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for MethodNameToken {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for MethodNameToken {
  fn from(s: String) -> Self {
    Self::new(s)
  }
}

impl Display for MethodNameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// Interned display form of a Java type (`int`, `List<String>`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeToken(DefaultAtom);

impl TypeToken {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(name.as_ref()))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TypeToken {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for TypeToken {
  fn from(s: String) -> Self {
    Self::new(s)
  }
}

impl Display for TypeToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}
