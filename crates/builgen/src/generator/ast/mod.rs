pub mod tokens;

use serde::Serialize;
pub use tokens::{ClassNameToken, FieldNameToken, MethodNameToken, TypeToken};

use super::{errors::DescriptorError, naming::identifiers};

/// What kind of member a generated fragment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MemberKind {
  Constructor,
  Getter,
  Setter,
  BuilderField,
  BuilderConstructor,
  BuilderMethod,
  BuildMethod,
}

/// Which class body the host should attach a member to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MemberTarget {
  OuterClass,
  BuilderClass,
}

/// One member declaration, ready for the host to parse and attach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMember {
  pub kind: MemberKind,
  pub target: MemberTarget,
  pub name: String,
  pub source: String,
}

/// Method or constructor parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub(crate) struct ParamDef {
  #[builder(into)]
  pub name: FieldNameToken,
  #[builder(into)]
  pub java_type: TypeToken,
}

/// Method or constructor definition. A `None` return type renders a
/// constructor signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub(crate) struct MethodDef {
  #[builder(into)]
  pub name: MethodNameToken,
  #[builder(into)]
  pub return_type: Option<TypeToken>,
  #[builder(default)]
  pub params: Vec<ParamDef>,
  /// Body statements, one per line, already terminated.
  #[builder(default)]
  pub body: Vec<String>,
}

/// Private field declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub(crate) struct FieldDecl {
  #[builder(into)]
  pub name: FieldNameToken,
  #[builder(into)]
  pub java_type: TypeToken,
}

/// A converted member before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MemberDef {
  Field(FieldDecl),
  Method(MethodDef),
}

impl MemberDef {
  pub(crate) fn name(&self) -> &str {
    match self {
      MemberDef::Field(decl) => decl.name.as_str(),
      MemberDef::Method(def) => def.name.as_str(),
    }
  }
}

/// Names derived from the target class, alive only for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BuilderSpec {
  pub class_name: ClassNameToken,
  pub builder_name: ClassNameToken,
  /// Also used as the copy-constructor parameter name.
  pub backing_field: FieldNameToken,
}

impl BuilderSpec {
  pub(crate) fn derive(class_name: &str) -> Result<Self, DescriptorError> {
    Ok(Self {
      class_name: ClassNameToken::new(class_name),
      builder_name: ClassNameToken::new(format!("{class_name}Builder")),
      backing_field: FieldNameToken::new(identifiers::first_lowercase(class_name)?),
    })
  }
}
