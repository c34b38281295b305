use super::support::{convert, expect_method, person_with_final_id, point};
use crate::generator::{
  ast::{MemberDef, MemberKind, MemberTarget},
  converter::FinalFieldMode,
};

#[test]
fn test_builder_member_order() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let builder_kinds: Vec<MemberKind> = members
    .iter()
    .filter(|e| e.target == MemberTarget::BuilderClass)
    .map(|e| e.kind)
    .collect();

  assert_eq!(
    builder_kinds,
    vec![
      MemberKind::BuilderField,
      MemberKind::BuilderConstructor,
      MemberKind::BuilderMethod,
      MemberKind::BuilderMethod,
      MemberKind::BuildMethod,
    ]
  );
}

#[test]
fn test_backing_field_declaration() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let entry = members.iter().find(|e| e.kind == MemberKind::BuilderField).unwrap();
  let MemberDef::Field(decl) = &entry.def else {
    panic!("expected a field declaration")
  };
  assert_eq!(decl.name.as_str(), "point");
  assert_eq!(decl.java_type.as_str(), "Point");
}

#[test]
fn test_builder_constructor_initializes_backing_field() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let entry = members
    .iter()
    .find(|e| e.kind == MemberKind::BuilderConstructor)
    .unwrap();
  let ctor = expect_method(entry);
  assert_eq!(ctor.name.as_str(), "PointBuilder");
  assert!(ctor.return_type.is_none());
  assert_eq!(ctor.body, vec!["this.point = new Point();".to_string()]);
}

#[test]
fn test_fluent_method_sets_and_returns_this() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let entry = members
    .iter()
    .find(|e| e.kind == MemberKind::BuilderMethod && e.def.name() == "x")
    .unwrap();
  let method = expect_method(entry);

  assert_eq!(method.return_type.as_ref().unwrap().as_str(), "PointBuilder");
  assert_eq!(method.params.len(), 1);
  assert_eq!(method.params[0].name.as_str(), "x");
  assert_eq!(
    method.body,
    vec!["this.point.setX(x);".to_string(), "return this;".to_string()]
  );
}

#[test]
fn test_fluent_methods_cover_final_fields() {
  let descriptor = person_with_final_id();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let fluent_names: Vec<&str> = members
    .iter()
    .filter(|e| e.kind == MemberKind::BuilderMethod)
    .map(|e| e.def.name())
    .collect();
  assert_eq!(fluent_names, vec!["id", "name"]);
}

#[test]
fn test_build_method_delegates_to_copy_constructor() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let entry = members.iter().find(|e| e.kind == MemberKind::BuildMethod).unwrap();
  let method = expect_method(entry);

  assert_eq!(method.name.as_str(), "build");
  assert_eq!(method.return_type.as_ref().unwrap().as_str(), "Point");
  assert!(method.params.is_empty());
  assert_eq!(method.body, vec!["return new Point(this.point);".to_string()]);
}

#[test]
fn test_fluent_setter_names_match_generated_setters() {
  // Builder wiring agreement: the names the fluent methods call must be the
  // setter names the accessor stage produces for the same fields.
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let setter_names: Vec<String> = members
    .iter()
    .filter(|e| e.kind == MemberKind::Setter)
    .map(|e| e.def.name().to_string())
    .collect();

  for entry in members.iter().filter(|e| e.kind == MemberKind::BuilderMethod) {
    let method = expect_method(entry);
    let call = &method.body[0];
    assert!(
      setter_names.iter().any(|s| call.contains(&format!(".{s}("))),
      "fluent body `{call}` calls no generated setter"
    );
  }
}
