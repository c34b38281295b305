use super::support::{convert, expect_method, person_with_final_id, point};
use crate::generator::{ast::MemberKind, converter::FinalFieldMode};

#[test]
fn test_constructors_come_first() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  assert_eq!(members[0].kind, MemberKind::Constructor);
  assert_eq!(members[1].kind, MemberKind::Constructor);
}

#[test]
fn test_no_arg_constructor_is_empty() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let ctor = expect_method(&members[0]);
  assert_eq!(ctor.name.as_str(), "Point");
  assert!(ctor.return_type.is_none());
  assert!(ctor.params.is_empty());
  assert!(ctor.body.is_empty());
}

#[test]
fn test_copy_constructor_takes_own_class() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let ctor = expect_method(&members[1]);
  assert_eq!(ctor.name.as_str(), "Point");
  assert!(ctor.return_type.is_none());
  assert_eq!(ctor.params.len(), 1);
  assert_eq!(ctor.params[0].java_type.as_str(), "Point");
  assert_eq!(ctor.params[0].name.as_str(), "point");
}

#[test]
fn test_copy_constructor_copies_every_field_via_getter() {
  let descriptor = point();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let ctor = expect_method(&members[1]);
  assert_eq!(
    ctor.body,
    vec![
      "this.x = point.getX();".to_string(),
      "this.y = point.getY();".to_string(),
    ]
  );
}

#[test]
fn test_copy_constructor_includes_final_fields() {
  let descriptor = person_with_final_id();
  let members = convert(&descriptor, FinalFieldMode::Exclude);

  let ctor = expect_method(&members[1]);
  assert_eq!(
    ctor.body,
    vec![
      "this.id = person.getId();".to_string(),
      "this.name = person.getName();".to_string(),
    ]
  );
}
