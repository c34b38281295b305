use crate::generator::{
  ast::{MemberDef, MethodDef},
  converter::{FinalFieldMode, MemberConverter, MemberEntry},
  descriptor::{ClassDescriptor, FieldDescriptor},
};

pub(super) fn point() -> ClassDescriptor {
  ClassDescriptor::new(
    "Point",
    vec![FieldDescriptor::new("x", "int"), FieldDescriptor::new("y", "int")],
  )
}

pub(super) fn person_with_final_id() -> ClassDescriptor {
  ClassDescriptor::new(
    "Person",
    vec![
      FieldDescriptor::new("id", "long").into_final(),
      FieldDescriptor::new("name", "String"),
    ],
  )
}

pub(super) fn convert(descriptor: &ClassDescriptor, mode: FinalFieldMode) -> Vec<MemberEntry> {
  MemberConverter::new(descriptor, mode).unwrap().convert().unwrap()
}

pub(super) fn expect_method(entry: &MemberEntry) -> &MethodDef {
  let MemberDef::Method(method) = &entry.def else {
    panic!("expected a method, got {:?}", entry.def)
  };
  method
}
