use crate::generator::{
  ast::{FieldDecl, MethodDef, ParamDef},
  codegen::{indent, methods::{render_field, render_method}},
};

#[test]
fn test_empty_body_collapses_to_braces() {
  let def = MethodDef::builder().name("Point").build();
  assert_eq!(render_method(&def), "public Point() {}");
}

#[test]
fn test_constructor_has_no_return_type() {
  let def = MethodDef::builder()
    .name("Point")
    .params(vec![ParamDef::builder().name("point").java_type("Point").build()])
    .body(vec!["this.x = point.getX();".to_string()])
    .build();

  assert_eq!(
    render_method(&def),
    "public Point(Point point) {\n    this.x = point.getX();\n}"
  );
}

#[test]
fn test_method_with_return_type_and_params() {
  let def = MethodDef::builder()
    .name("setItems")
    .return_type("void")
    .params(vec![ParamDef::builder().name("items").java_type("List<String>").build()])
    .body(vec!["this.items = items;".to_string()])
    .build();

  assert_eq!(
    render_method(&def),
    "public void setItems(List<String> items) {\n    this.items = items;\n}"
  );
}

#[test]
fn test_multiple_params_are_comma_separated() {
  let def = MethodDef::builder()
    .name("move")
    .return_type("void")
    .params(vec![
      ParamDef::builder().name("dx").java_type("int").build(),
      ParamDef::builder().name("dy").java_type("int").build(),
    ])
    .body(vec!["this.x += dx;".to_string(), "this.y += dy;".to_string()])
    .build();

  assert_eq!(
    render_method(&def),
    "public void move(int dx, int dy) {\n    this.x += dx;\n    this.y += dy;\n}"
  );
}

#[test]
fn test_field_declaration_is_private() {
  let decl = FieldDecl::builder().name("point").java_type("Point").build();
  assert_eq!(render_field(&decl), "private Point point;");
}

#[test]
fn test_indent_skips_blank_lines() {
  let source = "a {\n\nb\n}";
  assert_eq!(indent(source), "    a {\n\n    b\n    }");
}
