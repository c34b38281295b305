use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  ui::{Colors, colors::to_comfy, term_width},
  utils::descriptor::DescriptorLoader,
};

pub async fn list_fields(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let descriptor = DescriptorLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("FIELD").fg(to_comfy(colors.label())));
  header.add_cell(Cell::new("TYPE").fg(to_comfy(colors.label())));
  header.add_cell(Cell::new("FINAL").fg(to_comfy(colors.label())));
  header.add_cell(Cell::new("ACCESSORS").fg(to_comfy(colors.label())));
  table.set_header(header);

  // Declaration order is meaningful, so no sorting here.
  for field in &descriptor.fields {
    let accessors = if field.is_final {
      "constructor and builder only"
    } else {
      "getter and setter"
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&field.name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&field.java_type).fg(to_comfy(colors.primary())));
    row.add_cell(
      Cell::new(if field.is_final { "yes" } else { "no" })
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(accessors).fg(to_comfy(colors.info())));
    table.add_row(row);
  }

  println!("Class: {}", descriptor.name);
  println!("{table}");

  Ok(())
}
