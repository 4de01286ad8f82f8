use tinta_core::ports::MetadataError;
use tinta_core::{ComicMetadata, CreditCategory, Page};
use tracing::debug;

use crate::mapping::all_scalar_fields;
use crate::tag_keys::{BLACK_AND_WHITE, PAGES, ROOT, is_truthy};
use crate::tree::{Element, parse_document};

pub(crate) const TAG_ORIGIN: &str = "ComicInfo";

pub(crate) fn metadata_from_str(xml: &str) -> Result<ComicMetadata, MetadataError> {
  let root = parse_document(xml)?;
  metadata_from_tree(&root)
}

fn metadata_from_tree(root: &Element) -> Result<ComicMetadata, MetadataError> {
  if root.name != ROOT {
    return Err(MetadataError::MalformedDocument(format!("expected root <{ROOT}>, found <{}>", root.name)));
  }

  let mut md = ComicMetadata::new();
  md.tag_origin = TAG_ORIGIN.to_string();

  for field in all_scalar_fields() {
    let text = root.child_text(field.element).unwrap_or_default();
    *(field.get_mut)(&mut md) = field.kind.decode(text);
  }

  md.black_and_white = Some(root.child_text(BLACK_AND_WHITE).is_some_and(is_truthy));

  // Créditos: una lista separada por comas por elemento. Se recorren todos
  // los hijos, así que un elemento repetido también aporta sus nombres.
  for child in &root.children {
    let Some(category) = CreditCategory::from_element_name(&child.name) else {
      continue;
    };
    for name in child.text.split(',').map(str::trim).filter(|n| !n.is_empty()) {
      md.add_credit(name, category.import_role(), false);
    }
  }

  if let Some(pages) = root.child(PAGES) {
    for page in &pages.children {
      md.pages.push(page.attributes.iter().cloned().collect::<Page>());
    }
  }

  md.is_empty = false;

  debug!(series = %md.series, issue = %md.issue, credits = md.credits.len(), pages = md.pages.len(), "parsed ComicInfo");
  Ok(md)
}
