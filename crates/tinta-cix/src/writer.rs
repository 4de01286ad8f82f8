use std::fmt::Display;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tinta_core::ports::MetadataError;
use tinta_core::{ComicMetadata, Credit, CreditCategory, categories_for_role};
use tracing::debug;

use crate::mapping::{LEADING_FIELDS, MIDDLE_FIELDS, ScalarField, TRAILING_FIELDS};
use crate::options::CixOptions;
use crate::tag_keys::{BLACK_AND_WHITE, BLACK_AND_WHITE_YES, PAGE, PAGES, ROOT, ROOT_ATTRIBUTES};

fn write_error(e: impl Display) -> MetadataError {
  MetadataError::Io(e.to_string())
}

/// Reparte los créditos en las siete categorías (un crédito puede caer en
/// varias). Las comas se eliminan del nombre porque son el separador de la
/// lista y no se escapan. Las categorías vacías no aparecen.
pub(crate) fn credit_buckets(credits: &[Credit]) -> Vec<(CreditCategory, Vec<String>)> {
  let mut buckets: Vec<(CreditCategory, Vec<String>)> =
    CreditCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();

  for credit in credits {
    let person = credit.person.replace(',', "");
    if person.trim().is_empty() {
      continue;
    }
    for category in categories_for_role(&credit.role) {
      if let Some((_, names)) = buckets.iter_mut().find(|(c, _)| *c == category) {
        names.push(person.clone());
      }
    }
  }

  buckets.retain(|(_, names)| !names.is_empty());
  buckets
}

/// Regla `Name` de XML 1.0 (simplificada: cualquier carácter no ASCII vale).
pub(crate) fn is_xml_name(name: &str) -> bool {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return false;
  };

  let start_ok = |c: char| c.is_ascii_alphabetic() || c == '_' || c == ':' || !c.is_ascii();
  start_ok(first) && chars.all(|c| start_ok(c) || c.is_ascii_digit() || c == '-' || c == '.')
}

struct DocumentWriter<W: Write> {
  inner: Writer<W>,
  issue_padding: usize,
}

impl<W: Write> DocumentWriter<W> {
  fn text_element(&mut self, name: &str, value: &str) -> Result<(), MetadataError> {
    self.inner.write_event(Event::Start(BytesStart::new(name))).map_err(write_error)?;
    self.inner.write_event(Event::Text(BytesText::new(value))).map_err(write_error)?;
    self.inner.write_event(Event::End(BytesEnd::new(name))).map_err(write_error)?;
    Ok(())
  }

  fn scalar_fields(&mut self, md: &ComicMetadata, fields: &[ScalarField]) -> Result<(), MetadataError> {
    for field in fields {
      if let Some(value) = field.kind.encode((field.get)(md), self.issue_padding) {
        self.text_element(field.element, &value)?;
      }
    }
    Ok(())
  }

  fn document(&mut self, md: &ComicMetadata) -> Result<(), MetadataError> {
    self.inner.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None))).map_err(write_error)?;

    let mut root = BytesStart::new(ROOT);
    for (key, value) in ROOT_ATTRIBUTES {
      root.push_attribute((*key, *value));
    }
    self.inner.write_event(Event::Start(root)).map_err(write_error)?;

    self.scalar_fields(md, LEADING_FIELDS)?;

    for (category, names) in credit_buckets(&md.credits) {
      self.text_element(category.element_name(), &names.join(", "))?;
    }

    self.scalar_fields(md, MIDDLE_FIELDS)?;

    if md.black_and_white == Some(true) {
      self.text_element(BLACK_AND_WHITE, BLACK_AND_WHITE_YES)?;
    }

    self.scalar_fields(md, TRAILING_FIELDS)?;

    if !md.pages.is_empty() {
      self.inner.write_event(Event::Start(BytesStart::new(PAGES))).map_err(write_error)?;
      for page in &md.pages {
        let mut element = BytesStart::new(PAGE);
        for (key, value) in page.iter() {
          if !is_xml_name(key) {
            return Err(MetadataError::Internal(format!("page attribute {key:?} is not a valid XML name")));
          }
          element.push_attribute((key, value));
        }
        self.inner.write_event(Event::Empty(element)).map_err(write_error)?;
      }
      self.inner.write_event(Event::End(BytesEnd::new(PAGES))).map_err(write_error)?;
    }

    self.inner.write_event(Event::End(BytesEnd::new(ROOT))).map_err(write_error)?;
    self.inner.get_mut().write_all(b"\n").map_err(write_error)?;
    Ok(())
  }
}

pub(crate) fn write_metadata<W: Write>(md: &ComicMetadata, out: W, options: &CixOptions) -> Result<W, MetadataError> {
  let inner = match options.indent_width {
    0 => Writer::new(out),
    width => Writer::new_with_indent(out, b' ', width),
  };

  let mut writer = DocumentWriter { inner, issue_padding: options.issue_padding };
  writer.document(md)?;

  debug!(series = %md.series, issue = %md.issue, credits = md.credits.len(), pages = md.pages.len(), "wrote ComicInfo");
  Ok(writer.inner.into_inner())
}

pub(crate) fn metadata_to_string(md: &ComicMetadata, options: &CixOptions) -> Result<String, MetadataError> {
  let bytes = write_metadata(md, Vec::new(), options)?;
  String::from_utf8(bytes).map_err(|e| MetadataError::Internal(format!("non UTF-8 output: {e}")))
}
