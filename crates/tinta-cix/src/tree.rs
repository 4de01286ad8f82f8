//! Árbol mínimo de elementos construido con `quick-xml`.
//!
//! Solo guarda lo que el mapeo necesita: nombre, atributos en orden, texto
//! (concatenado tal cual, se recorta al mapear cada campo) e hijos. Comentarios, PIs y la
//! declaración XML se ignoran.

use std::fmt::Display;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tinta_core::ports::MetadataError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Element {
  pub name: String,
  pub attributes: Vec<(String, String)>,
  pub text: String,
  pub children: Vec<Element>,
}

fn malformed(e: impl Display) -> MetadataError {
  MetadataError::MalformedDocument(e.to_string())
}

impl Element {
  fn from_start(start: &BytesStart<'_>) -> Result<Self, MetadataError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
      let attr = attr.map_err(malformed)?;
      let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
      let value = attr.unescape_value().map_err(malformed)?.into_owned();
      attributes.push((key, value));
    }

    Ok(Self { name, attributes, ..Self::default() })
  }

  /// Primer hijo directo con ese nombre.
  pub fn child(&self, name: &str) -> Option<&Element> {
    self.children.iter().find(|c| c.name == name)
  }

  /// Texto del primer hijo directo con ese nombre.
  pub fn child_text(&self, name: &str) -> Option<&str> {
    self.child(name).map(|c| c.text.as_str())
  }
}

/// Parsea un documento completo y devuelve su elemento raíz.
pub(crate) fn parse_document(xml: &str) -> Result<Element, MetadataError> {
  let mut reader = Reader::from_str(xml);

  let mut stack: Vec<Element> = Vec::new();
  let mut root: Option<Element> = None;

  loop {
    match reader.read_event().map_err(malformed)? {
      Event::Start(start) => stack.push(Element::from_start(&start)?),
      Event::Empty(start) => {
        let element = Element::from_start(&start)?;
        attach(&mut stack, &mut root, element)?;
      }
      Event::End(_) => {
        let element = stack.pop().ok_or_else(|| malformed("closing tag without opening tag"))?;
        attach(&mut stack, &mut root, element)?;
      }
      Event::Text(text) => {
        let text = text.unescape().map_err(malformed)?;
        match stack.last_mut() {
          Some(current) => current.text.push_str(&text),
          None if text.trim().is_empty() => {}
          None => return Err(malformed("text outside of the root element")),
        }
      }
      Event::CData(data) => {
        if let Some(current) = stack.last_mut() {
          current.text.push_str(&String::from_utf8_lossy(&data));
        }
      }
      Event::Eof => break,
      _ => {}
    }
  }

  if let Some(open) = stack.last() {
    return Err(malformed(format!("unexpected end of document inside <{}>", open.name)));
  }

  root.ok_or_else(|| malformed("document has no root element"))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<(), MetadataError> {
  if let Some(parent) = stack.last_mut() {
    parent.children.push(element);
    return Ok(());
  }

  if root.is_some() {
    return Err(malformed("more than one root element"));
  }

  *root = Some(element);
  Ok(())
}
