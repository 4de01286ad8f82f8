//! Tabla campo escalar <-> elemento de ComicInfo.
//!
//! El orden de cada tabla es el orden de escritura. Los créditos van entre
//! [`LEADING_FIELDS`] y [`MIDDLE_FIELDS`]; `BlackAndWhite` entre
//! [`MIDDLE_FIELDS`] y [`TRAILING_FIELDS`].

use tinta_core::{ComicMetadata, normalize_issue, normalize_number};

/// Cómo se normaliza el valor al leer/escribir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
  /// Texto libre, se escribe tal cual.
  Text,
  /// Solo dígitos, sin ceros a la izquierda.
  Number,
  /// Designador de issue (con relleno configurable al escribir).
  Issue,
}

impl ValueKind {
  /// Valor a escribir, o `None` si el campo no está poblado.
  pub(crate) fn encode(self, value: &str, issue_padding: usize) -> Option<String> {
    if value.trim().is_empty() {
      return None;
    }

    match self {
      ValueKind::Text => Some(value.to_string()),
      ValueKind::Number => normalize_number(value),
      ValueKind::Issue => Some(normalize_issue(value, issue_padding)).filter(|v| !v.is_empty()),
    }
  }

  /// Valor leído de un elemento; ausente o vacío da `""`.
  pub(crate) fn decode(self, text: &str) -> String {
    let text = text.trim();
    match self {
      ValueKind::Text => text.to_string(),
      ValueKind::Number => normalize_number(text).unwrap_or_default(),
      ValueKind::Issue => normalize_issue(text, 0),
    }
  }
}

pub(crate) struct ScalarField {
  pub element: &'static str,
  pub kind: ValueKind,
  pub get: fn(&ComicMetadata) -> &str,
  pub get_mut: fn(&mut ComicMetadata) -> &mut String,
}

macro_rules! field {
  ($element:literal, $kind:ident, $field:ident) => {
    ScalarField {
      element: $element,
      kind: ValueKind::$kind,
      get: |m| m.$field.as_str(),
      get_mut: |m| &mut m.$field,
    }
  };
}

pub(crate) const LEADING_FIELDS: &[ScalarField] = &[
  field!("Title", Text, title),
  field!("Series", Text, series),
  field!("Number", Issue, issue),
  field!("Count", Number, issue_count),
  field!("Volume", Number, volume),
  field!("AlternateSeries", Text, alternate_series),
  field!("AlternateNumber", Issue, alternate_number),
  field!("StoryArc", Text, story_arc),
  field!("SeriesGroup", Text, series_group),
  field!("AlternateCount", Number, alternate_count),
  field!("Summary", Text, comments),
  field!("Notes", Text, notes),
  field!("Year", Number, year),
  field!("SeriesYear", Number, series_year),
  field!("Month", Number, month),
  field!("Day", Number, day),
];

pub(crate) const MIDDLE_FIELDS: &[ScalarField] = &[
  field!("Publisher", Text, publisher),
  field!("Imprint", Text, imprint),
  field!("Genre", Text, genre),
  field!("Web", Text, web_link),
  field!("PageCount", Text, page_count),
  field!("LanguageISO", Text, language),
  field!("Format", Text, format),
  field!("AgeRating", Text, maturity_rating),
];

pub(crate) const TRAILING_FIELDS: &[ScalarField] = &[
  field!("Manga", Text, manga),
  field!("Characters", Text, characters),
  field!("Teams", Text, teams),
  field!("Locations", Text, locations),
  field!("ScanInformation", Text, scan_info),
];

/// Todos los campos escalares, en orden de escritura.
pub(crate) fn all_scalar_fields() -> impl Iterator<Item = &'static ScalarField> {
  LEADING_FIELDS.iter().chain(MIDDLE_FIELDS).chain(TRAILING_FIELDS)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numbers_are_normalized_both_ways() {
    assert_eq!(ValueKind::Number.encode("0042", 0), Some("42".into()));
    assert_eq!(ValueKind::Number.encode("n/a", 0), None);
    assert_eq!(ValueKind::Number.decode(" 2019 "), "2019");
    assert_eq!(ValueKind::Number.decode(""), "");
  }

  #[test]
  fn issue_padding_only_applies_on_write() {
    assert_eq!(ValueKind::Issue.encode("7", 3), Some("007".into()));
    assert_eq!(ValueKind::Issue.decode("007"), "7");
  }

  #[test]
  fn blank_values_are_not_written() {
    assert_eq!(ValueKind::Text.encode("   ", 0), None);
    assert_eq!(ValueKind::Issue.encode("", 3), None);
  }

  #[test]
  fn accessors_point_at_distinct_fields() {
    let mut md = ComicMetadata::new();
    for (i, field) in all_scalar_fields().enumerate() {
      *(field.get_mut)(&mut md) = i.to_string();
    }
    for (i, field) in all_scalar_fields().enumerate() {
      assert_eq!((field.get)(&md), i.to_string(), "{}", field.element);
    }
    assert_eq!(all_scalar_fields().count(), 29);
  }
}
