use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Tipo de una página dentro del número.
///
/// La enumeración es cerrada y coincide con los valores del atributo `Type`
/// de ComicInfo. Un valor desconocido no se pierde: sigue guardado tal cual en
/// el mapa de atributos de la [`Page`](crate::domain::Page), solo que
/// [`Page::page_type`](crate::domain::Page::page_type) devuelve `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
  FrontCover,
  InnerCover,
  Roundup,
  Story,
  Advertisement,
  Editorial,
  Letters,
  Preview,
  BackCover,
  Other,
  Deleted,
}

impl PageType {
  pub const ALL: [PageType; 11] = [
    PageType::FrontCover,
    PageType::InnerCover,
    PageType::Roundup,
    PageType::Story,
    PageType::Advertisement,
    PageType::Editorial,
    PageType::Letters,
    PageType::Preview,
    PageType::BackCover,
    PageType::Other,
    PageType::Deleted,
  ];

  /// Nombre canónico, tal como se escribe en el documento.
  pub fn as_str(&self) -> &'static str {
    match self {
      PageType::FrontCover => "FrontCover",
      PageType::InnerCover => "InnerCover",
      PageType::Roundup => "Roundup",
      PageType::Story => "Story",
      PageType::Advertisement => "Advertisement",
      PageType::Editorial => "Editorial",
      PageType::Letters => "Letters",
      PageType::Preview => "Preview",
      PageType::BackCover => "BackCover",
      PageType::Other => "Other",
      PageType::Deleted => "Deleted",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page type: {0}")]
pub struct UnknownPageType(pub String);

impl FromStr for PageType {
  type Err = UnknownPageType;

  /// Acepta el nombre canónico sin distinguir mayúsculas (con trimming).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim();

    PageType::ALL
      .iter()
      .copied()
      .find(|t| t.as_str().eq_ignore_ascii_case(normalized))
      .ok_or_else(|| UnknownPageType(s.to_string()))
  }
}

impl fmt::Display for PageType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
