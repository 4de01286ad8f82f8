//! Tabla de sinónimos de roles de crédito.
//!
//! ComicInfo solo conoce siete categorías de colaborador. Los roles que llegan
//! de otras fuentes son texto libre ("artist", "Colourist", "Cover Artist"…),
//! así que cada categoría acepta un conjunto de grafías. Un mismo rol puede
//! caer en varias categorías: "artist" cuenta como Penciller y como Inker.
//!
//! Los sinónimos están en minúsculas; la comparación no distingue mayúsculas.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const WRITER_SYNONYMS: &[&str] = &["writer", "plotter", "scripter"];
pub const PENCILLER_SYNONYMS: &[&str] = &["artist", "penciller", "penciler", "breakdowns"];
pub const INKER_SYNONYMS: &[&str] = &["inker", "artist", "finishes"];
pub const COLORIST_SYNONYMS: &[&str] = &["colorist", "colourist", "colorer", "colourer"];
pub const LETTERER_SYNONYMS: &[&str] = &["letterer"];
pub const COVER_SYNONYMS: &[&str] = &["cover", "covers", "coverartist", "cover artist"];
pub const EDITOR_SYNONYMS: &[&str] = &["editor"];

/// Categoría canónica de crédito (una por elemento de ComicInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditCategory {
  Writer,
  Penciller,
  Inker,
  Colorist,
  Letterer,
  CoverArtist,
  Editor,
}

impl CreditCategory {
  /// Todas las categorías, en el orden en que se exportan.
  pub const ALL: [CreditCategory; 7] = [
    CreditCategory::Writer,
    CreditCategory::Penciller,
    CreditCategory::Inker,
    CreditCategory::Colorist,
    CreditCategory::Letterer,
    CreditCategory::CoverArtist,
    CreditCategory::Editor,
  ];

  pub fn synonyms(self) -> &'static [&'static str] {
    match self {
      CreditCategory::Writer => WRITER_SYNONYMS,
      CreditCategory::Penciller => PENCILLER_SYNONYMS,
      CreditCategory::Inker => INKER_SYNONYMS,
      CreditCategory::Colorist => COLORIST_SYNONYMS,
      CreditCategory::Letterer => LETTERER_SYNONYMS,
      CreditCategory::CoverArtist => COVER_SYNONYMS,
      CreditCategory::Editor => EDITOR_SYNONYMS,
    }
  }

  /// Nombre del elemento XML de la categoría.
  pub fn element_name(self) -> &'static str {
    match self {
      CreditCategory::Writer => "Writer",
      CreditCategory::Penciller => "Penciller",
      CreditCategory::Inker => "Inker",
      CreditCategory::Colorist => "Colorist",
      CreditCategory::Letterer => "Letterer",
      CreditCategory::CoverArtist => "CoverArtist",
      CreditCategory::Editor => "Editor",
    }
  }

  /// Rol que recibe un crédito leído desde el elemento de esta categoría.
  ///
  /// Es el nombre del elemento salvo para `CoverArtist`, que se importa como
  /// `"Cover"`. Documentos existentes dependen de esta asimetría.
  pub fn import_role(self) -> &'static str {
    match self {
      CreditCategory::CoverArtist => "Cover",
      other => other.element_name(),
    }
  }

  pub fn from_element_name(name: &str) -> Option<Self> {
    CreditCategory::ALL.into_iter().find(|c| c.element_name() == name)
  }

  /// `true` si `role` es una de las grafías aceptadas por la categoría.
  pub fn accepts(self, role: &str) -> bool {
    let role = role.to_lowercase();
    self.synonyms().iter().any(|s| *s == role)
  }
}

/// Categorías en las que cae un rol libre (puede ser ninguna o varias).
pub fn categories_for_role(role: &str) -> Vec<CreditCategory> {
  CreditCategory::ALL.into_iter().filter(|c| c.accepts(role)).collect()
}

static PARSEABLE_CREDIT_ROLES: Lazy<Vec<&'static str>> = Lazy::new(|| {
  let mut roles: Vec<&'static str> = Vec::new();
  for category in CreditCategory::ALL {
    for synonym in category.synonyms() {
      if !roles.contains(synonym) {
        roles.push(*synonym);
      }
    }
  }
  roles
});

/// Unión de todos los sinónimos: los roles que algún elemento de ComicInfo
/// sabe representar.
pub fn parseable_credit_roles() -> &'static [&'static str] {
  &PARSEABLE_CREDIT_ROLES
}
