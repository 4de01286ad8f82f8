use serde::{Deserialize, Serialize};

/// Crédito de una persona en un número concreto.
///
/// La identidad de un crédito es el par `(person, role)` comparado sin distinguir
/// mayúsculas. El flag `primary` no forma parte de la identidad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
  /// Nombre del colaborador tal como llegó de la fuente.
  pub person: String,

  /// Rol libre ("Writer", "artist", "Cover Artist"…).
  ///
  /// No se normaliza: la clasificación en categorías vive en [`crate::roles`].
  pub role: String,

  /// Colaborador principal dentro de un rol compartido (p. ej. guionista principal
  /// entre varios co-guionistas).
  #[serde(default)]
  pub primary: bool,
}

impl Credit {
  pub fn new(person: impl Into<String>, role: impl Into<String>, primary: bool) -> Self {
    Self { person: person.into(), role: role.into(), primary }
  }

  /// `true` si este crédito tiene la identidad `(person, role)`.
  pub fn is_same(&self, person: &str, role: &str) -> bool {
    self.person.to_lowercase() == person.to_lowercase() && self.has_role(role)
  }

  /// Compara solo el rol, sin distinguir mayúsculas.
  pub fn has_role(&self, role: &str) -> bool {
    self.role.to_lowercase() == role.to_lowercase()
  }
}
