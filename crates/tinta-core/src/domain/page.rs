use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::page_type::PageType;
use crate::errors::CoreError;

/// Atributo con el índice de la imagen dentro del archivo (obligatorio).
pub const KEY_IMAGE: &str = "Image";
/// Atributo con el [`PageType`] de la página.
pub const KEY_TYPE: &str = "Type";

/// Una página física del número.
///
/// Es un mapa abierto de atributos (`clave → valor`) que conserva el orden de
/// inserción y cualquier clave desconocida (`DoublePage`, `ImageSize`, `Key`,
/// `ImageWidth`…). Encima del mapa hay accesores tipados para `Image` y `Type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(IndexMap<String, String>);

impl Page {
  pub fn new() -> Self {
    Self::default()
  }

  /// Página con solo el atributo `Image`.
  pub fn with_image(index: usize) -> Self {
    let mut page = Self::new();
    page.set(KEY_IMAGE, index.to_string());
    page
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.0.get(key).map(String::as_str)
  }

  /// Inserta o reemplaza un atributo. Reemplazar no cambia su posición.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    self.0.insert(key.into(), value.into())
  }

  pub fn remove(&mut self, key: &str) -> Option<String> {
    self.0.shift_remove(key)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Índice de la imagen dentro del archivo.
  ///
  /// Falla con [`CoreError::InvalidPageIndex`] si falta el atributo o no es un
  /// entero no negativo.
  pub fn image(&self) -> Result<usize, CoreError> {
    let raw = self
      .get(KEY_IMAGE)
      .ok_or_else(|| CoreError::InvalidPageIndex(format!("page has no {KEY_IMAGE} attribute")))?;

    raw
      .trim()
      .parse::<usize>()
      .map_err(|_| CoreError::InvalidPageIndex(format!("{KEY_IMAGE} attribute {raw:?} is not an integer")))
  }

  /// Tipo de página, si el atributo existe y es uno de los conocidos.
  pub fn page_type(&self) -> Option<PageType> {
    self.get(KEY_TYPE).and_then(|raw| raw.parse().ok())
  }

  pub fn set_page_type(&mut self, page_type: PageType) {
    self.set(KEY_TYPE, page_type.as_str());
  }

  pub fn is_front_cover(&self) -> bool {
    self.page_type() == Some(PageType::FrontCover)
  }
}

impl<K, V> FromIterator<(K, V)> for Page
where
  K: Into<String>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Page(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

impl From<IndexMap<String, String>> for Page {
  fn from(map: IndexMap<String, String>) -> Self {
    Page(map)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_unknown_keys_in_insertion_order() {
    let page: Page = [("Image", "4"), ("DoublePage", "True"), ("Type", "Story"), ("ImageSize", "1024")]
      .into_iter()
      .collect();

    let keys: Vec<&str> = page.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["Image", "DoublePage", "Type", "ImageSize"]);
    assert_eq!(page.get("DoublePage"), Some("True"));
  }

  #[test]
  fn replacing_a_key_keeps_its_position() {
    let mut page: Page = [("Image", "0"), ("Type", "Story")].into_iter().collect();
    page.set("Image", "7");

    let pairs: Vec<(&str, &str)> = page.iter().collect();
    assert_eq!(pairs, vec![("Image", "7"), ("Type", "Story")]);
  }

  #[test]
  fn remove_closes_the_gap() {
    let mut page: Page = [("Image", "0"), ("DoublePage", "True"), ("Type", "Story")].into_iter().collect();

    assert_eq!(page.remove("DoublePage"), Some("True".to_string()));
    assert_eq!(page.remove("DoublePage"), None);

    let pairs: Vec<(&str, &str)> = page.iter().collect();
    assert_eq!(pairs, vec![("Image", "0"), ("Type", "Story")]);
    assert_eq!(page.len(), 2);
  }

  #[test]
  fn typed_accessors() {
    let mut page = Page::with_image(3);
    page.set_page_type(PageType::FrontCover);

    assert_eq!(page.image(), Ok(3));
    assert_eq!(page.page_type(), Some(PageType::FrontCover));
    assert!(page.is_front_cover());
  }

  #[test]
  fn unparsable_image_is_an_error() {
    let page: Page = [("Image", "cover.jpg")].into_iter().collect();
    assert!(matches!(page.image(), Err(CoreError::InvalidPageIndex(_))));

    assert!(matches!(Page::new().image(), Err(CoreError::InvalidPageIndex(_))));
  }

  #[test]
  fn unknown_type_is_kept_but_untyped() {
    let page: Page = [("Image", "1"), ("Type", "Centerfold")].into_iter().collect();

    assert_eq!(page.page_type(), None);
    assert_eq!(page.get(KEY_TYPE), Some("Centerfold"));
  }

  #[test]
  fn serializes_as_a_flat_ordered_object() {
    let page: Page = [("Type", "FrontCover"), ("Image", "0")].into_iter().collect();

    let json = serde_json::to_string(&page).unwrap();
    assert_eq!(json, r#"{"Type":"FrontCover","Image":"0"}"#);

    let back: Page = serde_json::from_str(&json).unwrap();
    assert_eq!(back, page);
  }
}
