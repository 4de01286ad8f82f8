/// Elemento raíz del documento.
pub const ROOT: &str = "ComicInfo";

/// Atributos fijos de la raíz (declaraciones de namespace de XML Schema).
pub const ROOT_ATTRIBUTES: &[(&str, &str)] = &[
  ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
  ("xmlns:xsd", "http://www.w3.org/2001/XMLSchema"),
];

pub const PAGES: &str = "Pages";
pub const PAGE: &str = "Page";

pub const BLACK_AND_WHITE: &str = "BlackAndWhite";
/// Texto que se escribe cuando `BlackAndWhite` es verdadero.
pub const BLACK_AND_WHITE_YES: &str = "Yes";
/// Textos que se leen como verdadero (comparación sin mayúsculas).
pub const TRUTHY_VALUES: &[&str] = &["yes", "true", "1"];

/// `true` si `text` es uno de los [`TRUTHY_VALUES`].
pub fn is_truthy(text: &str) -> bool {
  let text = text.trim().to_lowercase();
  TRUTHY_VALUES.iter().any(|v| *v == text)
}
