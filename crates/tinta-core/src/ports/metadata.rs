use crate::domain::ComicMetadata;

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
  /// XML ilegible, sin raíz, o con una raíz distinta de la esperada.
  #[error("malformed document: {0}")]
  MalformedDocument(String),

  #[error("io error: {0}")]
  Io(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Port que abstrae un esquema de etiquetado (ComicInfo, CoMet…).
///
/// Las implementaciones solo convierten entre texto y [`ComicMetadata`]; abrir
/// archivos o contenedores (CBZ, CBR) es cosa de otra capa.
pub trait MetadataFormat: Send + Sync {
  /// Nombre del esquema, se usa como `tag_origin`.
  fn name(&self) -> &'static str;

  /// Si falla no se devuelve un registro parcial.
  fn read_from_str(&self, text: &str) -> Result<ComicMetadata, MetadataError>;

  fn write_to_string(&self, metadata: &ComicMetadata) -> Result<String, MetadataError>;
}
