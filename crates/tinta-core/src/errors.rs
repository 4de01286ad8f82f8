// crates/tinta-core/src/errors.rs
use thiserror::Error;

use crate::ports::MetadataError;

/// Error genérico del núcleo de Tinta.
///
/// El merge (`overlay`) nunca falla; los índices de página y los codecs sí.
/// Las capas superiores (CLI, etc.) lo mapean a mensajes de usuario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("invalid page index: {0}")]
  InvalidPageIndex(String),

  #[error("metadata error: {0}")]
  Metadata(String),
}

impl From<MetadataError> for CoreError {
  fn from(err: MetadataError) -> Self {
    CoreError::Metadata(err.to_string())
  }
}
