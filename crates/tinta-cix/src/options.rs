use serde::{Deserialize, Serialize};
use tinta_config::{ConfigBackend, ConfigError};

/// Ajustes de escritura de ComicInfo (sección `[comicinfo]` de tinta.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CixOptions {
  /// Dígitos mínimos de la parte entera de `Number` / `AlternateNumber`.
  /// 0 = sin relleno.
  #[serde(default)]
  pub issue_padding: usize,

  /// Espacios por nivel de indentación. 0 = documento compacto.
  #[serde(default = "default_indent_width")]
  pub indent_width: usize,
}

fn default_indent_width() -> usize {
  2
}

impl Default for CixOptions {
  fn default() -> Self {
    Self { issue_padding: 0, indent_width: default_indent_width() }
  }
}

impl CixOptions {
  pub const SECTION: &'static str = "comicinfo";

  /// Carga la sección (o los valores por defecto) y la vuelve a guardar, así
  /// el archivo de config siempre muestra los ajustes disponibles.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(Self::SECTION, self)
  }
}
