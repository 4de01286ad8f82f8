mod merge;
mod normalize;
mod pages;
mod roles;
mod show;

use std::path::Path;

use anyhow::{Context, Result};
use tinta_cix::ComicInfoXml;
use tinta_core::ComicMetadata;
use tracing::info;

pub use merge::merge;
pub use normalize::normalize;
pub use pages::pages;
pub use roles::roles;
pub use show::show;

/// Resolves `path` (file or directory) and parses the ComicInfo.xml it points at.
pub(crate) fn load_document(codec: &ComicInfoXml, path: &Path) -> Result<ComicMetadata> {
  let file = tinta_fs::resolve_comic_info(path)?;
  let text = tinta_fs::read_text(&file).with_context(|| format!("reading {}", file.display()))?;
  codec.metadata_from_str(&text).with_context(|| format!("parsing {}", file.display()))
}

/// Writes `text` to `output` (atomically) or prints it to stdout.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
  match output {
    Some(path) => {
      tinta_fs::atomic_write_str(path, text).with_context(|| format!("writing {}", path.display()))?;
      info!(path = %path.display(), "wrote document");
    }
    None => print!("{text}"),
  }
  Ok(())
}
