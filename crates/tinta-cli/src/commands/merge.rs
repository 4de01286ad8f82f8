use std::path::PathBuf;

use anyhow::Result;
use tinta_cix::ComicInfoXml;
use tinta_core::overlay::merge_all;
use tracing::info;

use super::load_document;

/// Overlays the documents left to right; later sources win on populated fields.
pub fn merge(codec: &ComicInfoXml, paths: &[PathBuf]) -> Result<String> {
  let sources = paths.iter().map(|p| load_document(codec, p)).collect::<Result<Vec<_>>>()?;

  let merged = merge_all(&sources);
  info!(sources = sources.len(), credits = merged.credits.len(), "merged documents");

  Ok(codec.string_from_metadata(&merged)?)
}
