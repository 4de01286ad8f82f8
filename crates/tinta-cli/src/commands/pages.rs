use anyhow::Result;
use tinta_cix::ComicInfoXml;
use tinta_core::ComicMetadata;

/// Document with `count` pages, the first one marked as front cover.
pub fn pages(codec: &ComicInfoXml, count: usize) -> Result<String> {
  let mut md = ComicMetadata::new();
  md.set_default_page_list(count);
  Ok(codec.string_from_metadata(&md)?)
}
