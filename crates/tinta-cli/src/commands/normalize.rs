use std::path::Path;

use anyhow::Result;
use tinta_cix::ComicInfoXml;

use super::load_document;

pub fn normalize(codec: &ComicInfoXml, path: &Path, pad: Option<usize>) -> Result<String> {
  let md = load_document(codec, path)?;

  let out = match pad {
    Some(issue_padding) => {
      let mut options = codec.options().clone();
      options.issue_padding = issue_padding;
      ComicInfoXml::with_options(options).string_from_metadata(&md)?
    }
    None => codec.string_from_metadata(&md)?,
  };
  Ok(out)
}
