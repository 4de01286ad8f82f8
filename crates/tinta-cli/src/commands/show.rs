use std::path::Path;

use anyhow::Result;
use tinta_cix::ComicInfoXml;

use super::load_document;

/// Summary text (or pretty JSON) of one document.
pub fn show(codec: &ComicInfoXml, path: &Path, json: bool) -> Result<String> {
  let md = load_document(codec, path)?;
  if json {
    let mut out = serde_json::to_string_pretty(&md)?;
    out.push('\n');
    return Ok(out);
  }
  Ok(md.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::commands::fixtures::*;
  use tempfile::tempdir;

  #[test]
  fn summary_lists_present_fields() {
    let tmp = tempdir().unwrap();
    let path = write(tmp.path(), "ComicInfo.xml", FIRST);

    let out = show(&ComicInfoXml::new(), &path, false).unwrap();

    assert!(out.contains("series: Example"), "{out}");
    assert!(out.contains("issue:  1"), "{out}");
    assert!(out.contains("credit: Writer: Jane Doe"), "{out}");
    assert!(!out.contains("title"), "{out}");
  }

  #[test]
  fn json_dump_parses_back() {
    let tmp = tempdir().unwrap();
    let path = write(tmp.path(), "ComicInfo.xml", FIRST);

    let out = show(&ComicInfoXml::new(), &path, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["series"], "Example");
    assert_eq!(value["tag_origin"], "ComicInfo");
    assert_eq!(value["pages"][0]["Type"], "FrontCover");
    assert_eq!(value["credits"][0]["role"], "Writer");
  }
}
