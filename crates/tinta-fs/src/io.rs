use std::fs;
use std::io::{self, Write};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Escribe `contents` en un archivo temporal y lo renombra sobre `path`.
///
/// Un lector concurrente ve el archivo viejo o el nuevo, nunca uno a medias.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Lee un archivo de texto UTF-8 quitando el BOM inicial si lo hay.
///
/// Muchos ComicInfo.xml generados en Windows empiezan con BOM.
pub fn read_text(path: &Path) -> io::Result<String> {
  let content = fs::read_to_string(path)?;
  match content.strip_prefix(UTF8_BOM) {
    Some(stripped) => Ok(stripped.to_string()),
    None => Ok(content),
  }
}
