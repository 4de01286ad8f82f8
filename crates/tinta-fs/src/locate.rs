use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Nombre del archivo de metadatos dentro de un número desempaquetado.
pub const COMIC_INFO_FILE: &str = "ComicInfo.xml";

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("no ComicInfo.xml found in {}", .0.display())]
  NotFound(PathBuf),
}

/// Busca `ComicInfo.xml` directamente dentro de `dir` (sin recursión).
///
/// El nombre se compara sin distinguir mayúsculas; si hay varios candidatos
/// (`comicinfo.xml` y `ComicInfo.xml` en un FS case-sensitive) se elige el
/// primero en orden lexicográfico.
pub fn find_comic_info(dir: &Path) -> Result<Option<PathBuf>, FsError> {
  let mut candidates = Vec::new();

  for entry in fs::read_dir(dir)? {
    let entry = entry?;
    if !entry.file_type()?.is_file() {
      continue;
    }
    if entry.file_name().to_string_lossy().eq_ignore_ascii_case(COMIC_INFO_FILE) {
      candidates.push(entry.path());
    }
  }

  candidates.sort();
  Ok(candidates.into_iter().next())
}

/// Acepta un archivo o un directorio y devuelve la ruta del ComicInfo.xml.
pub fn resolve_comic_info(path: &Path) -> Result<PathBuf, FsError> {
  if !path.is_dir() {
    return Ok(path.to_path_buf());
  }

  let found = find_comic_info(path)?.ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
  debug!(dir = %path.display(), file = %found.display(), "resolved comic info file");
  Ok(found)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn finds_file_case_insensitively() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("001.jpg"), b"").unwrap();
    fs::write(tmp.path().join("comicinfo.XML"), "<ComicInfo/>").unwrap();

    let found = find_comic_info(tmp.path()).unwrap().unwrap();
    assert_eq!(found.file_name().unwrap(), "comicinfo.XML");
  }

  #[test]
  fn ignores_directories_with_the_same_name() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join(COMIC_INFO_FILE)).unwrap();

    assert!(find_comic_info(tmp.path()).unwrap().is_none());
  }

  #[test]
  fn resolve_passes_files_through_and_fails_on_empty_dirs() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("meta.xml");
    fs::write(&file, "<ComicInfo/>").unwrap();

    assert_eq!(resolve_comic_info(&file).unwrap(), file);
    assert!(matches!(resolve_comic_info(tmp.path()), Err(FsError::NotFound(_))));
  }
}
