use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::credit::Credit;
use crate::domain::page::Page;
use crate::domain::page_type::PageType;
use crate::errors::CoreError;

/// Metadatos canónicos de un número (issue) de cómic.
///
/// Es el punto de encuentro entre todos los esquemas de etiquetado: cualquier
/// fuente (ComicInfo.xml, CoMet, bases de datos externas…) se convierte a
/// `ComicMetadata`, se combina con [`ComicMetadata::overlay`] y se vuelve a
/// serializar. La conversión entre esquemas puede perder información.
///
/// Los campos escalares son `String` y la cadena vacía significa "ausente":
/// no se distingue entre "nunca asignado" y "asignado a vacío".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComicMetadata {
  /// Marca de "ninguna fuente ha aportado datos". Es un flag, no una medida
  /// del contenido: el parser y `overlay` (cuando la fuente ya lo tiene en
  /// `false`) lo bajan, y quien rellene campos a mano debe bajarlo también.
  /// Un registro con campos poblados pero `is_empty == true` se muestra como
  /// `No metadata`.
  pub is_empty: bool,

  /// Esquema o fuente de la que salieron los datos ("ComicInfo", "CoMet"…).
  pub tag_origin: String,

  pub series: String,
  /// Designador del número ("1", "12AU", "½"…). Se guarda tal cual.
  pub issue: String,
  pub title: String,
  pub publisher: String,
  pub series_year: String,
  pub month: String,
  pub year: String,
  pub day: String,
  pub issue_count: String,
  pub volume: String,
  pub genre: String,
  /// Código ISO de 2 letras.
  pub language: String,
  /// Sinopsis (el `Summary` de ComicInfo).
  pub comments: String,

  pub volume_count: String,
  pub critical_rating: String,
  pub country: String,

  pub alternate_series: String,
  pub alternate_number: String,
  pub alternate_count: String,
  pub imprint: String,
  pub notes: String,
  pub web_link: String,
  pub format: String,
  pub manga: String,
  pub page_count: String,
  pub maturity_rating: String,

  pub story_arc: String,
  pub series_group: String,
  pub scan_info: String,

  pub characters: String,
  pub teams: String,
  pub locations: String,

  // --- Campos que solo usa CoMet ---
  pub price: String,
  pub is_version_of: String,
  pub rights: String,
  pub identifier: String,
  pub last_mark: String,
  pub cover_image: String,

  /// Único escalar ya tipado. `None` = ninguna fuente lo ha indicado.
  pub black_and_white: Option<bool>,

  /// Créditos en orden de inserción. Nunca hay dos con la misma identidad.
  pub credits: Vec<Credit>,

  pub tags: Vec<String>,

  /// Páginas en orden físico.
  pub pages: Vec<Page>,
}

impl Default for ComicMetadata {
  fn default() -> Self {
    Self {
      is_empty: true,
      tag_origin: String::new(),
      series: String::new(),
      issue: String::new(),
      title: String::new(),
      publisher: String::new(),
      series_year: String::new(),
      month: String::new(),
      year: String::new(),
      day: String::new(),
      issue_count: String::new(),
      volume: String::new(),
      genre: String::new(),
      language: String::new(),
      comments: String::new(),
      volume_count: String::new(),
      critical_rating: String::new(),
      country: String::new(),
      alternate_series: String::new(),
      alternate_number: String::new(),
      alternate_count: String::new(),
      imprint: String::new(),
      notes: String::new(),
      web_link: String::new(),
      format: String::new(),
      manga: String::new(),
      page_count: String::new(),
      maturity_rating: String::new(),
      story_arc: String::new(),
      series_group: String::new(),
      scan_info: String::new(),
      characters: String::new(),
      teams: String::new(),
      locations: String::new(),
      price: String::new(),
      is_version_of: String::new(),
      rights: String::new(),
      identifier: String::new(),
      last_mark: String::new(),
      cover_image: String::new(),
      black_and_white: None,
      credits: Vec::new(),
      tags: Vec::new(),
      pages: Vec::new(),
    }
  }
}

impl ComicMetadata {
  pub fn new() -> Self {
    Self::default()
  }

  /// Añade un crédito o, si ya existe uno con la misma identidad
  /// (persona + rol, sin distinguir mayúsculas), solo actualiza su `primary`.
  pub fn add_credit(&mut self, person: &str, role: &str, primary: bool) {
    match self.credits.iter_mut().find(|c| c.is_same(person, role)) {
      Some(existing) => existing.primary = primary,
      None => self.credits.push(Credit::new(person, role, primary)),
    }
  }

  /// Elimina todos los créditos con `role` (sin importar la persona).
  ///
  /// Devuelve cuántos se eliminaron.
  pub fn remove_credits_with_role(&mut self, role: &str) -> usize {
    let mut removed = 0;
    for idx in (0..self.credits.len()).rev() {
      if self.credits[idx].has_role(role) {
        self.credits.remove(idx);
        removed += 1;
      }
    }
    removed
  }

  /// Genera una lista de páginas por defecto: `count` páginas con `Image = i`
  /// y la primera marcada como portada.
  pub fn set_default_page_list(&mut self, count: usize) {
    for i in 0..count {
      let mut page = Page::with_image(i);
      if i == 0 {
        page.set_page_type(PageType::FrontCover);
      }
      self.pages.push(page);
    }
  }

  /// Convierte un número de página mostrado (posición en `pages`) al índice
  /// de la imagen dentro del archivo. Fuera de rango devuelve 0.
  pub fn archive_page_index(&self, pagenum: usize) -> Result<usize, CoreError> {
    match self.pages.get(pagenum) {
      Some(page) => page.image(),
      None => Ok(0),
    }
  }

  /// Índices (en el archivo) de todas las páginas marcadas como portada.
  ///
  /// Si ninguna página es `FrontCover` devuelve `[0]`.
  pub fn cover_page_index_list(&self) -> Result<Vec<usize>, CoreError> {
    let mut covers =
      self.pages.iter().filter(|p| p.is_front_cover()).map(Page::image).collect::<Result<Vec<_>, _>>()?;

    if covers.is_empty() {
      covers.push(0);
    }

    Ok(covers)
  }

  /// Índice de la portada principal.
  pub fn cover_page_index(&self) -> Result<usize, CoreError> {
    Ok(self.cover_page_index_list()?.first().copied().unwrap_or(0))
  }
}

impl fmt::Display for ComicMetadata {
  /// Resumen legible: una línea `campo: valor` por cada dato presente, con los
  /// nombres alineados. Un registro vacío se muestra como `No metadata`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_empty {
      return writeln!(f, "No metadata");
    }

    let mut vals: Vec<(&str, String)> = Vec::new();
    let mut add = |name: &'static str, val: &str| {
      if !val.is_empty() {
        vals.push((name, val.to_string()));
      }
    };

    add("series", &self.series);
    add("issue", &self.issue);
    add("issue_count", &self.issue_count);
    add("title", &self.title);
    add("publisher", &self.publisher);
    add("year", &self.year);
    add("month", &self.month);
    add("day", &self.day);
    add("volume", &self.volume);
    add("volume_count", &self.volume_count);
    add("genre", &self.genre);
    add("language", &self.language);
    add("country", &self.country);
    add("critical_rating", &self.critical_rating);
    add("alternate_series", &self.alternate_series);
    add("alternate_number", &self.alternate_number);
    add("alternate_count", &self.alternate_count);
    add("imprint", &self.imprint);
    add("web_link", &self.web_link);
    add("format", &self.format);
    add("manga", &self.manga);

    add("price", &self.price);
    add("is_version_of", &self.is_version_of);
    add("rights", &self.rights);
    add("identifier", &self.identifier);
    add("last_mark", &self.last_mark);

    if self.black_and_white == Some(true) {
      add("black_and_white", "true");
    }
    add("maturity_rating", &self.maturity_rating);
    add("story_arc", &self.story_arc);
    add("series_group", &self.series_group);
    add("scan_info", &self.scan_info);
    add("characters", &self.characters);
    add("teams", &self.teams);
    add("locations", &self.locations);
    add("comments", &self.comments);
    add("notes", &self.notes);

    add("tags", &self.tags.join(", "));

    for c in &self.credits {
      let primary = if c.primary { " [P]" } else { "" };
      vals.push(("credit", format!("{}: {}{}", c.role, c.person, primary)));
    }

    let width = vals.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 1;
    for (name, val) in vals {
      writeln!(f, "{:<width$} {}", format!("{name}:"), val)?;
    }

    Ok(())
  }
}
