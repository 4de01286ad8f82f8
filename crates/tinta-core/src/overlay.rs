//! Merge (overlay) de un [`ComicMetadata`] sobre otro.
//!
//! Reglas:
//! - escalares: gana el último valor no vacío (tras `trim`); un campo vacío en
//!   la fuente nunca borra datos existentes;
//! - `black_and_white`: se sobrescribe si la fuente lo indica;
//! - `tags` / `pages`: la lista entera se reemplaza si la fuente trae alguna;
//! - créditos: upsert por identidad, y un crédito con persona vacía borra
//!   todos los créditos de ese rol.

use tracing::trace;

use crate::domain::{ComicMetadata, Credit};

fn assign(cur: &mut String, new: &str) {
  let new = new.trim();
  if !new.is_empty() {
    *cur = new.to_string();
  }
}

impl ComicMetadata {
  /// Aplica `incoming` encima de `self`. Nunca falla.
  pub fn overlay(&mut self, incoming: &ComicMetadata) {
    if !incoming.is_empty {
      self.is_empty = false;
    }

    assign(&mut self.tag_origin, &incoming.tag_origin);
    assign(&mut self.series, &incoming.series);
    assign(&mut self.issue, &incoming.issue);
    assign(&mut self.issue_count, &incoming.issue_count);
    assign(&mut self.title, &incoming.title);
    assign(&mut self.publisher, &incoming.publisher);
    assign(&mut self.day, &incoming.day);
    assign(&mut self.month, &incoming.month);
    assign(&mut self.series_year, &incoming.series_year);
    assign(&mut self.year, &incoming.year);
    assign(&mut self.volume, &incoming.volume);
    assign(&mut self.volume_count, &incoming.volume_count);
    assign(&mut self.genre, &incoming.genre);
    assign(&mut self.language, &incoming.language);
    assign(&mut self.country, &incoming.country);
    assign(&mut self.critical_rating, &incoming.critical_rating);
    assign(&mut self.alternate_series, &incoming.alternate_series);
    assign(&mut self.alternate_number, &incoming.alternate_number);
    assign(&mut self.alternate_count, &incoming.alternate_count);
    assign(&mut self.imprint, &incoming.imprint);
    assign(&mut self.web_link, &incoming.web_link);
    assign(&mut self.format, &incoming.format);
    assign(&mut self.manga, &incoming.manga);
    assign(&mut self.page_count, &incoming.page_count);
    assign(&mut self.maturity_rating, &incoming.maturity_rating);
    assign(&mut self.story_arc, &incoming.story_arc);
    assign(&mut self.series_group, &incoming.series_group);
    assign(&mut self.scan_info, &incoming.scan_info);
    assign(&mut self.characters, &incoming.characters);
    assign(&mut self.teams, &incoming.teams);
    assign(&mut self.locations, &incoming.locations);
    assign(&mut self.comments, &incoming.comments);
    assign(&mut self.notes, &incoming.notes);

    assign(&mut self.price, &incoming.price);
    assign(&mut self.is_version_of, &incoming.is_version_of);
    assign(&mut self.rights, &incoming.rights);
    assign(&mut self.identifier, &incoming.identifier);
    assign(&mut self.last_mark, &incoming.last_mark);
    assign(&mut self.cover_image, &incoming.cover_image);

    if incoming.black_and_white.is_some() {
      self.black_and_white = incoming.black_and_white;
    }

    self.overlay_credits(&incoming.credits);

    // Listas completas: sin merge elemento a elemento.
    if !incoming.tags.is_empty() {
      self.tags = incoming.tags.clone();
    }

    if !incoming.pages.is_empty() {
      self.pages = incoming.pages.clone();
    }
  }

  /// Mezcla créditos en orden. Una persona vacía es una señal de borrado de
  /// todo el rol; cualquier otra cosa es un upsert.
  pub fn overlay_credits(&mut self, credits: &[Credit]) {
    for c in credits {
      if c.person.is_empty() {
        let removed = self.remove_credits_with_role(&c.role);
        trace!(role = %c.role, removed, "credit role cleared by overlay");
      } else {
        self.add_credit(&c.person, &c.role, c.primary);
      }
    }
  }

  /// Devuelve una copia de `self` con `incoming` aplicado encima.
  pub fn overlaid(&self, incoming: &ComicMetadata) -> ComicMetadata {
    let mut merged = self.clone();
    merged.overlay(incoming);
    merged
  }
}

/// Combina varias fuentes de izquierda a derecha sobre un registro vacío.
pub fn merge_all<'a, I>(sources: I) -> ComicMetadata
where
  I: IntoIterator<Item = &'a ComicMetadata>,
{
  let mut merged = ComicMetadata::new();
  for source in sources {
    merged.overlay(source);
  }
  merged
}
