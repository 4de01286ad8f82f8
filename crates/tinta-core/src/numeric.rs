/// Normaliza un campo "numérico" (año, mes, volumen, count…).
///
/// Se queda solo con los dígitos ASCII y quita los ceros a la izquierda:
/// `"007"` → `"7"`, `"v2"` → `"2"`, `"-12"` → `"12"`. Sin dígitos devuelve `None`.
pub fn normalize_number(raw: &str) -> Option<String> {
  let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
  if digits.is_empty() {
    return None;
  }

  let trimmed = digits.trim_start_matches('0');
  if trimmed.is_empty() { Some("0".to_string()) } else { Some(trimmed.to_string()) }
}
