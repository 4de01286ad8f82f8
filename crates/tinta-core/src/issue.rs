//! Normalización de números de issue.
//!
//! Un designador de issue es una parte numérica opcional (con signo y como
//! mucho un punto decimal) seguida de un sufijo libre: `"12"`, `"1.5"`,
//! `"-1"`, `"12AU"`, `"½"`. Para mostrarlo se quita el ruido numérico
//! (`"001"` → `"1"`, `"1.50"` → `"1.5"`) y se puede rellenar con ceros.

/// Parte numérica de un issue, guardada como texto para no perder dígitos.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Numeral {
  negative: bool,
  /// Sin ceros a la izquierda; `"0"` como mínimo.
  int: String,
  /// Sin ceros a la derecha; vacío si no hay parte decimal.
  frac: String,
}

impl Numeral {
  /// `text` ya viene recortado a `-?[0-9.]*` con un punto como mucho.
  fn parse(text: &str) -> Option<Self> {
    let (negative, body) = match text.strip_prefix('-') {
      Some(rest) => (true, rest),
      None => (false, text),
    };
    let (int, frac) = body.split_once('.').unwrap_or((body, ""));
    if int.is_empty() && frac.is_empty() {
      return None;
    }

    let int = match int.trim_start_matches('0') {
      "" => "0",
      digits => digits,
    };
    let frac = frac.trim_end_matches('0');
    let is_zero = int == "0" && frac.is_empty();

    Some(Self { negative: negative && !is_zero, int: int.to_string(), frac: frac.to_string() })
  }
}

/// Designador de issue descompuesto en número + sufijo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueString {
  num: Option<Numeral>,
  suffix: String,
}

impl IssueString {
  pub fn parse(text: &str) -> Self {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
      return Self::default();
    }

    let whole_suffix = || Self { num: None, suffix: text.to_string() };

    // el signo menos inicial no cuenta como sufijo
    let start = usize::from(chars[0] == '-');
    if start >= chars.len() || !(chars[start].is_ascii_digit() || chars[start] == '.') {
      return whole_suffix();
    }

    // corte en el primer carácter no numérico, o en el segundo punto
    let mut idx = chars.len();
    let mut decimal_count = 0;
    for (i, c) in chars.iter().enumerate().skip(start) {
      if !(c.is_ascii_digit() || *c == '.') {
        idx = i;
        break;
      }
      if *c == '.' {
        decimal_count += 1;
        if decimal_count > 1 {
          idx = i;
          break;
        }
      }
    }

    // un punto final pasa al sufijo, pero solo si detrás hay algo más
    if chars[idx - 1] == '.' && idx != chars.len() {
      idx -= 1;
    }

    // "-" sin número detrás: el signo también es sufijo
    if idx == 1 && start == 1 {
      idx = 0;
    }

    let number: String = chars[..idx].iter().collect();
    let suffix: String = chars[idx..].iter().collect();

    if number.is_empty() {
      return Self { num: None, suffix };
    }

    match Numeral::parse(&number) {
      Some(num) => Self { num: Some(num), suffix },
      None => whole_suffix(),
    }
  }

  /// Valor aproximado de la parte numérica.
  pub fn number(&self) -> Option<f64> {
    let num = self.num.as_ref()?;
    let sign = if num.negative { "-" } else { "" };
    format!("{sign}{}.{}0", num.int, num.frac).parse().ok()
  }

  pub fn suffix(&self) -> &str {
    &self.suffix
  }

  /// Forma canónica: número sin ceros a la izquierda ni decimales vacíos,
  /// parte entera rellenada con ceros hasta `pad` dígitos, sufijo intacto.
  pub fn as_string(&self, pad: usize) -> String {
    let Some(num) = &self.num else {
      return self.suffix.clone();
    };

    let mut out = String::new();
    if num.negative {
      out.push('-');
    }
    for _ in num.int.len()..pad {
      out.push('0');
    }
    out.push_str(&num.int);
    if !num.frac.is_empty() {
      out.push('.');
      out.push_str(&num.frac);
    }
    out.push_str(&self.suffix);
    out
  }
}

/// Atajo: `IssueString::parse(raw).as_string(pad)`. Idempotente para un mismo `pad`.
pub fn normalize_issue(raw: &str, pad: usize) -> String {
  IssueString::parse(raw).as_string(pad)
}
