use tinta_core::parseable_credit_roles;

pub fn roles() -> String {
  let mut out = parseable_credit_roles().join("\n");
  out.push('\n');
  out
}
