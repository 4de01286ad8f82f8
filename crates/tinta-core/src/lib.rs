pub mod domain;
pub mod errors;
pub mod issue;
pub mod numeric;
pub mod overlay;
pub mod ports;
pub mod roles;

pub use domain::{ComicMetadata, Credit, Page, PageType};
pub use errors::CoreError;
pub use issue::{IssueString, normalize_issue};
pub use numeric::normalize_number;
pub use roles::{CreditCategory, categories_for_role, parseable_credit_roles};
