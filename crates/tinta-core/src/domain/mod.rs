pub mod comic;
pub mod credit;
pub mod page;
pub mod page_type;

pub use comic::ComicMetadata;
pub use credit::Credit;
pub use page::Page;
pub use page_type::{PageType, UnknownPageType};
