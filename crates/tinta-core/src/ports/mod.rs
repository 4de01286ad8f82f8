pub mod metadata;

pub use metadata::{MetadataError, MetadataFormat};
