//! ComicRack `ComicInfo.xml` <-> [`ComicMetadata`](tinta_core::ComicMetadata).

pub mod codec;
pub mod options;
pub mod tag_keys;

mod mapping;
mod reader;
mod tree;
mod writer;

pub use codec::ComicInfoXml;
pub use options::CixOptions;
