//! Age curation: merge the source list into the curated list, fetching the
//! age of every record not curated yet.

pub mod buffer;
pub mod curator;

pub use buffer::CuratedBuffer;
pub use curator::{Curated, CurationReport, Curator};
