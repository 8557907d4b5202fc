//! Filename-tag ranking engine for ROM collections.
//!
//! Everything here is pure: it looks only at filenames, never at file
//! contents or the filesystem.

pub mod build;
pub mod disc;
pub mod error;
pub mod region;
pub mod tags;
pub mod timestamp;
pub mod util;

pub use build::{BuildKeyword, BuildRank};
pub use disc::{PartType, Volume};
pub use error::ParseError;
pub use region::{Region, RegionTable};
pub use tags::{ParsedName, TagCollector, parse_filename};
