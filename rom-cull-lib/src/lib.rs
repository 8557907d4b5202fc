//! Duplicate-title culling for filename-tagged ROM collections.
//!
//! Typical flow: [`FileList::load_or_scan`] → [`load_entries`] →
//! [`CullPlan::build`] → report → optionally [`execute_removals`].

pub mod cull;
pub mod entry;
pub mod error;
pub mod execute;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod settings;
pub mod util;

pub use cull::{Candidate, CullPlan, Decision, TitleGroup};
pub use entry::{Entry, load_entries};
pub use error::CullError;
pub use execute::{DeleteSummary, execute_removals, execute_removals_and_invalidate};
pub use progress::CullProgress;
pub use report::CullSummary;
pub use scanner::{FileList, ListSource};
pub use settings::{CullSettings, Settings};

// Re-export the engine types frontends need.
pub use rom_cull_core::{ParseError, Region, RegionTable, TagCollector};
