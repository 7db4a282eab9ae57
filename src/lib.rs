//! Truck factor estimation from git history.
//!
//! The truck factor is the smallest number of contributors whose departure
//! leaves most of a project's source files without anyone who knows them.
//! Knowledge is measured with the Degree of Authorship (DOA) model: each
//! author's score on a file grows with their own churn and with having
//! created the file, and shrinks with the churn of everybody else.
//!
//! Pipeline:
//!
//! 1. [`contrib`] extracts the log in parallel slices, parses numstat
//!    blocks, applies aliases, drops files no longer tracked and keeps the
//!    dominant programming language extensions.
//! 2. [`doa`] aggregates churn per file and author and normalizes DOA.
//! 3. [`truck`] greedily removes top owners until files are orphaned.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let tf = truck_factor::compute_truck_factor(Path::new("."), 0.75, 0.5)?;
//! println!("truck factor: {tf}");
//! # Ok::<(), truck_factor::TruckFactorError>(())
//! ```

pub mod config;
pub mod contrib;
pub mod doa;
pub mod error;
pub mod git;
pub mod languages;
mod report_helpers;
#[cfg(test)]
mod test_support;
pub mod truck;

pub use config::Config;
pub use contrib::{ContributionRecord, contributions_for_path};
pub use doa::analyzer::{AuthorFileDoa, DoaTable, compute_doa};
pub use doa::doa_for_path;
pub use error::{ErrorKind, Result, TruckFactorError};
pub use truck::analyzer::{TruckFactor, solve, truck_factor};
pub use truck::compute_truck_factor;
