//! Data models for the navigation listing.
//!
//! - [`SystemListing`], [`PackageListing`], [`ManEntry`] - listing as shipped by the server
//! - [`NavTree`], [`SystemNode`], [`PackageNode`] - listing plus expand state
//! - [`Run`], [`Toggle`] - runs of equally keyed entries and their toggles

mod listing;
mod tree;

pub use listing::{ManEntry, PackageListing, SystemListing};
pub use tree::{NavTree, PackageNode, Run, SystemNode, Toggle, find_runs};
