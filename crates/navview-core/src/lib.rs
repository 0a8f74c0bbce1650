//! Navigation view state for manual page listings.
//!
//! The navigation lists systems and their packages in order. Consecutive
//! entries with the same name form a run; a run's older entries are hidden
//! behind a toggle. The state of every toggle, plus whether localized
//! manuals are shown, travels between pages as a short view string:
//!
//! ```
//! use navview_core::{NavTree, NavView};
//!
//! let listing = r#"[
//!     ["Debian", "Debian 12", "debian-12", []],
//!     ["Debian", "Debian 11", "debian-11", []]
//! ]"#;
//! let mut view = NavView::new(NavTree::from_listing_json(listing).unwrap());
//! view.toggle_system(0).unwrap();
//! assert_eq!(view.serialize(), "i");
//!
//! let mut restored = NavView::new(NavTree::from_listing_json(listing).unwrap());
//! restored.load("i");
//! assert!(restored.tree.systems[1].expanded);
//! ```

pub mod bitpack;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod outline;
#[cfg(feature = "web")]
pub mod web;

pub use codec::{NavView, load, serialize};
pub use error::{CodecError, ListingError, NavError};
pub use models::{
    ManEntry, NavTree, PackageListing, PackageNode, Run, SystemListing, SystemNode, Toggle,
    find_runs,
};
pub use outline::{LocalesToggle, ManualLink, Outline, PackageOutline, PageContext, SystemOutline};
