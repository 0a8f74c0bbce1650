use std::ops::Range;

use super::listing::{ManEntry, PackageListing, SystemListing};
use crate::error::{ListingError, NavError};

// =============================================================================
// Nodes
// =============================================================================

/// A package release together with its expand state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageNode {
    /// Package name; consecutive nodes sharing it form a run
    pub key: String,
    /// Version label
    pub version: String,
    /// On a run leader: whether the older versions are shown.
    /// On a later run member: mirrors the leader.
    pub expanded: bool,
    /// Manual entries, opaque to the codec
    pub entries: Vec<ManEntry>,
}

impl From<PackageListing> for PackageNode {
    fn from(listing: PackageListing) -> Self {
        Self {
            key: listing.name,
            version: listing.version,
            expanded: false,
            entries: listing.entries,
        }
    }
}

/// A system release together with its expand state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemNode {
    /// System name; consecutive nodes sharing it form a run
    pub key: String,
    /// Display name
    pub name: String,
    /// Short identifier used in browse links
    pub short: String,
    /// On a run leader: whether the historical releases are shown.
    /// On a later run member: mirrors the leader.
    pub expanded: bool,
    /// Packages of this release
    pub packages: Vec<PackageNode>,
}

impl SystemNode {
    /// Runs of equally named packages within this system.
    pub fn package_runs(&self) -> Vec<Run> {
        find_runs(self.packages.iter().map(|package| package.key.as_str()))
    }
}

impl From<SystemListing> for SystemNode {
    fn from(listing: SystemListing) -> Self {
        Self {
            key: listing.name,
            name: listing.full_name,
            short: listing.short,
            expanded: false,
            packages: listing
                .packages
                .into_iter()
                .map(PackageNode::from)
                .collect(),
        }
    }
}

// =============================================================================
// Runs
// =============================================================================

/// A maximal span of consecutive entries sharing one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Index of the first entry
    pub start: usize,
    /// Number of entries, at least 1
    pub len: usize,
}

impl Run {
    /// Index of the entry that carries the run's toggle.
    pub fn leader(&self) -> usize {
        self.start
    }

    /// Indices of every entry in the run, leader first.
    pub fn members(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Only runs with historical entries have a toggle.
    pub fn is_toggleable(&self) -> bool {
        self.len >= 2
    }
}

/// Splits a key sequence into runs of equal adjacent keys, in order.
pub fn find_runs<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut previous = None;

    for (index, key) in keys.into_iter().enumerate() {
        match runs.last_mut() {
            Some(run) if previous == Some(key) => run.len += 1,
            _ => runs.push(Run {
                start: index,
                len: 1,
            }),
        }
        previous = Some(key);
    }

    runs
}

/// A toggleable run, addressed within a [`NavTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Historical releases of a system
    System(Run),
    /// Older versions of a package within one system
    Package { system: usize, run: Run },
}

// =============================================================================
// NavTree
// =============================================================================

/// Systems and their packages, in listing order, with expand state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavTree {
    pub systems: Vec<SystemNode>,
}

impl NavTree {
    pub fn new(systems: Vec<SystemNode>) -> Self {
        Self { systems }
    }

    /// Builds a tree with every run collapsed.
    pub fn from_listing(listing: Vec<SystemListing>) -> Self {
        Self::new(listing.into_iter().map(SystemNode::from).collect())
    }

    /// Parses the nested-array listing shipped with the page.
    pub fn from_listing_json(json: &str) -> Result<Self, ListingError> {
        let listing: Vec<SystemListing> = serde_json::from_str(json)?;
        Ok(Self::from_listing(listing))
    }

    /// Runs of equally named systems.
    pub fn system_runs(&self) -> Vec<Run> {
        find_runs(self.systems.iter().map(|system| system.key.as_str()))
    }

    /// Every toggle of the tree in view-string order: system runs first,
    /// then the package runs of each system.
    pub fn toggles(&self) -> Vec<Toggle> {
        let mut toggles: Vec<Toggle> = self
            .system_runs()
            .into_iter()
            .filter(Run::is_toggleable)
            .map(Toggle::System)
            .collect();

        for (system, node) in self.systems.iter().enumerate() {
            let runs = node.package_runs().into_iter().filter(Run::is_toggleable);
            toggles.extend(runs.map(|run| Toggle::Package { system, run }));
        }

        toggles
    }

    /// Current state of a toggle, read from the run leader.
    pub fn toggle_state(&self, toggle: &Toggle) -> bool {
        match *toggle {
            Toggle::System(run) => self
                .systems
                .get(run.leader())
                .is_some_and(|node| node.expanded),
            Toggle::Package { system, run } => self
                .systems
                .get(system)
                .and_then(|node| node.packages.get(run.leader()))
                .is_some_and(|node| node.expanded),
        }
    }

    /// Sets a toggle on the leader and every other member of its run.
    pub fn set_toggle(&mut self, toggle: &Toggle, expanded: bool) {
        match *toggle {
            Toggle::System(run) => {
                for node in self.systems.iter_mut().skip(run.start).take(run.len) {
                    node.expanded = expanded;
                }
            }
            Toggle::Package { system, run } => {
                if let Some(node) = self.systems.get_mut(system) {
                    for package in node.packages.iter_mut().skip(run.start).take(run.len) {
                        package.expanded = expanded;
                    }
                }
            }
        }
    }

    /// The toggle led by system `index`.
    pub fn system_toggle(&self, index: usize) -> Result<Toggle, NavError> {
        let node = self
            .systems
            .get(index)
            .ok_or(NavError::SystemOutOfRange(index))?;

        self.system_runs()
            .into_iter()
            .find(|run| run.leader() == index && run.is_toggleable())
            .map(Toggle::System)
            .ok_or_else(|| NavError::NotToggleable(node.name.clone()))
    }

    /// The toggle led by package `package` of system `system`.
    pub fn package_toggle(&self, system: usize, package: usize) -> Result<Toggle, NavError> {
        let node = self
            .systems
            .get(system)
            .ok_or(NavError::SystemOutOfRange(system))?;
        let leader = node
            .packages
            .get(package)
            .ok_or(NavError::PackageOutOfRange { system, package })?;
        let label = format!("{} {}", leader.key, leader.version);

        node.package_runs()
            .into_iter()
            .find(|run| run.leader() == package && run.is_toggleable())
            .map(|run| Toggle::Package { system, run })
            .ok_or(NavError::NotToggleable(label))
    }
}
