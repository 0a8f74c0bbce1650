//! Visible navigation outline.
//!
//! Projects a [`NavView`] onto what the navigation panel shows for one
//! manual page: which systems, packages, and manual entries are listed,
//! where toggles sit, and where each entry links to. Rendering is left to
//! the caller.

use serde::Serialize;

use crate::codec::NavView;
use crate::config::{BROWSE_PREFIX, VIEW_QUERY_PARAM};
use crate::models::{ManEntry, PackageNode, Run, SystemNode};

/// The manual page the navigation is shown on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Manual name, e.g. "ls"
    pub name: String,
    /// Hash of the entry being viewed, if any
    pub hash: Option<String>,
}

impl PageContext {
    pub fn new(name: impl Into<String>, hash: Option<String>) -> Self {
        Self {
            name: name.into(),
            hash,
        }
    }

    fn is_current(&self, entry: &ManEntry) -> bool {
        self.hash.as_deref() == Some(entry.hash.as_str())
    }
}

/// Locale switch state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocalesToggle {
    /// Localized manuals are listed
    pub shown: bool,
    /// Some listed package has a localized manual to show
    pub available: bool,
}

/// A listed manual entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManualLink {
    /// `section` or `section.locale`
    pub label: String,
    /// `None` for the entry being viewed
    pub href: Option<String>,
}

/// A listed package release.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackageOutline {
    /// Index within the system's packages
    pub index: usize,
    pub name: String,
    pub version: String,
    pub browse_href: String,
    /// Toggle state, present on run leaders only
    pub toggle: Option<bool>,
    pub manuals: Vec<ManualLink>,
}

/// A listed system release.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SystemOutline {
    /// Index within the tree's systems
    pub index: usize,
    pub name: String,
    /// Toggle state, present on run leaders only
    pub toggle: Option<bool>,
    pub packages: Vec<PackageOutline>,
}

/// Everything the navigation panel lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// View string embedded in every manual link
    pub view: String,
    pub locales: LocalesToggle,
    pub systems: Vec<SystemOutline>,
}

impl Outline {
    pub fn build(view: &NavView, page: &PageContext) -> Self {
        let mut builder = Builder {
            page,
            view: view.serialize(),
            show_locales: view.show_locales,
            locales_available: false,
        };

        let mut systems = Vec::new();
        for run in view.tree.system_runs() {
            for index in run.members() {
                let node = &view.tree.systems[index];
                if is_shown(&run, index, node.expanded) {
                    systems.push(builder.system(&run, index, node));
                }
            }
        }

        Self {
            locales: LocalesToggle {
                shown: view.show_locales,
                available: builder.locales_available,
            },
            view: builder.view,
            systems,
        }
    }
}

/// Leaders are always listed; later members only while their run is expanded.
fn is_shown(run: &Run, index: usize, expanded: bool) -> bool {
    index == run.leader() || expanded
}

fn toggle_of(run: &Run, index: usize, expanded: bool) -> Option<bool> {
    (index == run.leader() && run.is_toggleable()).then_some(expanded)
}

struct Builder<'a> {
    page: &'a PageContext,
    view: String,
    show_locales: bool,
    locales_available: bool,
}

impl Builder<'_> {
    fn system(&mut self, run: &Run, index: usize, node: &SystemNode) -> SystemOutline {
        let mut packages = Vec::new();
        for package_run in node.package_runs() {
            for package_index in package_run.members() {
                let package = &node.packages[package_index];
                if !is_shown(&package_run, package_index, package.expanded) {
                    continue;
                }
                if let Some(outline) = self.package(&package_run, package_index, node, package) {
                    packages.push(outline);
                }
            }
        }

        SystemOutline {
            index,
            name: node.name.clone(),
            toggle: toggle_of(run, index, node.expanded),
            packages,
        }
    }

    fn package(
        &mut self,
        run: &Run,
        index: usize,
        system: &SystemNode,
        package: &PackageNode,
    ) -> Option<PackageOutline> {
        let mut manuals = Vec::new();
        for entry in &package.entries {
            let current = self.page.is_current(entry);
            if !current && entry.locale.is_some() {
                self.locales_available = true;
            }
            if current || self.show_locales || entry.locale.is_none() {
                manuals.push(self.manual(entry, current));
            }
        }

        if manuals.is_empty() {
            return None;
        }

        Some(PackageOutline {
            index,
            name: package.key.clone(),
            version: package.version.clone(),
            browse_href: format!(
                "{BROWSE_PREFIX}/{}/{}/{}",
                system.short, package.key, package.version
            ),
            toggle: toggle_of(run, index, package.expanded),
            manuals,
        })
    }

    fn manual(&self, entry: &ManEntry, current: bool) -> ManualLink {
        let label = match &entry.locale {
            Some(locale) => format!("{}.{}", entry.section, locale),
            None => entry.section.clone(),
        };
        let href = (!current).then(|| {
            format!(
                "/{}/{}?{VIEW_QUERY_PARAM}={}",
                self.page.name, entry.hash, self.view
            )
        });

        ManualLink { label, href }
    }
}
