//! Navigation view state and its URL form.
//!
//! A view string packs, in order:
//!
//! 1. whether localized manuals are shown,
//! 2. the state of every system toggle,
//! 3. the state of every package toggle, system by system.
//!
//! Only runs of two or more entries have a toggle, so a view string is only
//! meaningful against the tree shape it was made from. Listings change over
//! time, so [`load`] never fails: missing bits read as collapsed and surplus
//! bits are dropped.

use std::iter;

use tracing::{debug, warn};

use crate::bitpack;
use crate::error::NavError;
use crate::models::NavTree;
use crate::outline::{Outline, PageContext};

/// Packs the locale flag and every toggle of `tree` into a view string.
pub fn serialize(tree: &NavTree, show_locales: bool) -> String {
    let toggles = tree.toggles();
    let states = toggles.iter().map(|toggle| tree.toggle_state(toggle));
    let bits: Vec<bool> = iter::once(show_locales).chain(states).collect();

    bitpack::trim_padding(bitpack::encode(&bits))
}

/// Applies a view string to `tree` and returns the locale flag.
pub fn load(tree: &mut NavTree, view: &str) -> bool {
    let decoded = match bitpack::decode(view) {
        Ok(bits) => bits,
        Err(err) => {
            warn!(view, %err, "ignoring undecodable view string");
            Vec::new()
        }
    };

    let toggles = tree.toggles();
    if decoded.len() < toggles.len() + 1 {
        debug!(
            available = decoded.len(),
            expected = toggles.len() + 1,
            "view string shorter than tree, collapsing the rest"
        );
    }

    let mut bits = decoded.into_iter().chain(iter::repeat(false));
    let show_locales = bits.next().unwrap_or_default();
    for toggle in &toggles {
        tree.set_toggle(toggle, bits.next().unwrap_or_default());
    }

    show_locales
}

// =============================================================================
// NavView
// =============================================================================

/// Everything a page needs to render and share its navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavView {
    pub tree: NavTree,
    /// Show manuals in a non-default locale
    pub show_locales: bool,
}

impl NavView {
    pub fn new(tree: NavTree) -> Self {
        Self {
            tree,
            show_locales: false,
        }
    }

    /// Current view string.
    pub fn serialize(&self) -> String {
        serialize(&self.tree, self.show_locales)
    }

    /// Replaces the view state with the one encoded in `view`.
    pub fn load(&mut self, view: &str) {
        self.show_locales = load(&mut self.tree, view);
    }

    /// Flips the locale flag and returns the new value.
    pub fn toggle_locales(&mut self) -> bool {
        self.show_locales = !self.show_locales;
        self.show_locales
    }

    /// Flips the historical releases of the system run led by `index`.
    pub fn toggle_system(&mut self, index: usize) -> Result<bool, NavError> {
        let toggle = self.tree.system_toggle(index)?;
        let expanded = !self.tree.toggle_state(&toggle);
        self.tree.set_toggle(&toggle, expanded);
        Ok(expanded)
    }

    /// Flips the older versions of the package run led by `package`.
    pub fn toggle_package(&mut self, system: usize, package: usize) -> Result<bool, NavError> {
        let toggle = self.tree.package_toggle(system, package)?;
        let expanded = !self.tree.toggle_state(&toggle);
        self.tree.set_toggle(&toggle, expanded);
        Ok(expanded)
    }

    /// What the navigation shows for `page` in the current state.
    pub fn outline(&self, page: &PageContext) -> Outline {
        Outline::build(self, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PackageNode, SystemNode};

    fn package(key: &str) -> PackageNode {
        PackageNode {
            key: key.to_string(),
            version: "1".to_string(),
            expanded: false,
            entries: Vec::new(),
        }
    }

    fn system(key: &str, packages: &[&str]) -> SystemNode {
        SystemNode {
            key: key.to_string(),
            name: key.to_string(),
            short: key.to_lowercase(),
            expanded: false,
            packages: packages.iter().map(|key| package(key)).collect(),
        }
    }

    #[test]
    fn test_serialize_unique_keys_only_locale_bit() {
        let tree = NavTree::new(vec![system("A", &["x", "y"]), system("B", &["x"])]);
        assert_eq!(serialize(&tree, false), "a");
        assert_eq!(serialize(&tree, true), "q");
    }

    #[test]
    fn test_serialize_bit_order() {
        let mut tree = NavTree::new(vec![
            system("A", &["x", "x"]),
            system("A", &[]),
            system("B", &["y", "y", "z", "z"]),
        ]);
        let toggles = tree.toggles();
        // [locales, A, A/x, B/y, B/z]
        tree.set_toggle(&toggles[0], true);
        tree.set_toggle(&toggles[3], true);

        // 0 1 0 0 1 -> 9
        assert_eq!(serialize(&tree, false), "j");
    }

    #[test]
    fn test_serialize_trims_padding() {
        let mut systems: Vec<SystemNode> = Vec::new();
        for key in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"] {
            systems.push(system(key, &[]));
            systems.push(system(key, &[]));
        }
        let tree = NavTree::new(systems);

        // 13 bits, all but the first clear, pack to "qaa".
        assert_eq!(serialize(&tree, true), "qa");
        assert_eq!(serialize(&tree, false), "a");
    }

    #[test]
    fn test_load_empty_collapses_everything() {
        let mut tree = NavTree::new(vec![system("A", &["x", "x"]), system("A", &["y"])]);
        for toggle in tree.toggles() {
            tree.set_toggle(&toggle, true);
        }

        assert!(!load(&mut tree, ""));
        assert!(tree.systems.iter().all(|s| !s.expanded));
        assert!(tree.systems[0].packages.iter().all(|p| !p.expanded));
    }

    #[test]
    fn test_load_undecodable_collapses_everything() {
        let mut tree = NavTree::new(vec![system("A", &[]), system("A", &[])]);
        let toggles = tree.toggles();
        tree.set_toggle(&toggles[0], true);

        assert!(!load(&mut tree, "7!"));
        assert!(!tree.systems[0].expanded);
    }

    #[test]
    fn test_load_propagates_within_run() {
        let mut tree = NavTree::new(vec![
            system("A", &[]),
            system("A", &[]),
            system("A", &[]),
            system("B", &[]),
        ]);

        // locales=1, A=1
        assert!(load(&mut tree, "y"));
        assert!(tree.systems[..3].iter().all(|s| s.expanded));
        assert!(!tree.systems[3].expanded);
    }

    #[test]
    fn test_load_ignores_surplus_bits() {
        let mut tree = NavTree::new(vec![system("A", &[]), system("A", &[])]);
        assert!(load(&mut tree, "777777"));
        assert!(tree.systems[1].expanded);
    }

    #[test]
    fn test_nav_view_toggles() {
        let tree = NavTree::new(vec![system("A", &["x", "x"]), system("A", &[])]);
        let mut view = NavView::new(tree);

        assert_eq!(view.toggle_system(0), Ok(true));
        assert_eq!(view.toggle_package(0, 0), Ok(true));
        assert!(view.toggle_locales());
        assert_eq!(view.serialize(), "4");

        assert_eq!(view.toggle_system(0), Ok(false));
        assert_eq!(
            view.toggle_system(1),
            Err(NavError::NotToggleable("A".to_string()))
        );
        assert_eq!(view.serialize(), "u");
    }

    #[test]
    fn test_nav_view_roundtrip() {
        let tree = NavTree::new(vec![
            system("A", &["x", "x", "x"]),
            system("A", &["y", "y"]),
            system("A", &[]),
        ]);
        let mut view = NavView::new(tree.clone());
        view.toggle_system(0).unwrap();
        view.toggle_package(1, 0).unwrap();
        let encoded = view.serialize();

        let mut restored = NavView::new(tree);
        restored.load(&encoded);
        assert_eq!(restored, view);
    }
}
