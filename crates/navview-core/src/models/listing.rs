use serde::Deserialize;

/// A manual entry of a package: one section, optionally localized.
///
/// Shipped as `["section", "locale" | null, "hash"]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ManEntry {
    /// Manual section (e.g. "1", "3p")
    pub section: String,
    /// Locale of a translated manual, `None` for the default one
    pub locale: Option<String>,
    /// Content hash identifying this exact manual
    pub hash: String,
}

/// A package release as shipped by the server.
///
/// Shipped as `["package", "version", [entries...]]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PackageListing {
    /// Package name, shared by every version of the package
    pub name: String,
    /// Version label
    pub version: String,
    /// Manual entries provided by this version
    pub entries: Vec<ManEntry>,
}

/// A system release as shipped by the server.
///
/// Shipped as `["System", "Full name", "short", [packages...]]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SystemListing {
    /// System name, shared by every release of the system
    pub name: String,
    /// Display name including the release
    pub full_name: String,
    /// Short identifier used in browse links
    pub short: String,
    /// Packages of this release, ordered by name then version
    pub packages: Vec<PackageListing>,
}
