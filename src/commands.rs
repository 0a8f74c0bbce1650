//! Subcommand implementations.
//!
//! Each command returns its output instead of printing it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use navview_core::{NavTree, NavView, PageContext, bitpack};
use tracing::{debug, info};

use crate::render::render_outline;

#[derive(Args, Debug)]
pub struct SerializeArgs {
    /// Listing JSON file
    #[arg(short, long)]
    pub listing: PathBuf,

    /// View string to start from
    #[arg(short, long, default_value = "")]
    pub view: String,

    /// Flip the locale switch
    #[arg(long)]
    pub toggle_locales: bool,

    /// Flip the system run led by INDEX (repeatable)
    #[arg(long, value_name = "INDEX")]
    pub toggle_system: Vec<usize>,

    /// Flip the package run led by PACKAGE of SYSTEM (repeatable)
    #[arg(long, value_name = "SYSTEM:PACKAGE", value_parser = parse_package_ref)]
    pub toggle_package: Vec<(usize, usize)>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Listing JSON file
    #[arg(short, long)]
    pub listing: PathBuf,

    /// View string to apply
    #[arg(short, long, default_value = "")]
    pub view: String,

    /// Manual name used in links
    #[arg(short, long, default_value = "man")]
    pub name: String,

    /// Hash of the manual being viewed
    #[arg(long)]
    pub hash: Option<String>,

    /// Print the outline as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn encode(bits: &str) -> Result<String> {
    Ok(bitpack::encode(&parse_bits(bits)?))
}

pub fn decode(view: &str) -> Result<String> {
    let bits = bitpack::decode(view)
        .with_context(|| format!("cannot decode view '{}'", view))?;
    Ok(format_bits(&bits))
}

pub fn serialize(args: &SerializeArgs) -> Result<String> {
    let mut view = load_view(&args.listing, &args.view)?;

    if args.toggle_locales {
        view.toggle_locales();
    }
    for &index in &args.toggle_system {
        let expanded = view
            .toggle_system(index)
            .with_context(|| format!("cannot toggle system {}", index))?;
        debug!(index, expanded, "toggled system");
    }
    for &(system, package) in &args.toggle_package {
        let expanded = view
            .toggle_package(system, package)
            .with_context(|| format!("cannot toggle package {}:{}", system, package))?;
        debug!(system, package, expanded, "toggled package");
    }

    Ok(view.serialize())
}

pub fn show(args: &ShowArgs) -> Result<String> {
    let view = load_view(&args.listing, &args.view)?;
    let outline = view.outline(&PageContext::new(args.name.clone(), args.hash.clone()));

    if args.json {
        return serde_json::to_string_pretty(&outline)
            .context("cannot encode outline");
    }
    Ok(render_outline(&outline))
}

fn load_view(listing: &Path, view: &str) -> Result<NavView> {
    let json = fs::read_to_string(listing)
        .with_context(|| format!("cannot read listing {}", listing.display()))?;
    let tree = NavTree::from_listing_json(&json)
        .with_context(|| format!("cannot parse listing {}", listing.display()))?;

    info!(
        systems = tree.systems.len(),
        toggles = tree.toggles().len(),
        "loaded listing"
    );

    let mut nav = NavView::new(tree);
    nav.load(view);
    Ok(nav)
}

fn parse_bits(input: &str) -> Result<Vec<bool>> {
    input
        .chars()
        .enumerate()
        .map(|(position, c)| -> Result<bool> {
            match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => bail!("invalid bit {:?} at position {}", other, position),
            }
        })
        .collect()
}

fn format_bits(bits: &[bool]) -> String {
    bits.iter()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

fn parse_package_ref(input: &str) -> Result<(usize, usize), String> {
    let (system, package) = input
        .split_once(':')
        .ok_or_else(|| format!("expected SYSTEM:PACKAGE, got '{}'", input))?;
    let system = system
        .parse()
        .map_err(|_| format!("invalid system index '{}'", system))?;
    let package = package
        .parse()
        .map_err(|_| format!("invalid package index '{}'", package))?;
    Ok((system, package))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const LISTING: &str = r#"[
        ["Debian", "Debian 12", "debian-12", [
            ["coreutils", "9.1", [["1", null, "c91"]]],
            ["coreutils", "8.32", [["1", null, "c832"]]]
        ]],
        ["Debian", "Debian 11", "debian-11", []]
    ]"#;

    /// The listing lives as long as the returned file.
    fn listing_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LISTING.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_encode_decode() {
        assert_eq!(encode("101101").unwrap(), "wq");
        assert_eq!(encode("").unwrap(), "a");
        assert_eq!(decode("wq").unwrap(), "1011010000");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_invalid_input() {
        assert!(encode("10x").is_err());
        assert!(decode("W").is_err());
    }

    #[test]
    fn test_parse_package_ref() {
        assert_eq!(parse_package_ref("2:13"), Ok((2, 13)));
        assert!(parse_package_ref("2").is_err());
        assert!(parse_package_ref("a:1").is_err());
    }

    #[test]
    fn test_serialize_applies_toggles() {
        let listing = listing_file();
        let args = SerializeArgs {
            listing: listing.path().to_path_buf(),
            view: String::new(),
            toggle_locales: true,
            toggle_system: vec![0],
            toggle_package: vec![(0, 0)],
        };
        assert_eq!(serialize(&args).unwrap(), "4");

        let args = SerializeArgs {
            view: "4".to_string(),
            toggle_locales: false,
            toggle_system: vec![],
            toggle_package: vec![(0, 0)],
            ..args
        };
        assert_eq!(serialize(&args).unwrap(), "y");
    }

    #[test]
    fn test_serialize_rejects_non_leader() {
        let listing = listing_file();
        let args = SerializeArgs {
            listing: listing.path().to_path_buf(),
            view: String::new(),
            toggle_locales: false,
            toggle_system: vec![1],
            toggle_package: vec![],
        };
        assert!(serialize(&args).is_err());
    }

    #[test]
    fn test_show_json() {
        let listing = listing_file();
        let args = ShowArgs {
            listing: listing.path().to_path_buf(),
            view: "i".to_string(),
            name: "ls".to_string(),
            hash: Some("c91".to_string()),
            json: true,
        };
        let output: serde_json::Value = serde_json::from_str(&show(&args).unwrap()).unwrap();
        assert_eq!(output["view"], "i");
        assert_eq!(output["systems"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_listing() {
        let args = ShowArgs {
            listing: PathBuf::from("/nonexistent/listing.json"),
            view: String::new(),
            name: "ls".to_string(),
            hash: None,
            json: false,
        };
        assert!(show(&args).is_err());
    }
}
