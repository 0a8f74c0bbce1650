//! Plain-text rendering of a navigation outline.

use navview_core::Outline;
use navview_core::config::toggle_icon;

/// Renders one line per system, package, and manual entry, indented by depth.
pub fn render_outline(outline: &Outline) -> String {
    let mut lines = Vec::new();

    let locales = toggle_icon(outline.locales.shown);
    if outline.locales.available {
        lines.push(format!("{}locales", locales));
    } else {
        lines.push(format!("{}locales (none)", locales));
    }

    for system in &outline.systems {
        lines.push(with_toggle(&system.name, system.toggle));

        for package in &system.packages {
            lines.push(format!(
                "  {} {}  {}",
                with_toggle(&package.name, package.toggle),
                package.version,
                package.browse_href
            ));

            for manual in &package.manuals {
                match &manual.href {
                    Some(href) => lines.push(format!("    {}  {}", manual.label, href)),
                    None => lines.push(format!("    {} (current)", manual.label)),
                }
            }
        }
    }

    lines.join("\n")
}

fn with_toggle(name: &str, toggle: Option<bool>) -> String {
    match toggle {
        Some(expanded) => format!("{} {}", name, toggle_icon(expanded)),
        None => name.to_string(),
    }
}
