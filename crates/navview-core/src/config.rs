//! Navigation view configuration.
//!
//! Centralizes the constants shared by the codec, the outline, and the
//! browser bindings. The alphabet and pad symbol are part of the URL format:
//! changing them breaks every view string already shared.

// =============================================================================
// View String Format
// =============================================================================

/// Symbols of the packed view string, indexed by 5-bit group value.
pub const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Symbol for an all-zero group, used to fill an incomplete final group.
pub const PAD: char = 'a';

/// Number of bits carried by one symbol.
pub const GROUP_BITS: usize = 5;

// =============================================================================
// URL Layout
// =============================================================================

/// Query parameter carrying the serialized view.
pub const VIEW_QUERY_PARAM: &str = "v";

/// Prefix of package browse links (`/browse/{short}/{package}/{version}`).
pub const BROWSE_PREFIX: &str = "/browse";

// =============================================================================
// Display
// =============================================================================

/// Icon shown next to an expanded toggle.
pub const EXPANDED_ICON: char = '▾';

/// Icon shown next to a collapsed toggle.
pub const COLLAPSED_ICON: char = '▸';

/// Returns the toggle icon for the given state.
pub fn toggle_icon(expanded: bool) -> char {
    if expanded {
        EXPANDED_ICON
    } else {
        COLLAPSED_ICON
    }
}
