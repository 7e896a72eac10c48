//! Vendor prefixing for inline styles and rendered rules.

use crate::fragment::StyleMap;

/// Expands a style map with vendor-specific fallbacks.
///
/// Implementations must be pure: the same input always produces the same
/// output.
pub trait Prefixer: Send + Sync {
    /// Returns an equivalent style map with any needed vendor forms added.
    fn prefix(&self, style: StyleMap) -> StyleMap;
}

/// A prefixer that returns styles unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefixer;

impl Prefixer for NoopPrefixer {
    fn prefix(&self, style: StyleMap) -> StyleMap {
        style
    }
}

/// Adds vendor-prefixed property names for properties that still need them.
///
/// Each prefixed form is inserted immediately before the standard property,
/// so the standard declaration wins where it is supported.
///
/// # Example
///
/// ```rust
/// use atomic_style::{Prefixer, VendorPrefixer};
/// use serde_json::json;
///
/// let style = json!({ "userSelect": "none" }).as_object().unwrap().clone();
/// let prefixed = VendorPrefixer::default().prefix(style);
/// assert_eq!(prefixed["WebkitUserSelect"], json!("none"));
/// assert_eq!(prefixed["userSelect"], json!("none"));
/// ```
#[derive(Debug, Clone)]
pub struct VendorPrefixer {
    table: Vec<(&'static str, &'static [&'static str])>,
}

/// Default property → vendor prefix table.
pub const DEFAULT_PREFIX_TABLE: &[(&str, &[&str])] = &[
    ("appearance", &["Webkit", "Moz"]),
    ("backfaceVisibility", &["Webkit"]),
    ("boxSizing", &["Webkit", "Moz"]),
    ("flexBasis", &["Webkit", "ms"]),
    ("flexDirection", &["Webkit", "ms"]),
    ("flexGrow", &["Webkit", "ms"]),
    ("flexShrink", &["Webkit", "ms"]),
    ("flexWrap", &["Webkit", "ms"]),
    ("hyphens", &["Webkit", "Moz", "ms"]),
    ("perspective", &["Webkit"]),
    ("textSizeAdjust", &["Webkit", "ms"]),
    ("transform", &["Webkit", "ms"]),
    ("transformOrigin", &["Webkit", "ms"]),
    ("transition", &["Webkit"]),
    ("userSelect", &["Webkit", "Moz", "ms"]),
];

impl VendorPrefixer {
    /// Creates a prefixer with a custom property table.
    pub fn with_table(table: Vec<(&'static str, &'static [&'static str])>) -> Self {
        Self { table }
    }

    fn prefixes_for(&self, property: &str) -> &[&'static str] {
        self.table
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, prefixes)| *prefixes)
            .unwrap_or(&[])
    }
}

impl Default for VendorPrefixer {
    fn default() -> Self {
        Self::with_table(DEFAULT_PREFIX_TABLE.to_vec())
    }
}

impl Prefixer for VendorPrefixer {
    fn prefix(&self, style: StyleMap) -> StyleMap {
        let mut out = StyleMap::new();
        for (property, value) in style {
            for prefix in self.prefixes_for(&property) {
                let prefixed = prefixed_name(prefix, &property);
                // An explicit vendor declaration in the input takes precedence.
                if !out.contains_key(&prefixed) {
                    out.insert(prefixed, value.clone());
                }
            }
            out.insert(property, value);
        }
        out
    }
}

fn prefixed_name(prefix: &str, property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", prefix, first.to_ascii_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}
