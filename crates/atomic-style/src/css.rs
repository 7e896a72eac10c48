//! CSS text helpers for rendering declarations.

use std::fmt::Write;

use crate::value::StyleValue;

/// Properties whose numeric values are written without a unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "fillOpacity",
    "flex",
    "flexGrow",
    "flexNegative",
    "flexOrder",
    "flexPositive",
    "flexShrink",
    "floodOpacity",
    "fontWeight",
    "gridColumn",
    "gridRow",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
];

const VENDOR_PREFIXES: &[&str] = &["Webkit", "Moz", "ms", "O"];

/// Returns `true` if numbers for `property` take no unit.
///
/// Vendor-prefixed forms (`WebkitFlex`, `msFlexGrow`) follow their
/// unprefixed property.
pub fn is_unitless(property: &str) -> bool {
    let unprefixed = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| {
            property
                .strip_prefix(prefix)
                .filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
        })
        .map(lowercase_first)
        .unwrap_or_else(|| property.to_string());

    UNITLESS_PROPERTIES.contains(&unprefixed.as_str())
}

/// Converts a camelCase property name to its hyphenated CSS form.
///
/// # Example
///
/// ```rust
/// use atomic_style::css::hyphenate_property;
///
/// assert_eq!(hyphenate_property("backgroundColor"), "background-color");
/// assert_eq!(hyphenate_property("WebkitUserSelect"), "-webkit-user-select");
/// assert_eq!(hyphenate_property("msFlex"), "-ms-flex");
/// ```
pub fn hyphenate_property(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

/// Renders a value as it appears on the right of a declaration.
///
/// Non-zero numbers gain a `px` unit unless the property is unitless.
pub fn css_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) if *n != 0.0 && !is_unitless(property) => format!("{}px", value),
        _ => value.to_string(),
    }
}

/// Writes a single declaration, `property:value;`, into `out`.
pub fn write_declaration(out: &mut String, property: &str, value: &StyleValue) {
    let _ = write!(
        out,
        "{}:{};",
        hyphenate_property(property),
        css_value(property, value)
    );
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
