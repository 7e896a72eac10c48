//! Decomposition of style inputs into atomic declarations.

use serde_json::Value;

use crate::fragment::Fragment;

/// An unvalidated property/value pair produced by an extractor.
pub type RawDeclaration = (String, Value);

/// Splits a style input into single-property declarations.
///
/// Implementations must be pure. Values are not validated here; the
/// registrar drops the ones that cannot be cached.
pub trait AtomicExtractor: Send + Sync {
    /// Returns the declarations of `styles`, in source order.
    fn extract(&self, styles: &Fragment) -> Vec<RawDeclaration>;
}

/// Default extractor for style objects and lists of them.
///
/// Every entry of every style object is returned, including ones a later
/// fragment would overwrite when merged, so that any of them resolves to a
/// class. Object and array values (`shadowOffset`, `transform`) are returned
/// as they are and never walked into: they are values, not styles.
///
/// Sheets of named styles go through
/// [`StyleSheet::create_sheet`](crate::StyleSheet::create_sheet), which
/// splits them with [`named_styles`] first.
///
/// # Example
///
/// ```rust
/// use atomic_style::{AtomicExtractor, Fragment, StyleObjectExtractor};
/// use serde_json::json;
///
/// let style = Fragment::from(json!([{ "color": "red", "fontSize": 12 }, [{ "margin": 0 }]]));
/// let props: Vec<_> = StyleObjectExtractor
///     .extract(&style)
///     .into_iter()
///     .map(|(property, _)| property)
///     .collect();
/// assert_eq!(props, vec!["color", "fontSize", "margin"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleObjectExtractor;

impl AtomicExtractor for StyleObjectExtractor {
    fn extract(&self, styles: &Fragment) -> Vec<RawDeclaration> {
        let mut out = Vec::new();
        collect(styles, &mut out);
        out
    }
}

fn collect(fragment: &Fragment, out: &mut Vec<RawDeclaration>) {
    match fragment {
        Fragment::Empty => {}
        Fragment::Sequence(items) => {
            for item in items {
                collect(item, out);
            }
        }
        Fragment::Flat(map) => {
            out.extend(map.iter().map(|(p, v)| (p.clone(), v.clone())));
        }
    }
}

/// Splits a sheet of named styles into its styles, in order.
///
/// Each entry of an object is one style; lists of sheets are walked in
/// order. Entries that are not style fragments contribute nothing.
///
/// ```rust
/// use atomic_style::extract::named_styles;
/// use atomic_style::Fragment;
/// use serde_json::json;
///
/// let sheet = Fragment::from(json!({ "title": { "color": "red" }, "body": [{ "margin": 0 }] }));
/// assert_eq!(named_styles(&sheet).len(), 2);
/// ```
pub fn named_styles(sheet: &Fragment) -> Vec<Fragment> {
    match sheet {
        Fragment::Empty => Vec::new(),
        Fragment::Flat(map) => map
            .values()
            .cloned()
            .map(Fragment::from)
            .filter(|style| *style != Fragment::Empty)
            .collect(),
        Fragment::Sequence(items) => items.iter().flat_map(named_styles).collect(),
    }
}
