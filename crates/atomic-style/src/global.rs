//! A process-wide default style sheet.
//!
//! Applications that render from a single place can use these free functions
//! instead of threading a [`StyleSheet`] handle through their code. The sheet
//! is created on first use with [`Options::from_env`](crate::Options::from_env)
//! and the default assets.

use once_cell::sync::Lazy;

use crate::fragment::Fragment;
use crate::sheet::{Resolved, StyleSheet};

static SHEET: Lazy<StyleSheet> = Lazy::new(StyleSheet::default);

/// Returns the process-wide sheet.
pub fn sheet() -> &'static StyleSheet {
    &SHEET
}

/// Registers `styles` with the process-wide sheet; see [`StyleSheet::create`].
pub fn create(styles: Fragment) -> Fragment {
    SHEET.create(styles)
}

/// Registers a sheet of named styles with the process-wide sheet; see
/// [`StyleSheet::create_sheet`].
pub fn create_sheet(sheet: Fragment) -> Fragment {
    SHEET.create_sheet(sheet)
}

/// Resets the process-wide sheet; see [`StyleSheet::destroy`].
pub fn destroy() {
    SHEET.destroy()
}

/// Renders the process-wide sheet; see [`StyleSheet::render_to_string`].
pub fn render_to_string() -> String {
    SHEET.render_to_string()
}

/// Resolves against the process-wide sheet; see [`StyleSheet::resolve`].
pub fn resolve(class_name: &str, style: &Fragment) -> Resolved {
    SHEET.resolve(class_name, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_global_create_resolve_destroy() {
        destroy();
        let style = create(Fragment::from(json!({ "marginTop": 7 })));
        let resolved = resolve("row", &style);

        assert!(resolved.class_name.starts_with("row "));
        assert!(resolved.style.is_empty());
        assert!(render_to_string().contains("margin-top:7px"));

        destroy();
        let resolved = resolve("row", &style);
        assert_eq!(resolved.class_name, "row");
        assert_eq!(resolved.style["marginTop"], json!(7));
        assert!(!render_to_string().contains("margin-top:7px"));
    }

    #[test]
    #[serial]
    fn test_global_create_sheet() {
        destroy();
        let styles = create_sheet(Fragment::from(json!({ "row": { "paddingLeft": 3 } })));
        let resolved = resolve("", &styles.field("row"));

        assert!(resolved.style.is_empty());
        assert!(render_to_string().contains("padding-left:3px"));
        destroy();
    }

    #[test]
    #[serial]
    fn test_global_sheet_is_shared() {
        assert!(std::ptr::eq(sheet(), sheet()));
    }
}
