//! Fixed CSS assets available before any style is registered.
//!
//! [`Predefs`] bundles three things every sheet starts with:
//!
//! - a CSS reset, rendered first;
//! - a block of hand-written utility CSS, rendered second;
//! - the declarations those utilities stand for, seeded into every new
//!   [`DeclarationStore`](crate::DeclarationStore) so that
//!   `resolve` maps them to the utility classes.
//!
//! The default assets cover `pointerEvents`, whose `box-none` and `box-only`
//! values need descendant selectors that a single atomic rule cannot express.

use crate::value::StyleValue;

const RESET_CSS: &str = "/* reset */\n\
html {font-family:sans-serif;-ms-text-size-adjust:100%;-webkit-text-size-adjust:100%;-webkit-tap-highlight-color:rgba(0,0,0,0)}\n\
body {margin:0}\n\
button::-moz-focus-inner, input::-moz-focus-inner {border:0;padding:0}\n\
input[type=\"search\"]::-webkit-search-cancel-button, input[type=\"search\"]::-webkit-search-decoration {display:none}";

const POINTER_EVENTS_CSS: &str = "/* pointer-events */\n\
.__style_pea, .__style_pea * {pointer-events:auto}\n\
.__style_pebn {pointer-events:none}\n\
.__style_pebn * {pointer-events:auto}\n\
.__style_pebo {pointer-events:auto}\n\
.__style_pebo * {pointer-events:none}\n\
.__style_pen, .__style_pen * {pointer-events:none}";

const POINTER_EVENTS_CLASSES: &[(&str, &str)] = &[
    ("auto", "__style_pea"),
    ("box-none", "__style_pebn"),
    ("box-only", "__style_pebo"),
    ("none", "__style_pen"),
];

/// A declaration backed by a hand-written utility class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedClass {
    /// Property the class stands for
    pub property: String,
    /// Value the class stands for
    pub value: StyleValue,
    /// The utility class name
    pub class_name: String,
}

impl PredefinedClass {
    /// Creates a predefined class entry.
    pub fn new(
        property: impl Into<String>,
        value: impl Into<StyleValue>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            class_name: class_name.into(),
        }
    }
}

/// The reset, utility CSS, and seeded classes a sheet is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predefs {
    /// CSS reset rendered at the top of every sheet
    pub reset_css: String,
    /// Utility CSS rendered after the reset
    pub predefined_css: String,
    /// Declarations mapped to utility classes in `predefined_css`
    pub class_names: Vec<PredefinedClass>,
}

impl Predefs {
    /// Assets with no reset, no utility CSS and no seeded classes.
    pub fn empty() -> Self {
        Self {
            reset_css: String::new(),
            predefined_css: String::new(),
            class_names: Vec::new(),
        }
    }
}

impl Default for Predefs {
    fn default() -> Self {
        Self {
            reset_css: RESET_CSS.to_string(),
            predefined_css: POINTER_EVENTS_CSS.to_string(),
            class_names: POINTER_EVENTS_CLASSES
                .iter()
                .map(|(value, class_name)| PredefinedClass::new("pointerEvents", *value, *class_name))
                .collect(),
        }
    }
}
