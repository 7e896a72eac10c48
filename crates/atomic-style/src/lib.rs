//! # Atomic Style
//!
//! `atomic-style` turns style declarations into single-purpose CSS classes,
//! deduplicated across a whole session: the same property/value pair always
//! maps to the same class, and each class is emitted once.
//!
//! ## Concepts
//!
//! - [`Fragment`]: a style input. A style object, nothing, or nested lists of
//!   fragments. [`merge`] flattens it, last writer wins.
//! - [`DeclarationStore`]: the cache from declaration to class name.
//! - [`StyleSheet`]: a lockable handle around a store with the `create`,
//!   `create_sheet`, `resolve`, `render_to_string` and `destroy` operations.
//! - [`AtomicExtractor`] and [`Prefixer`]: pluggable collaborators for
//!   decomposing styles and adding vendor fallbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use atomic_style::{Fragment, Options, StyleSheet};
//! use serde_json::json;
//!
//! let sheet = StyleSheet::new(Options::default());
//!
//! // Register static styles once.
//! let styles = sheet.create_sheet(Fragment::from(json!({
//!     "title": { "color": "red", "fontSize": 12 },
//! })));
//!
//! // Resolve per render.
//! let resolved = sheet.resolve("heading", &styles.field("title"));
//! assert_eq!(resolved.class_name, "heading __style_color-red __style_fontSize-12_n");
//! assert!(resolved.style.is_empty());
//!
//! // Values never registered stay inline.
//! let resolved = sheet.resolve("", &Fragment::from(json!({ "width": 317 })));
//! assert_eq!(resolved.style["width"], json!(317));
//!
//! let css = sheet.render_to_string();
//! assert!(css.contains(".__style_fontSize-12_n{font-size:12px;}"));
//! ```
//!
//! ## Class Names
//!
//! With [`Options::obfuscate_class_names`] unset, names are readable and
//! derived from the declaration (`__style_color-red`, `__style_fontSize-12_n`),
//! so they are identical across runs and sheets whatever the registration
//! order. When set, names are
//! short opaque tokens (`_0`, `_1`, ...). [`Options::from_env`] picks
//! obfuscation for production builds.
//!
//! ## Process-wide Sheet
//!
//! The [`global`] module holds a lazily created default sheet with free
//! functions mirroring the [`StyleSheet`] methods.

pub mod config;
pub mod css;
mod error;
pub mod extract;
mod fragment;
pub mod global;
pub mod predefs;
pub mod prefix;
mod sheet;
pub mod store;
mod value;

pub use config::{BuildMode, Options};
pub use error::StyleError;
pub use extract::{AtomicExtractor, RawDeclaration, StyleObjectExtractor};
pub use fragment::{merge, Fragment, StyleMap};
pub use predefs::{PredefinedClass, Predefs};
pub use prefix::{NoopPrefixer, Prefixer, VendorPrefixer};
pub use sheet::{Resolved, StyleSheet, StyleSheetBuilder};
pub use store::{Declaration, DeclarationStore, Rule, RuleOrigin};
pub use value::StyleValue;
