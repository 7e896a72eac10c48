//! The style sheet handle: registration, resolution and rendering.
//!
//! [`StyleSheet`] owns a [`DeclarationStore`] behind a read/write lock and
//! exposes the operations a rendering layer needs:
//!
//! 1. **`create`** / **`create_sheet`**: register every declaration of a
//!    style input (or of a sheet of named styles) up front, typically once
//!    per static style object.
//! 2. **`resolve`**: per render, turn a component's `className` and `style`
//!    into a class list plus the inline style that no class covers.
//! 3. **`render_to_string`**: produce the CSS for everything registered so far.
//! 4. **`destroy`**: drop every generated class and start over.
//!
//! `resolve` never registers anything. A declaration that was not passed to
//! `create` stays inline, so one-off values cannot grow the cache.
//!
//! # Example
//!
//! ```rust
//! use atomic_style::{Fragment, Options, StyleSheet};
//! use serde_json::json;
//!
//! let sheet = StyleSheet::new(Options::default());
//! let style = sheet.create(Fragment::from(json!({ "color": "red", "fontSize": 12 })));
//!
//! let resolved = sheet.resolve("button", &Fragment::from(json!([style, { "width": 10 }])));
//! assert_eq!(resolved.class_name, "button __style_color-red __style_fontSize-12_n");
//! assert_eq!(resolved.style["width"], json!(10));
//! ```

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::config::Options;
use crate::extract::{named_styles, AtomicExtractor, RawDeclaration, StyleObjectExtractor};
use crate::fragment::{merge, Fragment, StyleMap};
use crate::predefs::Predefs;
use crate::prefix::{Prefixer, VendorPrefixer};
use crate::store::DeclarationStore;
use crate::value::StyleValue;

/// The outcome of [`StyleSheet::resolve`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    /// Base class followed by one atomic class per cached declaration
    pub class_name: String,
    /// Declarations without a class, vendor-prefixed, for inline use
    pub style: StyleMap,
}

/// A deduplicating atomic style sheet.
///
/// All methods take `&self`; the store is guarded by a read/write lock, so
/// a sheet can be shared between threads. Registration and `destroy` take
/// the write lock; lookups and rendering share the read lock and always see
/// a consistent set of rules.
pub struct StyleSheet {
    options: Options,
    predefs: Predefs,
    extractor: Box<dyn AtomicExtractor>,
    prefixer: Box<dyn Prefixer>,
    store: RwLock<DeclarationStore>,
}

impl StyleSheet {
    /// Creates a sheet with the default assets, extractor and prefixer.
    pub fn new(options: Options) -> Self {
        Self::builder().options(options).build()
    }

    /// Starts building a sheet with custom collaborators.
    pub fn builder() -> StyleSheetBuilder {
        StyleSheetBuilder::default()
    }

    /// Registers every declaration in `styles` and returns `styles` unchanged.
    ///
    /// `styles` is a style object or a list of them. Values that cannot be
    /// cached (objects, arrays, null) are skipped; they will stay inline when
    /// resolved. Calling this twice with the same input adds no rules the
    /// second time.
    pub fn create(&self, styles: Fragment) -> Fragment {
        self.register(self.extractor.extract(&styles));
        styles
    }

    /// Registers every style of a sheet of named styles and returns the
    /// sheet unchanged.
    ///
    /// Each entry of `sheet` is one style, as passed to [`create`](Self::create);
    /// use [`Fragment::field`] to pick styles out of the returned sheet.
    ///
    /// ```rust
    /// use atomic_style::{Fragment, Options, StyleSheet};
    /// use serde_json::json;
    ///
    /// let sheet = StyleSheet::new(Options::default());
    /// let styles = sheet.create_sheet(Fragment::from(json!({
    ///     "title": { "color": "red" },
    /// })));
    /// assert_eq!(sheet.resolve("", &styles.field("title")).class_name, "__style_color-red");
    /// ```
    pub fn create_sheet(&self, sheet: Fragment) -> Fragment {
        let declarations = named_styles(&sheet)
            .iter()
            .flat_map(|style| self.extractor.extract(style))
            .collect();
        self.register(declarations);
        sheet
    }

    /// Replaces the store with a freshly seeded one.
    ///
    /// Every class issued before this call is forgotten. Readers see either
    /// the old store or the new one, never a mix.
    pub fn destroy(&self) {
        let fresh = DeclarationStore::new(self.options, &self.predefs);
        let mut store = self.write();
        let dropped = store.len().saturating_sub(fresh.len());
        *store = fresh;
        log::debug!("style sheet destroyed, {} generated rules dropped", dropped);
    }

    /// Renders the reset, the predefined CSS, and every generated rule.
    pub fn render_to_string(&self) -> String {
        let rules = self.read().to_css(self.prefixer.as_ref());
        format!(
            "{}\n{}\n{}",
            self.predefs.reset_css, self.predefs.predefined_css, rules
        )
    }

    /// Converts a base class name and a style into classes plus inline style.
    ///
    /// The merged style is walked in order. Each declaration already in the
    /// store contributes its class; every other declaration is copied to the
    /// inline style, which is then vendor-prefixed.
    ///
    /// An empty `class_name` is left out of the class list, so the result
    /// never starts with a separator space. This differs from joining the
    /// base class unconditionally, which would yield `" __style_color-red"`.
    pub fn resolve(&self, class_name: &str, style: &Fragment) -> Resolved {
        let combined = merge(style);
        let mut classes: Vec<String> = Vec::with_capacity(combined.len() + 1);
        if !class_name.is_empty() {
            classes.push(class_name.to_string());
        }

        let mut residual = StyleMap::new();
        {
            let store = self.read();
            for (property, raw) in combined {
                let hit = StyleValue::from_json(&property, &raw)
                    .ok()
                    .and_then(|value| store.get(&property, &value));
                match hit {
                    Some(atomic) => classes.push(atomic.to_string()),
                    None => {
                        log::trace!("no class for {}, keeping inline", property);
                        residual.insert(property, raw);
                    }
                }
            }
        }

        Resolved {
            class_name: classes.join(" "),
            style: self.prefixer.prefix(residual),
        }
    }

    fn register(&self, declarations: Vec<RawDeclaration>) {
        let mut store = self.write();
        for (property, raw) in declarations {
            match StyleValue::from_json(&property, &raw) {
                Ok(value) => {
                    store.set(&property, &value);
                }
                Err(err) => log::debug!("{}; it will stay inline", err),
            }
        }
    }

    /// Flattens a style fragment; see [`merge`](crate::merge).
    pub fn merge(&self, style: &Fragment) -> StyleMap {
        merge(style)
    }

    /// Returns the class registered for a declaration, if any.
    pub fn class_name(&self, property: &str, value: &StyleValue) -> Option<String> {
        self.read().get(property, value).map(str::to_string)
    }

    /// Number of rules in the store, predefined ones included.
    pub fn rule_count(&self) -> usize {
        self.read().len()
    }

    /// The options the store was created with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// The fixed assets this sheet renders and seeds from.
    pub fn predefs(&self) -> &Predefs {
        &self.predefs
    }

    fn read(&self) -> RwLockReadGuard<'_, DeclarationStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DeclarationStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheet")
            .field("options", &self.options)
            .field("rules", &self.rule_count())
            .finish_non_exhaustive()
    }
}

/// Builder for [`StyleSheet`].
///
/// # Example
///
/// ```rust
/// use atomic_style::{NoopPrefixer, Options, Predefs, StyleSheet};
///
/// let sheet = StyleSheet::builder()
///     .options(Options { obfuscate_class_names: true })
///     .predefs(Predefs::empty())
///     .prefixer(NoopPrefixer)
///     .build();
/// assert_eq!(sheet.rule_count(), 0);
/// ```
pub struct StyleSheetBuilder {
    options: Option<Options>,
    predefs: Predefs,
    extractor: Box<dyn AtomicExtractor>,
    prefixer: Box<dyn Prefixer>,
}

impl Default for StyleSheetBuilder {
    fn default() -> Self {
        Self {
            options: None,
            predefs: Predefs::default(),
            extractor: Box::new(StyleObjectExtractor),
            prefixer: Box::new(VendorPrefixer::default()),
        }
    }
}

impl StyleSheetBuilder {
    /// Sets the options. Without this, [`Options::from_env`] is used.
    pub fn options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the reset, predefined CSS and seeded classes.
    pub fn predefs(mut self, predefs: Predefs) -> Self {
        self.predefs = predefs;
        self
    }

    /// Sets the extractor used by [`StyleSheet::create`].
    pub fn extractor(mut self, extractor: impl AtomicExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Sets the prefixer used for inline styles and rendered rules.
    pub fn prefixer(mut self, prefixer: impl Prefixer + 'static) -> Self {
        self.prefixer = Box::new(prefixer);
        self
    }

    /// Builds the sheet and seeds its store.
    pub fn build(self) -> StyleSheet {
        let options = self.options.unwrap_or_else(Options::from_env);
        let store = DeclarationStore::new(options, &self.predefs);
        StyleSheet {
            options,
            predefs: self.predefs,
            extractor: self.extractor,
            prefixer: self.prefixer,
            store: RwLock::new(store),
        }
    }
}
