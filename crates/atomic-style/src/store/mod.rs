//! Declaration store: the deduplicating class cache.
//!
//! A [`DeclarationStore`] maps each distinct [`Declaration`] to exactly one
//! [`Rule`]. Rules are only ever appended; the way to drop them is to build
//! a new store (see [`StyleSheet::destroy`](crate::StyleSheet::destroy)).
//!
//! # Guarantees
//!
//! - **Uniqueness**: one rule per declaration, one declaration per class name
//! - **Stability**: a class name never changes once issued
//! - **Deterministic output**: rules render in registration order
//!
//! # Example
//!
//! ```rust
//! use atomic_style::{DeclarationStore, Options, Predefs, StyleValue};
//!
//! let mut store = DeclarationStore::new(Options::default(), &Predefs::empty());
//! let red = StyleValue::from("red");
//!
//! let class = store.set("color", &red).to_string();
//! assert_eq!(class, "__style_color-red");
//! assert_eq!(store.get("color", &red), Some(class.as_str()));
//! assert_eq!(store.to_string(), ".__style_color-red{color:red;}");
//! ```

mod naming;

pub use naming::{readable_name, ClassNamer, OBFUSCATED_PREFIX, READABLE_PREFIX};

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::config::Options;
use crate::css::write_declaration;
use crate::fragment::StyleMap;
use crate::predefs::Predefs;
use crate::prefix::Prefixer;
use crate::value::StyleValue;

/// A single property/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// Property name in camelCase (`fontSize`)
    pub property: String,
    /// Cacheable value
    pub value: StyleValue,
}

impl Declaration {
    /// Creates a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Where a rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    /// Seeded from [`Predefs`]; its CSS lives in the predefined asset block.
    Predefined,
    /// Minted by [`DeclarationStore::set`].
    Generated,
}

/// A declaration and the atomic class that applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The declaration this rule applies
    pub declaration: Declaration,
    /// Class name issued for the declaration, without the leading `.`
    pub class_name: String,
    /// Whether the rule was seeded or generated
    pub origin: RuleOrigin,
}

impl Rule {
    /// Renders this rule as `.class{property:value;}`.
    ///
    /// The prefixer may expand the declaration into several; values that the
    /// prefixer turns into something uncacheable are skipped.
    pub fn to_css(&self, prefixer: &dyn Prefixer) -> String {
        let mut selector = String::new();
        // Names are sanitized at creation; escaping here covers predefined names.
        if cssparser::serialize_identifier(&self.class_name, &mut selector).is_err() {
            selector = self.class_name.clone();
        }

        let mut single = StyleMap::new();
        single.insert(
            self.declaration.property.clone(),
            serde_json::to_value(&self.declaration.value).unwrap_or_default(),
        );

        let mut body = String::new();
        for (property, raw) in prefixer.prefix(single) {
            if let Ok(value) = StyleValue::from_json(&property, &raw) {
                write_declaration(&mut body, &property, &value);
            }
        }

        format!(".{}{{{}}}", selector, body)
    }
}

/// Cache of declarations and their generated class names.
///
/// Not thread-safe on its own; [`StyleSheet`](crate::StyleSheet) wraps it in
/// a read/write lock.
#[derive(Debug, Clone)]
pub struct DeclarationStore {
    rules: Vec<Rule>,
    index: HashMap<Declaration, usize>,
    taken: HashSet<String>,
    namer: ClassNamer,
}

impl DeclarationStore {
    /// Creates a store seeded with the predefined classes in `predefs`.
    pub fn new(options: Options, predefs: &Predefs) -> Self {
        let mut store = Self {
            rules: Vec::new(),
            index: HashMap::new(),
            taken: HashSet::new(),
            namer: ClassNamer::new(&options),
        };

        for class in &predefs.class_names {
            let declaration = Declaration::new(class.property.clone(), class.value.clone());
            if store.index.contains_key(&declaration) || store.taken.contains(&class.class_name) {
                log::warn!(
                    "ignoring duplicate predefined class '{}' for {}",
                    class.class_name,
                    class.property
                );
                continue;
            }
            store.push(declaration, class.class_name.clone(), RuleOrigin::Predefined);
        }

        store
    }

    /// Registers a declaration and returns its class name.
    ///
    /// If the declaration is already known, the existing name is returned and
    /// nothing changes.
    pub fn set(&mut self, property: &str, value: &StyleValue) -> &str {
        let declaration = Declaration::new(property, value.clone());
        let position = match self.index.get(&declaration) {
            Some(&position) => position,
            None => {
                let class_name = self.namer.next_name(property, value, &self.taken);
                log::debug!("registered {}:{} as .{}", property, value, class_name);
                self.push(declaration, class_name, RuleOrigin::Generated)
            }
        };
        &self.rules[position].class_name
    }

    /// Looks up the class name for a declaration without registering it.
    pub fn get(&self, property: &str, value: &StyleValue) -> Option<&str> {
        // Borrowed lookup would need a custom key type; declarations are small.
        let declaration = Declaration::new(property, value.clone());
        self.index
            .get(&declaration)
            .map(|&position| self.rules[position].class_name.as_str())
    }

    /// Returns `true` if the declaration has a class.
    pub fn contains(&self, property: &str, value: &StyleValue) -> bool {
        self.get(property, value).is_some()
    }

    /// Iterates over all rules, predefined first, in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules, including predefined ones.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the store holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders generated rules, one per line, through `prefixer`.
    ///
    /// Predefined rules are not rendered here; their CSS is the
    /// [`Predefs::predefined_css`] block.
    pub fn to_css(&self, prefixer: &dyn Prefixer) -> String {
        self.rules
            .iter()
            .filter(|rule| rule.origin == RuleOrigin::Generated)
            .map(|rule| rule.to_css(prefixer))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, declaration: Declaration, class_name: String, origin: RuleOrigin) -> usize {
        let position = self.rules.len();
        self.taken.insert(class_name.clone());
        self.index.insert(declaration.clone(), position);
        self.rules.push(Rule {
            declaration,
            class_name,
            origin,
        });
        position
    }
}

impl fmt::Display for DeclarationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(&crate::prefix::NoopPrefixer))
    }
}
