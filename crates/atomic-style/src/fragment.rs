//! Style fragments and merging.
//!
//! Components receive styles in loose shapes: a single style object, nothing
//! at all, or arrays of either, nested to any depth. [`Fragment`] captures
//! those shapes and [`merge`] folds them into one flat [`StyleMap`].
//!
//! # Merge Order
//!
//! Fragments are visited depth-first, left to right. When two fragments set
//! the same property the later one wins, regardless of nesting depth. A
//! property that is overwritten keeps the position where it was first set.
//!
//! ```rust
//! use atomic_style::{merge, Fragment};
//! use serde_json::json;
//!
//! let style = Fragment::from(json!([{ "a": 1 }, [null, { "a": 2, "b": 3 }]]));
//! assert_eq!(serde_json::Value::Object(merge(&style)), json!({ "a": 2, "b": 3 }));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered mapping from property name to raw value.
///
/// Iteration order is insertion order.
pub type StyleMap = Map<String, Value>;

/// A style input in any of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Fragment {
    /// Contributes nothing (`null`, `false`, or other non-style values).
    #[default]
    Empty,
    /// A flat property → value object.
    Flat(StyleMap),
    /// An ordered list of fragments.
    Sequence(Vec<Fragment>),
}

impl Fragment {
    /// Creates a flat fragment from property/value pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atomic_style::Fragment;
    /// use serde_json::json;
    ///
    /// let style = Fragment::from_pairs([("color", json!("red")), ("fontSize", json!(12))]);
    /// assert!(!style.is_empty());
    /// ```
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Fragment::Flat(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns `true` if merging this fragment yields no properties.
    pub fn is_empty(&self) -> bool {
        match self {
            Fragment::Empty => true,
            Fragment::Flat(map) => map.is_empty(),
            Fragment::Sequence(items) => items.iter().all(Fragment::is_empty),
        }
    }

    /// Looks up a named entry of a style sheet object.
    ///
    /// Sheets passed to [`StyleSheet::create_sheet`](crate::StyleSheet::create_sheet)
    /// are objects of named styles. This returns the fragment stored
    /// under `name`, or [`Fragment::Empty`] when the entry is missing or this
    /// fragment is not an object.
    pub fn field(&self, name: &str) -> Fragment {
        match self {
            Fragment::Flat(map) => map.get(name).cloned().map(Fragment::from).unwrap_or_default(),
            _ => Fragment::Empty,
        }
    }
}

impl From<Value> for Fragment {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Fragment::Flat(map),
            Value::Array(items) => {
                Fragment::Sequence(items.into_iter().map(Fragment::from).collect())
            }
            _ => Fragment::Empty,
        }
    }
}

impl From<StyleMap> for Fragment {
    fn from(map: StyleMap) -> Self {
        Fragment::Flat(map)
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(items: Vec<Fragment>) -> Self {
        Fragment::Sequence(items)
    }
}

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Empty => Value::Null,
            Fragment::Flat(map) => Value::Object(map),
            Fragment::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
        }
    }
}

/// Flattens a fragment into a single style map.
///
/// Later properties overwrite earlier ones across the whole fragment tree.
pub fn merge(fragment: &Fragment) -> StyleMap {
    let mut acc = StyleMap::new();
    merge_into(&mut acc, fragment);
    acc
}

fn merge_into(acc: &mut StyleMap, fragment: &Fragment) {
    match fragment {
        Fragment::Empty => {}
        Fragment::Flat(map) => {
            for (property, value) in map {
                acc.insert(property.clone(), value.clone());
            }
        }
        Fragment::Sequence(items) => {
            for item in items {
                merge_into(acc, item);
            }
        }
    }
}
