//! Style conversion errors.

use thiserror::Error;

/// Error returned when a style value cannot take part in class generation.
///
/// These errors never escape [`StyleSheet`](crate::StyleSheet): a declaration
/// that fails conversion stays in the inline style instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The value has no stable cache key (objects, arrays, null, NaN).
    #[error("value of '{property}' cannot be cached: {kind}")]
    UnserializableValue {
        /// Property the value was declared for
        property: String,
        /// Short description of the rejected value
        kind: String,
    },
}
