//! Sheet configuration.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`BuildMode::detect`].
pub const BUILD_MODE_ENV: &str = "ATOMIC_STYLE_ENV";

/// Whether the host is a production build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Detects the build mode of the running process.
    ///
    /// `ATOMIC_STYLE_ENV=production` selects [`BuildMode::Production`]; any
    /// other value selects [`BuildMode::Development`]. Without the variable,
    /// release builds (no `debug_assertions`) are production.
    pub fn detect() -> Self {
        match std::env::var(BUILD_MODE_ENV) {
            Ok(value) if value.eq_ignore_ascii_case("production") => BuildMode::Production,
            Ok(_) => BuildMode::Development,
            Err(_) if cfg!(debug_assertions) => BuildMode::Development,
            Err(_) => BuildMode::Production,
        }
    }
}

/// Options fixed for the lifetime of a [`DeclarationStore`](crate::DeclarationStore).
///
/// # Example
///
/// ```rust
/// use atomic_style::Options;
///
/// let options: Options = serde_json::from_str(r#"{ "obfuscate_class_names": true }"#).unwrap();
/// assert!(options.obfuscate_class_names);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Generate short opaque class names instead of readable ones.
    pub obfuscate_class_names: bool,
}

impl Options {
    /// Options for the given build mode: production builds obfuscate.
    pub fn for_mode(mode: BuildMode) -> Self {
        Self {
            obfuscate_class_names: mode == BuildMode::Production,
        }
    }

    /// Options for the detected build mode of this process.
    pub fn from_env() -> Self {
        Self::for_mode(BuildMode::detect())
    }
}
