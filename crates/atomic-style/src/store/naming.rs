//! Class name generation.
//!
//! Two policies are supported:
//!
//! | Mode | Example | Source |
//! |------|---------|--------|
//! | Readable | `__style_fontSize-12_n` | property and value |
//! | Obfuscated | `_a` | registration counter |
//!
//! Readable names are an injective encoding of the declaration, so the same
//! declaration gets the same name in every store, whatever else was
//! registered first:
//!
//! - property characters outside `[A-Za-z0-9]` become `_xx` (hex bytes), so
//!   the first `-` always separates property from value;
//! - value characters outside `[A-Za-z0-9-]` become `_xx`;
//! - number values end in `_n` and boolean values in `_b`. An escape is
//!   always `_` plus two hex digits, so these markers cannot come from
//!   string text.
//!
//! Both policies still check against the names already taken (for example a
//! predefined class that happens to match) and append `-2`, `-3`, ... until
//! the name is free.

use std::collections::HashSet;
use std::fmt::Write;

use crate::config::Options;
use crate::value::StyleValue;

/// Prefix for readable class names.
pub const READABLE_PREFIX: &str = "__style_";

/// Prefix for obfuscated class names.
pub const OBFUSCATED_PREFIX: &str = "_";

/// Mints unique class names for declarations.
#[derive(Debug, Clone)]
pub struct ClassNamer {
    obfuscate: bool,
    counter: u64,
}

impl ClassNamer {
    /// Creates a namer following the naming policy in `options`.
    pub fn new(options: &Options) -> Self {
        Self {
            obfuscate: options.obfuscate_class_names,
            counter: 0,
        }
    }

    /// Returns `true` if this namer produces opaque names.
    pub fn is_obfuscated(&self) -> bool {
        self.obfuscate
    }

    /// Produces a class name for the declaration that is not in `taken`.
    ///
    /// The caller is responsible for adding the result to `taken`.
    pub fn next_name(
        &mut self,
        property: &str,
        value: &StyleValue,
        taken: &HashSet<String>,
    ) -> String {
        let base = if self.obfuscate {
            let name = format!("{}{}", OBFUSCATED_PREFIX, to_base36(self.counter));
            self.counter += 1;
            name
        } else {
            readable_name(property, value)
        };

        if !taken.contains(&base) {
            return base;
        }

        (2u64..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(base)
    }
}

/// Builds the readable class name for a declaration, before suffixing a taken name.
pub fn readable_name(property: &str, value: &StyleValue) -> String {
    let mut name = String::with_capacity(READABLE_PREFIX.len() + property.len() + 8);
    name.push_str(READABLE_PREFIX);
    push_escaped(&mut name, property, |c| c.is_ascii_alphanumeric());
    name.push('-');
    push_escaped(&mut name, &value.to_string(), |c| {
        c.is_ascii_alphanumeric() || c == '-'
    });
    match value {
        StyleValue::Str(_) => {}
        StyleValue::Number(_) => name.push_str("_n"),
        StyleValue::Bool(_) => name.push_str("_b"),
    }
    name
}

fn push_escaped(out: &mut String, text: &str, keep: impl Fn(char) -> bool) {
    for c in text.chars() {
        if keep(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "_{:02x}", byte);
            }
        }
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readable() -> ClassNamer {
        ClassNamer::new(&Options::default())
    }

    fn obfuscated() -> ClassNamer {
        ClassNamer::new(&Options {
            obfuscate_class_names: true,
        })
    }

    #[test]
    fn test_readable_name() {
        assert_eq!(readable_name("color", &"red".into()), "__style_color-red");
        assert_eq!(readable_name("fontSize", &12.into()), "__style_fontSize-12_n");
        assert_eq!(readable_name("color", &"#fff".into()), "__style_color-_23fff");
        assert_eq!(
            readable_name("width", &StyleValue::Number(1.5)),
            "__style_width-1_2e5_n"
        );
        assert_eq!(readable_name("visible", &true.into()), "__style_visible-true_b");
        assert_eq!(readable_name("margin", &"-4px".into()), "__style_margin--4px");
    }

    #[test]
    fn test_readable_name_is_injective_on_lookalikes() {
        let pairs: Vec<(&str, StyleValue)> = vec![
            ("fontSize", 12.into()),
            ("fontSize", "12".into()),
            ("fontSize", "12_n".into()),
            ("fontFamily", "a b".into()),
            ("fontFamily", "a_b".into()),
            ("fontFamily", "a.b".into()),
            ("a-b", "c".into()),
            ("a", "b-c".into()),
            ("flag", true.into()),
            ("flag", "true".into()),
            ("content", "é".into()),
        ];
        let names: HashSet<_> = pairs.iter().map(|(p, v)| readable_name(p, v)).collect();
        assert_eq!(names.len(), pairs.len());
    }

    #[test]
    fn test_readable_lookalikes_need_no_suffix() {
        let mut namer = readable();
        let mut taken = HashSet::new();

        let first = namer.next_name("fontSize", &12.into(), &taken);
        taken.insert(first.clone());
        let second = namer.next_name("fontSize", &"12".into(), &taken);

        assert_eq!(first, "__style_fontSize-12_n");
        assert_eq!(second, "__style_fontSize-12");
    }

    #[test]
    fn test_readable_name_taken_gets_suffix() {
        let mut namer = readable();
        let taken: HashSet<String> = ["__style_color-red".to_string()].into_iter().collect();
        assert_eq!(
            namer.next_name("color", &"red".into(), &taken),
            "__style_color-red-2"
        );
    }

    #[test]
    fn test_obfuscated_names_count_up() {
        let mut namer = obfuscated();
        let taken = HashSet::new();
        let names: Vec<_> = (0..3)
            .map(|_| namer.next_name("color", &"red".into(), &taken))
            .collect();
        assert_eq!(names, vec!["_0", "_1", "_2"]);
        assert!(namer.is_obfuscated());
    }

    #[test]
    fn test_obfuscated_skips_taken_names() {
        let mut namer = obfuscated();
        let taken: HashSet<String> = ["_0".to_string()].into_iter().collect();
        assert_eq!(namer.next_name("color", &"red".into(), &taken), "_0-2");
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
