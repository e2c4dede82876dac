//! Localization
//!
//! Flat key/value tables per locale, built once from the embedded JSON
//! catalogs. Nested objects flatten to dotted keys (`dashboard.title`).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Locale::En => include_str!("../locales/en.json"),
            Locale::Es => include_str!("../locales/es.json"),
        }
    }

    fn from_index(index: u8) -> Self {
        match index {
            1 => Locale::Es,
            _ => Locale::En,
        }
    }

    fn index(self) -> u8 {
        match self {
            Locale::En => 0,
            Locale::Es => 1,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}`")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

pub type Catalog = HashMap<String, String>;

fn flatten(prefix: &str, value: &Value, out: &mut Catalog) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

/// Parses a nested JSON catalog into dotted keys.
pub fn parse_catalog(source: &str) -> Result<Catalog, serde_json::Error> {
    let document: Value = serde_json::from_str(source)?;
    let mut catalog = Catalog::new();
    flatten("", &document, &mut catalog);
    Ok(catalog)
}

static CATALOGS: OnceLock<HashMap<Locale, Catalog>> = OnceLock::new();
static CURRENT: AtomicU8 = AtomicU8::new(0);

fn catalogs() -> &'static HashMap<Locale, Catalog> {
    CATALOGS.get_or_init(|| {
        Locale::ALL
            .into_iter()
            .map(|locale| (locale, parse_catalog(locale.source()).unwrap_or_default()))
            .collect()
    })
}

/// Looks `key` up in `locale`, then English, then echoes the key.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    let tables = catalogs();
    [locale, Locale::En]
        .iter()
        .find_map(|candidate| tables.get(candidate)?.get(key))
        .map(String::as_str)
        .unwrap_or(key)
}

pub fn set_current_locale(locale: Locale) {
    CURRENT.store(locale.index(), Ordering::Relaxed);
}

pub fn current_locale() -> Locale {
    Locale::from_index(CURRENT.load(Ordering::Relaxed))
}

/// Translates against the process-wide locale.
pub fn t(key: &str) -> &str {
    translate(current_locale(), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_flatten_to_dots() {
        let catalog = parse_catalog(r#"{"a": {"b": "x", "c": {"d": "y"}}, "n": 3}"#).unwrap();
        assert_eq!(catalog.get("a.b").map(String::as_str), Some("x"));
        assert_eq!(catalog.get("a.c.d").map(String::as_str), Some("y"));
        assert_eq!(catalog.get("n").map(String::as_str), Some("3"));
    }

    #[test]
    fn embedded_catalogs_parse_and_share_keys() {
        let en = parse_catalog(Locale::En.source()).unwrap();
        let es = parse_catalog(Locale::Es.source()).unwrap();
        let mut missing: Vec<&String> = en.keys().filter(|key| !es.contains_key(*key)).collect();
        missing.sort();
        assert!(missing.is_empty(), "keys missing from es: {missing:?}");
        assert_eq!(en.len(), es.len());
    }

    #[test]
    fn translate_by_locale() {
        assert_eq!(translate(Locale::En, "status.done"), "Done");
        assert_eq!(translate(Locale::Es, "status.done"), "Hecho");
        assert_eq!(translate(Locale::Es, "dashboard.title"), "Mis Tareas");
    }

    #[test]
    fn unknown_key_echoes_back() {
        assert_eq!(translate(Locale::Es, "nope.missing"), "nope.missing");
    }

    #[test]
    fn locale_tags() {
        assert_eq!("es".parse::<Locale>(), Ok(Locale::Es));
        assert_eq!("fr".parse::<Locale>(), Err(ParseLocaleError("fr".into())));
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }

    #[test]
    fn process_wide_selector() {
        set_current_locale(Locale::Es);
        assert_eq!(current_locale(), Locale::Es);
        assert_eq!(t("status.todo"), "Por Hacer");
        set_current_locale(Locale::En);
        assert_eq!(t("status.todo"), "To Do");
    }
}
