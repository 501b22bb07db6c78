//! YAML loading and discovery.
//!
//! Files are read as UTF-8 and parsed with `serde_yaml` into a
//! `serde_yaml::Value` using safe-load semantics: a repeated mapping key
//! keeps its last value, and local tags such as `!custom` are rejected
//! because nothing can construct them. Discovery walks the whole tree,
//! hidden directories included, without following symlinked directories.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, Visitor};
use serde_yaml::{Mapping, Value};
use walkdir::WalkDir;

use crate::error::YamlLoadError;
use crate::layout::has_yaml_extension;

/// Result of walking a repository for YAML files.
#[derive(Debug, Default)]
pub struct YamlDiscovery {
    /// Every YAML file found, sorted by path.
    pub files: Vec<PathBuf>,
    /// Directories that could not be traversed, one message each.
    pub skipped: Vec<String>,
}

/// Read and parse a single YAML document.
pub fn load_yaml(path: &Path) -> Result<Value, YamlLoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Parse a single YAML document with safe-load semantics.
pub fn parse_yaml(content: &str) -> Result<Value, YamlLoadError> {
    let SafeValue(value) = serde_yaml::from_str(content)?;
    Ok(value)
}

/// A document node built without `Mapping`'s duplicate-key rejection.
struct SafeValue(Value);

impl<'de> Deserialize<'de> for SafeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SafeValueVisitor).map(SafeValue)
    }
}

struct SafeValueVisitor;

impl<'de> Visitor<'de> for SafeValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_u64<E>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_f64<E>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_str<E>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        SafeValue::deserialize(deserializer).map(|v| v.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(SafeValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((SafeValue(key), SafeValue(value))) = map.next_entry()? {
            // Last occurrence wins.
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        // serde_yaml surfaces local tags as enum variants; core `!!` tags are
        // resolved before reaching the visitor.
        let (tag, _contents) = data.variant::<String>()?;
        Err(de::Error::custom(format!(
            "could not determine a constructor for the tag '!{tag}'"
        )))
    }
}

/// Recursively find every file with a YAML extension under `root`.
///
/// Directories are never returned, even when their name ends in `.yaml`.
/// A missing root yields an empty discovery.
pub fn discover_yaml_files(root: &Path) -> YamlDiscovery {
    let mut discovery = YamlDiscovery::default();
    if !root.is_dir() {
        return discovery;
    }

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let at = e.path().unwrap_or(root);
                let rel = at.strip_prefix(root).unwrap_or(at);
                tracing::warn!(
                    dir = %rel.display(),
                    error = %e,
                    "failed to read directory during YAML discovery"
                );
                discovery
                    .skipped
                    .push(format!("Skipped unreadable path {}: {e}", rel.display()));
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if has_yaml_extension(entry.path()) {
            discovery.files.push(entry.into_path());
        }
    }

    discovery.files.sort();
    discovery
}
