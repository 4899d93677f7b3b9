//! Data documents: the values that get validated.

use std::fs;
use std::path::Path;

use assay_core::{Record, Value};
use serde_yaml::Value as Yaml;
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::format::Format;

/// Parse a JSON document into a value.
pub fn value_from_json(source: &str) -> LoadResult<Value> {
    parse_document(source, Format::Json)
}

/// Parse a YAML document into a value.
pub fn value_from_yaml(source: &str) -> LoadResult<Value> {
    parse_document(source, Format::Yaml)
}

/// Parse a document in the given format into a value.
pub fn parse_document(source: &str, format: Format) -> LoadResult<Value> {
    let tree = format.parse(source)?;
    convert(&tree, "document")
}

/// Read a document from disk, picking the format from its extension.
pub fn read_document(path: &Path) -> LoadResult<Value> {
    let format = Format::from_path(path)?;
    let source = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    debug!(path = %path.display(), %format, "reading document");
    parse_document(&source, format)
}

/// Convert a parsed tree into a value. Mapping keys must be scalars.
pub(crate) fn convert(tree: &Yaml, context: &str) -> LoadResult<Value> {
    Ok(match tree {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::List(
            items
                .iter()
                .map(|item| convert(item, context))
                .collect::<LoadResult<Vec<_>>>()?,
        ),
        Yaml::Mapping(entries) => {
            let mut record = Record::new();
            for (key, value) in entries {
                record.insert(scalar_key(key, context)?, convert(value, context)?);
            }
            Value::Record(record)
        }
        Yaml::Tagged(tagged) => convert(&tagged.value, context)?,
    })
}

/// Render a mapping key as a string.
pub(crate) fn scalar_key(key: &Yaml, context: &str) -> LoadResult<String> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        _ => Err(LoadError::invalid_entry(context, "mapping keys must be scalars")),
    }
}
