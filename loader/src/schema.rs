//! Constraint declarations: class name → class and property constraint lists.
//!
//! ```yaml
//! User:
//!   constraints:
//!     - PropertiesInequality: { first: minAge, second: maxAge }
//!   properties:
//!     email:
//!       - NotBlank
//!       - Email: { checkMX: false }
//!     age:
//!       - Min: 18
//! ```

use std::fs;
use std::path::Path;

use assay_registry::{Constraint, ConstraintKind, OptionValue, Options, Registry, RegistryBuilder};
use serde::Deserialize;
use serde_yaml::{Mapping, Value as Yaml};
use tracing::debug;

use crate::document::{convert, scalar_key};
use crate::error::{LoadError, LoadResult};
use crate::format::Format;

/// One class section of a declaration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassSection {
    #[serde(default)]
    constraints: Vec<Yaml>,
    #[serde(default)]
    properties: Mapping,
}

/// Load a registry from declaration source text.
pub fn load_registry_from_str(source: &str, format: Format) -> LoadResult<Registry> {
    let tree = format.parse(source)?;
    let classes = match tree {
        Yaml::Null => Mapping::new(),
        Yaml::Mapping(classes) => classes,
        _ => {
            return Err(LoadError::invalid_entry(
                "declarations",
                "expected a mapping of class names",
            ))
        }
    };

    let mut builder = RegistryBuilder::new();
    for (name, section) in classes {
        let name = scalar_key(&name, "declarations")?;
        let section: ClassSection = match section {
            Yaml::Null => ClassSection::default(),
            other => serde_yaml::from_value(other)
                .map_err(|e| LoadError::invalid_entry(name.as_str(), e.to_string()))?,
        };

        let class_constraints = parse_constraint_list(&section.constraints, &name)?;
        let mut properties = Vec::with_capacity(section.properties.len());
        for (path, entries) in &section.properties {
            let path = scalar_key(path, &name)?;
            let context = format!("{}.{}", name, path);
            properties.push((path, parse_constraints(entries, &context)?));
        }

        let mut class = builder.add_class(name);
        for constraint in class_constraints {
            class = class.constraint(constraint);
        }
        for (path, constraints) in properties {
            class = class.properties(path, constraints);
        }
        class.done()?;
    }
    Ok(builder.build()?)
}

/// Load a registry from a `.yaml`, `.yml` or `.json` declaration file.
pub fn load_registry_from_path(path: &Path) -> LoadResult<Registry> {
    let format = Format::from_path(path)?;
    let source = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let registry = load_registry_from_str(&source, format)?;
    debug!(
        path = %path.display(),
        classes = registry.class_count(),
        "loaded declarations"
    );
    Ok(registry)
}

/// Parse one constraint entry: a bare kind name, or a single-key mapping `Kind: options`.
pub fn parse_constraint(entry: &Yaml, context: &str) -> LoadResult<Constraint> {
    let (name, options) = match entry {
        Yaml::String(name) => (name.as_str(), &Yaml::Null),
        Yaml::Mapping(mapping) if mapping.len() == 1 => match mapping.iter().next() {
            Some((Yaml::String(name), options)) => (name.as_str(), options),
            _ => {
                return Err(LoadError::invalid_entry(
                    context,
                    "constraint name must be a string",
                ))
            }
        },
        _ => {
            return Err(LoadError::invalid_entry(
                context,
                "expected `Kind` or `Kind: options`",
            ))
        }
    };
    let kind =
        ConstraintKind::from_name(name).ok_or_else(|| LoadError::unknown_kind(name, context))?;
    let context = format!("{} > {}", context, name);

    let constraint = match options {
        Yaml::Null => Constraint::from_options(kind, Options::new()),
        Yaml::Mapping(named) if !takes_mapping_default(kind) || is_named(kind, named) => {
            let mut options = Options::new();
            for (option, value) in named {
                let option = scalar_key(option, &context)?;
                let value = option_value(kind, &option, value, &context)?;
                options.insert(option, value);
            }
            Constraint::from_options(kind, options)
        }
        positional => match kind.default_option() {
            Some(option) => {
                let value = option_value(kind, option, positional, &context)?;
                Constraint::from_default(kind, value)
            }
            None => Constraint::from_default(kind, convert(positional, &context)?),
        },
    };
    constraint.map_err(|e| LoadError::catalog(context, e))
}

/// Parse a constraint list. `null` is empty and a lone entry is a list of one.
fn parse_constraints(entries: &Yaml, context: &str) -> LoadResult<Vec<Constraint>> {
    match entries {
        Yaml::Null => Ok(Vec::new()),
        Yaml::Sequence(entries) => parse_constraint_list(entries, context),
        entry => Ok(vec![parse_constraint(entry, context)?]),
    }
}

fn parse_constraint_list(entries: &[Yaml], context: &str) -> LoadResult<Vec<Constraint>> {
    entries
        .iter()
        .map(|entry| parse_constraint(entry, context))
        .collect()
}

/// Collection's default option is itself a mapping (field → constraints).
fn takes_mapping_default(kind: ConstraintKind) -> bool {
    kind == ConstraintKind::Collection
}

/// Whether a mapping holds named options rather than the positional default.
fn is_named(kind: ConstraintKind, mapping: &Mapping) -> bool {
    mapping
        .keys()
        .all(|key| key.as_str().is_some_and(|key| kind.accepts_option(key)))
        && kind
            .default_option()
            .is_some_and(|option| mapping.contains_key(option))
}

fn option_value(
    kind: ConstraintKind,
    option: &str,
    value: &Yaml,
    context: &str,
) -> LoadResult<OptionValue> {
    match (option, value) {
        ("constraints", _) => Ok(OptionValue::Constraints(parse_constraints(value, context)?)),
        ("fields", Yaml::Mapping(fields)) if kind == ConstraintKind::Collection => {
            parse_fields(fields, context).map(OptionValue::Fields)
        }
        _ => Ok(OptionValue::Value(convert(value, context)?)),
    }
}

/// Collection fields: each name maps to `null`, a constraint list, or a
/// single `Required: [...]` / `Optional: [...]` entry.
fn parse_fields(fields: &Mapping, context: &str) -> LoadResult<Vec<(String, Vec<Constraint>)>> {
    let mut parsed = Vec::with_capacity(fields.len());
    for (name, declaration) in fields {
        let name = scalar_key(name, context)?;
        let field_context = format!("{}[{}]", context, name);
        parsed.push((name, parse_constraints(declaration, &field_context)?));
    }
    Ok(parsed)
}
