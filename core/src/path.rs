//! Property paths address a value inside a composite value.
//!
//! Syntax: dotted property names with optional bracketed accessors,
//! e.g. `email`, `address.city`, `items[2].name`, `[0]`, `meta[created-by]`.
//! Numeric brackets index lists, other brackets are record keys.

use std::fmt;

use crate::error::{PathError, PathResult};
use crate::Value;

static NULL: Value = Value::Null;

/// One step of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A dotted property name.
    Property(String),
    /// A bracketed list index.
    Index(usize),
    /// A bracketed record key.
    Key(String),
}

/// A parsed property path. The empty path addresses the root value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string.
    pub fn parse(path: &str) -> PathResult<Self> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        let mut name = String::new();
        let mut name_start = 0;
        let mut chars = path.char_indices().peekable();
        // After a `]` a name may only follow a dot.
        let mut after_bracket = false;

        while let Some((offset, c)) = chars.next() {
            match c {
                '.' => {
                    if name.is_empty() && !after_bracket {
                        return Err(PathError::empty_segment(path, name_start));
                    }
                    if !name.is_empty() {
                        segments.push(Segment::Property(std::mem::take(&mut name)));
                    }
                    after_bracket = false;
                    name_start = offset + 1;
                    if chars.peek().is_none() {
                        return Err(PathError::empty_segment(path, offset + 1));
                    }
                }
                '[' => {
                    if !name.is_empty() {
                        segments.push(Segment::Property(std::mem::take(&mut name)));
                    }
                    let mut inner = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        match c {
                            ']' => {
                                closed = true;
                                break;
                            }
                            '[' => return Err(PathError::unbalanced(path)),
                            other => inner.push(other),
                        }
                    }
                    if !closed {
                        return Err(PathError::unbalanced(path));
                    }
                    if inner.trim().is_empty() {
                        return Err(PathError::invalid_segment(path, inner));
                    }
                    let segment = match inner.parse::<usize>() {
                        Ok(index) => Segment::Index(index),
                        Err(_) => Segment::Key(inner),
                    };
                    segments.push(segment);
                    after_bracket = true;
                    name_start = offset + 1;
                }
                ']' => return Err(PathError::unbalanced(path)),
                other => {
                    if after_bracket && name.is_empty() {
                        return Err(PathError::invalid_segment(path, other.to_string()));
                    }
                    name.push(other);
                }
            }
        }

        if !name.is_empty() {
            segments.push(Segment::Property(name));
        }

        Ok(Self { segments })
    }

    /// Returns true for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Extend with a dotted property name.
    pub fn property(&self, name: impl Into<String>) -> Self {
        self.with(Segment::Property(name.into()))
    }

    /// Extend with a list index.
    pub fn index(&self, index: usize) -> Self {
        self.with(Segment::Index(index))
    }

    /// Extend with a bracketed record key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.with(Segment::Key(key.into()))
    }

    /// Concatenate another path onto this one.
    pub fn join(&self, other: &PropertyPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    fn with(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Read the addressed value. Missing steps resolve to `Null`.
    pub fn resolve<'v>(&self, value: &'v Value) -> &'v Value {
        let mut current = value;
        for segment in &self.segments {
            let next = match (segment, current) {
                (Segment::Property(name) | Segment::Key(name), Value::Record(fields)) => {
                    fields.get(name)
                }
                (Segment::Index(index), Value::List(items)) => items.get(*index),
                (Segment::Index(index), Value::Record(fields)) => fields.get(&index.to_string()),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return &NULL,
            }
        }
        current
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Property(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Property(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for PropertyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
