//! Constraint definitions.
//!
//! A `Constraint` is an immutable rule descriptor: one variant per kind,
//! carrying that kind's typed options and message templates. Every
//! construction path checks the kind's option table, so an existing
//! `Constraint` is always well-formed.

use std::collections::BTreeMap;

use assay_core::{PropertyPath, Value};
use regex_lite::Regex;

use crate::error::{CatalogError, CatalogResult};
use crate::{messages, Charset, ConstraintKind, OptionValue, Options, Target};

/// Inclusive numeric bound (`Min`, `Max`).
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub limit: f64,
    pub message: String,
    pub invalid_message: String,
}

/// Inclusive interval with either end optional (`Range`).
///
/// With both ends set, a value outside reports `not_in_range_message`;
/// with one end set, the matching one-sided message is used.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_message: String,
    pub max_message: String,
    pub not_in_range_message: String,
    pub invalid_message: String,
}

/// Inclusive length bound (`MinLength`, `MaxLength`).
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    pub limit: usize,
    pub charset: Charset,
    pub message: String,
}

/// A compiled regular expression together with its source text.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

/// Delimiters accepted around a pattern written as `/body/flags`.
const DELIMITERS: [char; 7] = ['/', '#', '~', '!', '@', '%', '`'];

impl Pattern {
    /// Compile a bare pattern (`^\d+$`) or a delimited one with trailing
    /// modifiers (`/^\d+$/i`).
    pub fn new(source: &str) -> CatalogResult<Self> {
        let regex = Regex::new(&undelimit(source)?)
            .map_err(|e| CatalogError::invalid_pattern(source, e.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Strip `/.../flags` delimiters, turning modifiers into an inline flag group.
///
/// `u` and `D` are accepted and dropped: matching is always Unicode-aware
/// and `$` only matches at the end without `m`.
fn undelimit(source: &str) -> CatalogResult<String> {
    let Some(open) = source.chars().next().filter(|c| DELIMITERS.contains(c)) else {
        return Ok(source.to_string());
    };
    let Some(close) = source.rfind(open).filter(|&i| i > 0) else {
        return Ok(source.to_string());
    };
    let modifiers = &source[close + 1..];
    if !modifiers.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(source.to_string());
    }

    let mut flags = String::new();
    for modifier in modifiers.chars() {
        match modifier {
            'i' | 'm' | 's' | 'x' | 'U' if !flags.contains(modifier) => flags.push(modifier),
            'i' | 'm' | 's' | 'x' | 'U' | 'u' | 'D' => {}
            other => {
                return Err(CatalogError::invalid_pattern(
                    source,
                    format!("unknown modifier '{}'", other),
                ))
            }
        }
    }

    let body = unescape_delimiter(&source[open.len_utf8()..close], open);
    if flags.is_empty() {
        Ok(body)
    } else {
        Ok(format!("(?{}){}", flags, body))
    }
}

/// `\/` inside a `/`-delimited pattern is a plain `/`.
fn unescape_delimiter(body: &str, delimiter: char) -> String {
    if delimiter == '#' {
        return body.to_string();
    }
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == delimiter => out.push(next),
            Some(next) => {
                out.push(c);
                out.push(next);
            }
            None => out.push(c),
        }
    }
    out
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegexRule {
    pub pattern: Pattern,
    /// When false the value is valid exactly when the pattern does not match.
    pub matches: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailRule {
    pub check_mx: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlRule {
    /// Allowed schemes, lowercase.
    pub protocols: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRule {
    /// Maximum size in bytes.
    pub max_size: Option<u64>,
    /// Allowed mime types; `type/*` wildcards are allowed.
    pub mime_types: Vec<String>,
    pub not_found_message: String,
    pub not_readable_message: String,
    pub max_size_message: String,
    pub mime_types_message: String,
}

/// Presence policy of a collection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    /// Reported when absent, unless the collection allows missing fields.
    Required,
    /// Never reported when absent.
    Optional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub existence: Existence,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRule {
    /// Declared fields, in declaration order.
    pub fields: Vec<Field>,
    pub allow_extra_fields: bool,
    pub allow_missing_fields: bool,
    pub extra_fields_message: String,
    pub missing_fields_message: String,
}

impl CollectionRule {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InequalityRule {
    pub first: PropertyPath,
    pub second: PropertyPath,
    /// `first < second` when strict, `first <= second` otherwise.
    pub strict: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateOrderRule {
    pub start: PropertyPath,
    pub end: PropertyPath,
    pub allow_equal: bool,
    pub message: String,
}

/// A validation rule descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    NotNull { message: String },
    Null { message: String },
    NotBlank { message: String },
    Blank { message: String },
    AssertTrue { message: String },
    Min(Bound),
    Max(Bound),
    Range(RangeRule),
    MinLength(Length),
    MaxLength(Length),
    Regex(RegexRule),
    Email(EmailRule),
    Url(UrlRule),
    File(FileRule),
    Collection(CollectionRule),
    All { constraints: Vec<Constraint> },
    Each { constraints: Vec<Constraint> },
    Required { constraints: Vec<Constraint> },
    Optional { constraints: Vec<Constraint> },
    PropertiesInequality(InequalityRule),
    DateOrder(DateOrderRule),
    Digit { message: String },
    Iban { message: String },
    Luhn { message: String },
    Nif { message: String },
}

const DEFAULT_PROTOCOLS: [&str; 4] = ["http", "https", "ftp", "ftps"];

impl Constraint {
    // ==================== Typed constructors ====================

    pub fn not_null() -> Self {
        Constraint::NotNull {
            message: messages::NOT_NULL.to_string(),
        }
    }

    pub fn null() -> Self {
        Constraint::Null {
            message: messages::NULL.to_string(),
        }
    }

    pub fn not_blank() -> Self {
        Constraint::NotBlank {
            message: messages::NOT_BLANK.to_string(),
        }
    }

    pub fn blank() -> Self {
        Constraint::Blank {
            message: messages::BLANK.to_string(),
        }
    }

    pub fn assert_true() -> Self {
        Constraint::AssertTrue {
            message: messages::ASSERT_TRUE.to_string(),
        }
    }

    pub fn min(limit: impl Into<f64>) -> Self {
        Constraint::Min(Bound {
            limit: limit.into(),
            message: messages::MIN.to_string(),
            invalid_message: messages::INVALID_NUMBER.to_string(),
        })
    }

    pub fn max(limit: impl Into<f64>) -> Self {
        Constraint::Max(Bound {
            limit: limit.into(),
            message: messages::MAX.to_string(),
            invalid_message: messages::INVALID_NUMBER.to_string(),
        })
    }

    /// Both ends of an inclusive interval; one-sided ranges go through `from_options`.
    pub fn range(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Constraint::Range(RangeRule {
            min: Some(min.into()),
            max: Some(max.into()),
            min_message: messages::MIN.to_string(),
            max_message: messages::MAX.to_string(),
            not_in_range_message: messages::NOT_IN_RANGE.to_string(),
            invalid_message: messages::INVALID_NUMBER.to_string(),
        })
    }

    pub fn min_length(limit: usize) -> Self {
        Constraint::MinLength(Length {
            limit,
            charset: Charset::default(),
            message: messages::MIN_LENGTH.to_string(),
        })
    }

    pub fn max_length(limit: usize) -> Self {
        Constraint::MaxLength(Length {
            limit,
            charset: Charset::default(),
            message: messages::MAX_LENGTH.to_string(),
        })
    }

    pub fn regex(pattern: &str) -> CatalogResult<Self> {
        Ok(Constraint::Regex(RegexRule {
            pattern: Pattern::new(pattern)?,
            matches: true,
            message: messages::REGEX.to_string(),
        }))
    }

    pub fn email() -> Self {
        Constraint::Email(EmailRule {
            check_mx: false,
            message: messages::EMAIL.to_string(),
        })
    }

    pub fn url() -> Self {
        Constraint::Url(UrlRule {
            protocols: DEFAULT_PROTOCOLS.iter().map(|p| p.to_string()).collect(),
            message: messages::URL.to_string(),
        })
    }

    pub fn file() -> Self {
        Constraint::File(FileRule {
            max_size: None,
            mime_types: Vec::new(),
            not_found_message: messages::FILE_NOT_FOUND.to_string(),
            not_readable_message: messages::FILE_NOT_READABLE.to_string(),
            max_size_message: messages::FILE_TOO_LARGE.to_string(),
            mime_types_message: messages::FILE_MIME_TYPE.to_string(),
        })
    }

    /// Structural check over a record's key set.
    ///
    /// A field whose constraint list is a single `Required`/`Optional` wrapper takes
    /// that presence policy; any other list is `Required`.
    pub fn collection<I, S>(fields: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<Constraint>)>,
        S: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, constraints)| (name.into(), constraints))
            .collect();
        Ok(Constraint::Collection(CollectionRule {
            fields: build_fields(ConstraintKind::Collection, fields)?,
            allow_extra_fields: false,
            allow_missing_fields: false,
            extra_fields_message: messages::COLLECTION_EXTRA_FIELDS.to_string(),
            missing_fields_message: messages::COLLECTION_MISSING_FIELDS.to_string(),
        }))
    }

    pub fn all(constraints: Vec<Constraint>) -> CatalogResult<Self> {
        check_nested(ConstraintKind::All, &constraints)?;
        Ok(Constraint::All {
            constraints: non_empty(ConstraintKind::All, constraints)?,
        })
    }

    pub fn each(constraints: Vec<Constraint>) -> CatalogResult<Self> {
        check_nested(ConstraintKind::Each, &constraints)?;
        Ok(Constraint::Each {
            constraints: non_empty(ConstraintKind::Each, constraints)?,
        })
    }

    pub fn required(constraints: Vec<Constraint>) -> CatalogResult<Self> {
        check_nested(ConstraintKind::Required, &constraints)?;
        Ok(Constraint::Required { constraints })
    }

    pub fn optional(constraints: Vec<Constraint>) -> CatalogResult<Self> {
        check_nested(ConstraintKind::Optional, &constraints)?;
        Ok(Constraint::Optional { constraints })
    }

    pub fn properties_inequality(first: &str, second: &str) -> CatalogResult<Self> {
        let kind = ConstraintKind::PropertiesInequality;
        Ok(Constraint::PropertiesInequality(InequalityRule {
            first: parse_path(kind, "first", first)?,
            second: parse_path(kind, "second", second)?,
            strict: true,
            message: messages::PROPERTIES_INEQUALITY.to_string(),
        }))
    }

    pub fn date_order(start: &str, end: &str) -> CatalogResult<Self> {
        let kind = ConstraintKind::DateOrder;
        Ok(Constraint::DateOrder(DateOrderRule {
            start: parse_path(kind, "start", start)?,
            end: parse_path(kind, "end", end)?,
            allow_equal: false,
            message: messages::DATE_ORDER.to_string(),
        }))
    }

    pub fn digit() -> Self {
        Constraint::Digit {
            message: messages::DIGIT.to_string(),
        }
    }

    pub fn iban() -> Self {
        Constraint::Iban {
            message: messages::IBAN.to_string(),
        }
    }

    pub fn luhn() -> Self {
        Constraint::Luhn {
            message: messages::LUHN.to_string(),
        }
    }

    pub fn nif() -> Self {
        Constraint::Nif {
            message: messages::NIF.to_string(),
        }
    }

    // ==================== Builder modifiers ====================

    /// Override the `message` option. No effect on kinds without one.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        if let Some(message) = self.message_mut() {
            *message = template.into();
        }
        self
    }

    /// Regex: valid exactly when the pattern does not match.
    pub fn inverted(mut self) -> Self {
        if let Constraint::Regex(rule) = &mut self {
            rule.matches = false;
        }
        self
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        if let Constraint::MinLength(rule) | Constraint::MaxLength(rule) = &mut self {
            rule.charset = charset;
        }
        self
    }

    pub fn check_mx(mut self) -> Self {
        if let Constraint::Email(rule) = &mut self {
            rule.check_mx = true;
        }
        self
    }

    pub fn with_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Constraint::Url(rule) = &mut self {
            rule.protocols = protocols
                .into_iter()
                .map(|p| p.as_ref().to_ascii_lowercase())
                .collect();
        }
        self
    }

    pub fn with_max_size(mut self, bytes: u64) -> Self {
        if let Constraint::File(rule) = &mut self {
            rule.max_size = Some(bytes);
        }
        self
    }

    pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Constraint::File(rule) = &mut self {
            rule.mime_types = mime_types.into_iter().map(Into::into).collect();
        }
        self
    }

    pub fn allow_extra_fields(mut self) -> Self {
        if let Constraint::Collection(rule) = &mut self {
            rule.allow_extra_fields = true;
        }
        self
    }

    pub fn allow_missing_fields(mut self) -> Self {
        if let Constraint::Collection(rule) = &mut self {
            rule.allow_missing_fields = true;
        }
        self
    }

    /// PropertiesInequality: accept `first == second`.
    pub fn non_strict(mut self) -> Self {
        if let Constraint::PropertiesInequality(rule) = &mut self {
            rule.strict = false;
        }
        self
    }

    /// DateOrder: accept `start == end`.
    pub fn allow_equal(mut self) -> Self {
        if let Constraint::DateOrder(rule) = &mut self {
            rule.allow_equal = true;
        }
        self
    }

    // ==================== Declarative construction ====================

    /// Build a constraint from named options, enforcing the kind's option table.
    pub fn from_options(kind: ConstraintKind, options: Options) -> CatalogResult<Self> {
        let mut reader = Reader::new(kind, options)?;
        let constraint = match kind {
            ConstraintKind::NotNull => Constraint::NotNull {
                message: reader.message("message", messages::NOT_NULL)?,
            },
            ConstraintKind::Null => Constraint::Null {
                message: reader.message("message", messages::NULL)?,
            },
            ConstraintKind::NotBlank => Constraint::NotBlank {
                message: reader.message("message", messages::NOT_BLANK)?,
            },
            ConstraintKind::Blank => Constraint::Blank {
                message: reader.message("message", messages::BLANK)?,
            },
            ConstraintKind::AssertTrue => Constraint::AssertTrue {
                message: reader.message("message", messages::ASSERT_TRUE)?,
            },
            ConstraintKind::Min => Constraint::Min(reader.bound(messages::MIN)?),
            ConstraintKind::Max => Constraint::Max(reader.bound(messages::MAX)?),
            ConstraintKind::Range => {
                let min = reader.number("min")?;
                let max = reader.number("max")?;
                if min.is_none() && max.is_none() {
                    return Err(CatalogError::MissingLimits { kind });
                }
                Constraint::Range(RangeRule {
                    min,
                    max,
                    min_message: reader.message("minMessage", messages::MIN)?,
                    max_message: reader.message("maxMessage", messages::MAX)?,
                    not_in_range_message: reader
                        .message("notInRangeMessage", messages::NOT_IN_RANGE)?,
                    invalid_message: reader.message("invalidMessage", messages::INVALID_NUMBER)?,
                })
            }
            ConstraintKind::MinLength => Constraint::MinLength(reader.length(messages::MIN_LENGTH)?),
            ConstraintKind::MaxLength => Constraint::MaxLength(reader.length(messages::MAX_LENGTH)?),
            ConstraintKind::Regex => {
                let source = reader.required_string("pattern")?;
                Constraint::Regex(RegexRule {
                    pattern: Pattern::new(&source)?,
                    matches: reader.flag("match", true)?,
                    message: reader.message("message", messages::REGEX)?,
                })
            }
            ConstraintKind::Email => Constraint::Email(EmailRule {
                check_mx: reader.flag("checkMX", false)?,
                message: reader.message("message", messages::EMAIL)?,
            }),
            ConstraintKind::Url => Constraint::Url(UrlRule {
                protocols: match reader.strings("protocols")? {
                    Some(protocols) => protocols.iter().map(|p| p.to_ascii_lowercase()).collect(),
                    None => DEFAULT_PROTOCOLS.iter().map(|p| p.to_string()).collect(),
                },
                message: reader.message("message", messages::URL)?,
            }),
            ConstraintKind::File => Constraint::File(FileRule {
                max_size: reader.size("maxSize")?,
                mime_types: reader.strings("mimeTypes")?.unwrap_or_default(),
                not_found_message: reader.message("notFoundMessage", messages::FILE_NOT_FOUND)?,
                not_readable_message: reader
                    .message("notReadableMessage", messages::FILE_NOT_READABLE)?,
                max_size_message: reader.message("maxSizeMessage", messages::FILE_TOO_LARGE)?,
                mime_types_message: reader.message("mimeTypesMessage", messages::FILE_MIME_TYPE)?,
            }),
            ConstraintKind::Collection => Constraint::Collection(CollectionRule {
                fields: reader.fields("fields")?,
                allow_extra_fields: reader.flag("allowExtraFields", false)?,
                allow_missing_fields: reader.flag("allowMissingFields", false)?,
                extra_fields_message: reader
                    .message("extraFieldsMessage", messages::COLLECTION_EXTRA_FIELDS)?,
                missing_fields_message: reader
                    .message("missingFieldsMessage", messages::COLLECTION_MISSING_FIELDS)?,
            }),
            ConstraintKind::All => Constraint::All {
                constraints: non_empty(kind, reader.constraints("constraints")?)?,
            },
            ConstraintKind::Each => Constraint::Each {
                constraints: non_empty(kind, reader.constraints("constraints")?)?,
            },
            ConstraintKind::Required => Constraint::Required {
                constraints: reader.constraints("constraints")?,
            },
            ConstraintKind::Optional => Constraint::Optional {
                constraints: reader.constraints("constraints")?,
            },
            ConstraintKind::PropertiesInequality => {
                Constraint::PropertiesInequality(InequalityRule {
                    first: reader.path("first")?,
                    second: reader.path("second")?,
                    strict: reader.flag("strict", true)?,
                    message: reader.message("message", messages::PROPERTIES_INEQUALITY)?,
                })
            }
            ConstraintKind::DateOrder => Constraint::DateOrder(DateOrderRule {
                start: reader.path("start")?,
                end: reader.path("end")?,
                allow_equal: reader.flag("allowEqual", false)?,
                message: reader.message("message", messages::DATE_ORDER)?,
            }),
            ConstraintKind::Digit => Constraint::Digit {
                message: reader.message("message", messages::DIGIT)?,
            },
            ConstraintKind::Iban => Constraint::Iban {
                message: reader.message("message", messages::IBAN)?,
            },
            ConstraintKind::Luhn => Constraint::Luhn {
                message: reader.message("message", messages::LUHN)?,
            },
            ConstraintKind::Nif => Constraint::Nif {
                message: reader.message("message", messages::NIF)?,
            },
        };
        Ok(constraint)
    }

    /// Build a constraint from a single positional value bound to the default option.
    pub fn from_default(kind: ConstraintKind, value: impl Into<OptionValue>) -> CatalogResult<Self> {
        let option = kind
            .default_option()
            .ok_or(CatalogError::NoDefaultOption { kind })?;
        Self::from_options(kind, Options::new().with(option, value))
    }

    // ==================== Accessors ====================

    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::NotNull { .. } => ConstraintKind::NotNull,
            Constraint::Null { .. } => ConstraintKind::Null,
            Constraint::NotBlank { .. } => ConstraintKind::NotBlank,
            Constraint::Blank { .. } => ConstraintKind::Blank,
            Constraint::AssertTrue { .. } => ConstraintKind::AssertTrue,
            Constraint::Min(_) => ConstraintKind::Min,
            Constraint::Max(_) => ConstraintKind::Max,
            Constraint::Range(_) => ConstraintKind::Range,
            Constraint::MinLength(_) => ConstraintKind::MinLength,
            Constraint::MaxLength(_) => ConstraintKind::MaxLength,
            Constraint::Regex(_) => ConstraintKind::Regex,
            Constraint::Email(_) => ConstraintKind::Email,
            Constraint::Url(_) => ConstraintKind::Url,
            Constraint::File(_) => ConstraintKind::File,
            Constraint::Collection(_) => ConstraintKind::Collection,
            Constraint::All { .. } => ConstraintKind::All,
            Constraint::Each { .. } => ConstraintKind::Each,
            Constraint::Required { .. } => ConstraintKind::Required,
            Constraint::Optional { .. } => ConstraintKind::Optional,
            Constraint::PropertiesInequality(_) => ConstraintKind::PropertiesInequality,
            Constraint::DateOrder(_) => ConstraintKind::DateOrder,
            Constraint::Digit { .. } => ConstraintKind::Digit,
            Constraint::Iban { .. } => ConstraintKind::Iban,
            Constraint::Luhn { .. } => ConstraintKind::Luhn,
            Constraint::Nif { .. } => ConstraintKind::Nif,
        }
    }

    pub fn target(&self) -> Target {
        self.kind().target()
    }

    /// The `message` option, for kinds that have one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Constraint::NotNull { message }
            | Constraint::Null { message }
            | Constraint::NotBlank { message }
            | Constraint::Blank { message }
            | Constraint::AssertTrue { message }
            | Constraint::Digit { message }
            | Constraint::Iban { message }
            | Constraint::Luhn { message }
            | Constraint::Nif { message } => Some(message),
            Constraint::Min(rule) | Constraint::Max(rule) => Some(&rule.message),
            Constraint::MinLength(rule) | Constraint::MaxLength(rule) => Some(&rule.message),
            Constraint::Regex(rule) => Some(&rule.message),
            Constraint::Email(rule) => Some(&rule.message),
            Constraint::Url(rule) => Some(&rule.message),
            Constraint::PropertiesInequality(rule) => Some(&rule.message),
            Constraint::DateOrder(rule) => Some(&rule.message),
            Constraint::Range(_)
            | Constraint::File(_)
            | Constraint::Collection(_)
            | Constraint::All { .. }
            | Constraint::Each { .. }
            | Constraint::Required { .. }
            | Constraint::Optional { .. } => None,
        }
    }

    /// Every message template keyed by its option name.
    pub fn messages(&self) -> BTreeMap<&'static str, &str> {
        let mut templates = BTreeMap::new();
        if let Some(message) = self.message() {
            templates.insert("message", message);
        }
        match self {
            Constraint::Min(rule) | Constraint::Max(rule) => {
                templates.insert("invalidMessage", rule.invalid_message.as_str());
            }
            Constraint::Range(rule) => {
                templates.insert("minMessage", rule.min_message.as_str());
                templates.insert("maxMessage", rule.max_message.as_str());
                templates.insert("notInRangeMessage", rule.not_in_range_message.as_str());
                templates.insert("invalidMessage", rule.invalid_message.as_str());
            }
            Constraint::File(rule) => {
                templates.insert("notFoundMessage", rule.not_found_message.as_str());
                templates.insert("notReadableMessage", rule.not_readable_message.as_str());
                templates.insert("maxSizeMessage", rule.max_size_message.as_str());
                templates.insert("mimeTypesMessage", rule.mime_types_message.as_str());
            }
            Constraint::Collection(rule) => {
                templates.insert("extraFieldsMessage", rule.extra_fields_message.as_str());
                templates.insert("missingFieldsMessage", rule.missing_fields_message.as_str());
            }
            _ => {}
        }
        templates
    }

    /// Constraints embedded by `All`, `Each`, `Required` and `Optional`.
    pub fn nested(&self) -> &[Constraint] {
        match self {
            Constraint::All { constraints }
            | Constraint::Each { constraints }
            | Constraint::Required { constraints }
            | Constraint::Optional { constraints } => constraints,
            _ => &[],
        }
    }

    fn message_mut(&mut self) -> Option<&mut String> {
        match self {
            Constraint::NotNull { message }
            | Constraint::Null { message }
            | Constraint::NotBlank { message }
            | Constraint::Blank { message }
            | Constraint::AssertTrue { message }
            | Constraint::Digit { message }
            | Constraint::Iban { message }
            | Constraint::Luhn { message }
            | Constraint::Nif { message } => Some(message),
            Constraint::Min(rule) | Constraint::Max(rule) => Some(&mut rule.message),
            Constraint::MinLength(rule) | Constraint::MaxLength(rule) => Some(&mut rule.message),
            Constraint::Regex(rule) => Some(&mut rule.message),
            Constraint::Email(rule) => Some(&mut rule.message),
            Constraint::Url(rule) => Some(&mut rule.message),
            Constraint::PropertiesInequality(rule) => Some(&mut rule.message),
            Constraint::DateOrder(rule) => Some(&mut rule.message),
            _ => None,
        }
    }
}

fn parse_path(kind: ConstraintKind, option: &'static str, path: &str) -> CatalogResult<PropertyPath> {
    PropertyPath::parse(path).map_err(|e| CatalogError::invalid_path(kind, option, e))
}

/// Nested constraints are applied to single values, so class-level kinds cannot nest.
fn check_nested(kind: ConstraintKind, constraints: &[Constraint]) -> CatalogResult<()> {
    match constraints.iter().find(|c| c.target() == Target::Class) {
        Some(nested) => Err(CatalogError::target_mismatch(kind, nested.kind())),
        None => Ok(()),
    }
}

/// `All` and `Each` need something to apply.
fn non_empty(kind: ConstraintKind, constraints: Vec<Constraint>) -> CatalogResult<Vec<Constraint>> {
    if constraints.is_empty() {
        return Err(CatalogError::EmptyNested { kind });
    }
    Ok(constraints)
}

fn build_fields(
    kind: ConstraintKind,
    declared: Vec<(String, Vec<Constraint>)>,
) -> CatalogResult<Vec<Field>> {
    let mut fields = Vec::with_capacity(declared.len());
    for (name, mut constraints) in declared {
        check_nested(kind, &constraints)?;
        let mut existence = Existence::Required;
        if constraints.len() == 1 {
            match constraints.pop() {
                Some(Constraint::Optional { constraints: inner }) => {
                    existence = Existence::Optional;
                    constraints = inner;
                }
                Some(Constraint::Required { constraints: inner }) => constraints = inner,
                Some(other) => constraints.push(other),
                None => {}
            }
        }
        fields.push(Field {
            name,
            existence,
            constraints,
        });
    }
    Ok(fields)
}

/// Reads typed options out of an option bag for one kind.
struct Reader {
    kind: ConstraintKind,
    entries: BTreeMap<String, OptionValue>,
}

impl Reader {
    fn new(kind: ConstraintKind, options: Options) -> CatalogResult<Self> {
        if let Some(unknown) = options.names().find(|name| !kind.accepts_option(name)) {
            return Err(CatalogError::unknown_option(kind, unknown));
        }
        for option in kind.required_options() {
            if !options.contains(option) {
                return Err(CatalogError::missing_option(kind, option));
            }
        }
        Ok(Self {
            kind,
            entries: options.into_entries(),
        })
    }

    fn take_value(&mut self, name: &'static str) -> CatalogResult<Option<Value>> {
        match self.entries.remove(name) {
            None | Some(OptionValue::Value(Value::Null)) => Ok(None),
            Some(OptionValue::Value(value)) => Ok(Some(value)),
            Some(_) => Err(self.invalid(name, "a plain value")),
        }
    }

    fn invalid(&self, name: &str, expected: &'static str) -> CatalogError {
        CatalogError::invalid_option(self.kind, name, expected)
    }

    fn message(&mut self, name: &'static str, default: &str) -> CatalogResult<String> {
        match self.take_value(name)? {
            None => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(self.invalid(name, "a string")),
        }
    }

    fn required_string(&mut self, name: &'static str) -> CatalogResult<String> {
        match self.take_value(name)? {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(self.invalid(name, "a string")),
            None => Err(CatalogError::missing_option(self.kind, name)),
        }
    }

    fn flag(&mut self, name: &'static str, default: bool) -> CatalogResult<bool> {
        match self.take_value(name)? {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(b),
            Some(_) => Err(self.invalid(name, "a boolean")),
        }
    }

    fn strings(&mut self, name: &'static str) -> CatalogResult<Option<Vec<String>>> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(vec![s])),
            Some(Value::List(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(self.invalid(name, "a list of strings")),
                })
                .collect::<CatalogResult<Vec<_>>>()
                .map(Some),
            Some(_) => Err(self.invalid(name, "a list of strings")),
        }
    }

    fn number(&mut self, name: &'static str) -> CatalogResult<Option<f64>> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(value) => value
                .to_number()
                .filter(|_| !matches!(value, Value::Bool(_)))
                .map(Some)
                .ok_or_else(|| self.invalid(name, "a number")),
        }
    }

    fn bound(&mut self, message: &str) -> CatalogResult<Bound> {
        let limit = self
            .number("limit")?
            .ok_or_else(|| CatalogError::missing_option(self.kind, "limit"))?;
        Ok(Bound {
            limit,
            message: self.message("message", message)?,
            invalid_message: self.message("invalidMessage", crate::messages::INVALID_NUMBER)?,
        })
    }

    fn length(&mut self, message: &str) -> CatalogResult<Length> {
        let limit = match self.take_value("limit")? {
            Some(Value::Int(n)) if n >= 0 => n as usize,
            Some(Value::String(s)) => s
                .trim()
                .parse::<usize>()
                .map_err(|_| self.invalid("limit", "a non-negative integer"))?,
            Some(_) => return Err(self.invalid("limit", "a non-negative integer")),
            None => return Err(CatalogError::missing_option(self.kind, "limit")),
        };
        let charset = match self.take_value("charset")? {
            None => Charset::default(),
            Some(Value::String(name)) => {
                Charset::from_name(&name).ok_or(CatalogError::UnknownCharset { charset: name })?
            }
            Some(_) => return Err(self.invalid("charset", "a charset name")),
        };
        Ok(Length {
            limit,
            charset,
            message: self.message("message", message)?,
        })
    }

    fn size(&mut self, name: &'static str) -> CatalogResult<Option<u64>> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::Int(n)) if n >= 0 => Ok(Some(n as u64)),
            Some(Value::String(s)) => parse_size(&s)
                .map(Some)
                .ok_or(CatalogError::InvalidSize { value: s }),
            Some(other) => Err(CatalogError::InvalidSize {
                value: other.to_string(),
            }),
        }
    }

    fn path(&mut self, name: &'static str) -> CatalogResult<PropertyPath> {
        let raw = self.required_string(name)?;
        parse_path(self.kind, name, &raw)
    }

    fn constraints(&mut self, name: &'static str) -> CatalogResult<Vec<Constraint>> {
        let constraints = match self.entries.remove(name) {
            None | Some(OptionValue::Value(Value::Null)) => Vec::new(),
            Some(OptionValue::Constraints(constraints)) => constraints,
            Some(_) => return Err(self.invalid(name, "a list of constraints")),
        };
        check_nested(self.kind, &constraints)?;
        Ok(constraints)
    }

    fn fields(&mut self, name: &'static str) -> CatalogResult<Vec<Field>> {
        let declared = match self.entries.remove(name) {
            Some(OptionValue::Fields(fields)) => fields,
            // Field names without constraints: `fields: [a, b]` or `fields: {a: ~, b: ~}`.
            Some(OptionValue::Value(Value::List(names))) => names
                .into_iter()
                .map(|item| match item {
                    Value::String(field) => Ok((field, Vec::new())),
                    _ => Err(self.invalid(name, "field names")),
                })
                .collect::<CatalogResult<Vec<_>>>()?,
            Some(OptionValue::Value(Value::Record(names))) => names
                .into_iter()
                .map(|(field, value)| match value {
                    Value::Null => Ok((field, Vec::new())),
                    _ => Err(self.invalid(name, "field names")),
                })
                .collect::<CatalogResult<Vec<_>>>()?,
            None => return Err(CatalogError::missing_option(self.kind, name)),
            Some(_) => return Err(self.invalid(name, "collection fields")),
        };
        build_fields(self.kind, declared)
    }
}

/// Parse `500`, `10k`, `2M`, `1Ki`, `3Mi`, `1G` into bytes.
fn parse_size(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, suffix) = raw.split_at(digits_end);
    let number: u64 = digits.parse().ok()?;
    let factor: u64 = match suffix.to_ascii_lowercase().as_str() {
        "" => 1,
        "k" => 1_000,
        "ki" => 1 << 10,
        "m" => 1_000_000,
        "mi" => 1 << 20,
        "g" => 1_000_000_000,
        "gi" => 1 << 30,
        _ => return None,
    };
    number.checked_mul(factor)
}
