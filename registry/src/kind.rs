//! The closed set of constraint kinds and their static option tables.

use std::fmt;

/// What a constraint is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A single property value.
    Property,
    /// A whole composite value, for cross-field rules.
    Class,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Property => f.write_str("property"),
            Target::Class => f.write_str("class"),
        }
    }
}

/// Static declaration of a kind's option protocol.
#[derive(Debug)]
pub struct KindSpec {
    /// Wire name used in declarations.
    pub name: &'static str,
    /// Option bound when a single positional value is supplied.
    pub default_option: Option<&'static str>,
    /// Options that must be present at construction.
    pub required_options: &'static [&'static str],
    /// Every option the kind accepts (required ones included).
    pub accepted_options: &'static [&'static str],
    /// What the constraint applies to.
    pub target: Target,
}

/// Identifies a constraint kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKind {
    NotNull,
    Null,
    NotBlank,
    Blank,
    AssertTrue,
    Min,
    Max,
    Range,
    MinLength,
    MaxLength,
    Regex,
    Email,
    Url,
    File,
    Collection,
    All,
    Each,
    Required,
    Optional,
    PropertiesInequality,
    DateOrder,
    Digit,
    Iban,
    Luhn,
    Nif,
}

const MESSAGE: &[&str] = &["message"];

const NOT_NULL: KindSpec = simple("NotNull");
const NULL: KindSpec = simple("Null");
const NOT_BLANK: KindSpec = simple("NotBlank");
const BLANK: KindSpec = simple("Blank");
const ASSERT_TRUE: KindSpec = simple("AssertTrue");
const DIGIT: KindSpec = simple("Digit");
const IBAN: KindSpec = simple("Iban");
const LUHN: KindSpec = simple("Luhn");
const NIF: KindSpec = simple("Nif");

const MIN: KindSpec = bound("Min");
const MAX: KindSpec = bound("Max");
const MIN_LENGTH: KindSpec = length("MinLength");
const MAX_LENGTH: KindSpec = length("MaxLength");

const RANGE: KindSpec = KindSpec {
    name: "Range",
    default_option: None,
    required_options: &[],
    accepted_options: &[
        "min",
        "max",
        "minMessage",
        "maxMessage",
        "notInRangeMessage",
        "invalidMessage",
    ],
    target: Target::Property,
};

const REGEX: KindSpec = KindSpec {
    name: "Regex",
    default_option: Some("pattern"),
    required_options: &["pattern"],
    accepted_options: &["pattern", "match", "message"],
    target: Target::Property,
};

const EMAIL: KindSpec = KindSpec {
    name: "Email",
    default_option: None,
    required_options: &[],
    accepted_options: &["checkMX", "message"],
    target: Target::Property,
};

const URL: KindSpec = KindSpec {
    name: "Url",
    default_option: None,
    required_options: &[],
    accepted_options: &["protocols", "message"],
    target: Target::Property,
};

const FILE: KindSpec = KindSpec {
    name: "File",
    default_option: None,
    required_options: &[],
    accepted_options: &[
        "maxSize",
        "mimeTypes",
        "notFoundMessage",
        "notReadableMessage",
        "maxSizeMessage",
        "mimeTypesMessage",
    ],
    target: Target::Property,
};

const COLLECTION: KindSpec = KindSpec {
    name: "Collection",
    default_option: Some("fields"),
    required_options: &["fields"],
    accepted_options: &[
        "fields",
        "allowExtraFields",
        "allowMissingFields",
        "extraFieldsMessage",
        "missingFieldsMessage",
    ],
    target: Target::Property,
};

const ALL: KindSpec = nested("All", &["constraints"]);
const EACH: KindSpec = nested("Each", &["constraints"]);
const REQUIRED: KindSpec = nested("Required", &[]);
const OPTIONAL: KindSpec = nested("Optional", &[]);

const PROPERTIES_INEQUALITY: KindSpec = KindSpec {
    name: "PropertiesInequality",
    default_option: None,
    required_options: &["first", "second"],
    accepted_options: &["first", "second", "strict", "message"],
    target: Target::Class,
};

const DATE_ORDER: KindSpec = KindSpec {
    name: "DateOrder",
    default_option: None,
    required_options: &["start", "end"],
    accepted_options: &["start", "end", "allowEqual", "message"],
    target: Target::Class,
};

const fn simple(name: &'static str) -> KindSpec {
    KindSpec {
        name,
        default_option: None,
        required_options: &[],
        accepted_options: MESSAGE,
        target: Target::Property,
    }
}

const fn bound(name: &'static str) -> KindSpec {
    KindSpec {
        name,
        default_option: Some("limit"),
        required_options: &["limit"],
        accepted_options: &["limit", "message", "invalidMessage"],
        target: Target::Property,
    }
}

const fn length(name: &'static str) -> KindSpec {
    KindSpec {
        name,
        default_option: Some("limit"),
        required_options: &["limit"],
        accepted_options: &["limit", "charset", "message"],
        target: Target::Property,
    }
}

const fn nested(name: &'static str, required: &'static [&'static str]) -> KindSpec {
    KindSpec {
        name,
        default_option: Some("constraints"),
        required_options: required,
        accepted_options: &["constraints"],
        target: Target::Property,
    }
}

impl ConstraintKind {
    /// Every kind in the catalog.
    pub const ALL: [ConstraintKind; 25] = [
        ConstraintKind::NotNull,
        ConstraintKind::Null,
        ConstraintKind::NotBlank,
        ConstraintKind::Blank,
        ConstraintKind::AssertTrue,
        ConstraintKind::Min,
        ConstraintKind::Max,
        ConstraintKind::Range,
        ConstraintKind::MinLength,
        ConstraintKind::MaxLength,
        ConstraintKind::Regex,
        ConstraintKind::Email,
        ConstraintKind::Url,
        ConstraintKind::File,
        ConstraintKind::Collection,
        ConstraintKind::All,
        ConstraintKind::Each,
        ConstraintKind::Required,
        ConstraintKind::Optional,
        ConstraintKind::PropertiesInequality,
        ConstraintKind::DateOrder,
        ConstraintKind::Digit,
        ConstraintKind::Iban,
        ConstraintKind::Luhn,
        ConstraintKind::Nif,
    ];

    /// The static option table for this kind.
    pub fn spec(self) -> &'static KindSpec {
        match self {
            ConstraintKind::NotNull => &NOT_NULL,
            ConstraintKind::Null => &NULL,
            ConstraintKind::NotBlank => &NOT_BLANK,
            ConstraintKind::Blank => &BLANK,
            ConstraintKind::AssertTrue => &ASSERT_TRUE,
            ConstraintKind::Min => &MIN,
            ConstraintKind::Max => &MAX,
            ConstraintKind::Range => &RANGE,
            ConstraintKind::MinLength => &MIN_LENGTH,
            ConstraintKind::MaxLength => &MAX_LENGTH,
            ConstraintKind::Regex => &REGEX,
            ConstraintKind::Email => &EMAIL,
            ConstraintKind::Url => &URL,
            ConstraintKind::File => &FILE,
            ConstraintKind::Collection => &COLLECTION,
            ConstraintKind::All => &ALL,
            ConstraintKind::Each => &EACH,
            ConstraintKind::Required => &REQUIRED,
            ConstraintKind::Optional => &OPTIONAL,
            ConstraintKind::PropertiesInequality => &PROPERTIES_INEQUALITY,
            ConstraintKind::DateOrder => &DATE_ORDER,
            ConstraintKind::Digit => &DIGIT,
            ConstraintKind::Iban => &IBAN,
            ConstraintKind::Luhn => &LUHN,
            ConstraintKind::Nif => &NIF,
        }
    }

    /// Look a kind up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn default_option(self) -> Option<&'static str> {
        self.spec().default_option
    }

    pub fn required_options(self) -> &'static [&'static str] {
        self.spec().required_options
    }

    pub fn accepts_option(self, option: &str) -> bool {
        self.spec().accepted_options.contains(&option)
    }

    pub fn target(self) -> Target {
        self.spec().target
    }

    /// Kinds whose payload embeds other constraints.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            ConstraintKind::Collection
                | ConstraintKind::All
                | ConstraintKind::Each
                | ConstraintKind::Required
                | ConstraintKind::Optional
        )
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
