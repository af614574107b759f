// crates/powerlink-rs-cli/src/error.rs

use crate::error_code::CliErrorCode;
use core::fmt;
use quick_xml::errors::serialize::DeError;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading the error-code table.
#[derive(Debug)]
pub enum TableError {
    /// The table file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// A required XML element was missing (e.g., the `<ErrorCodes>` root).
    MissingElement { element: &'static str },

    /// A numeric attribute was neither blank nor a decimal number.
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },

    /// A required attribute was present but empty.
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// Two `<Component>` elements share a name.
    DuplicateComponent { name: String },

    /// Two error codes in one component share an `originalCode`.
    DuplicateCode { component: String, code: u32 },
}

impl TableError {
    /// The CLI error kind reported for this failure.
    pub fn kind(&self) -> CliErrorCode {
        match self {
            TableError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                CliErrorCode::FileNotExists
            }
            TableError::Io { .. } => CliErrorCode::Failure,
            _ => CliErrorCode::SchemaInvalid,
        }
    }
}

impl From<DeError> for TableError {
    fn from(e: DeError) -> Self {
        TableError::XmlParsing(e)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io { path, source } => {
                write!(f, "Unable to read error-code table {}: {}", path.display(), source)
            }
            TableError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            TableError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            TableError::InvalidNumber { attribute, value } => {
                write!(f, "Invalid decimal value {:?} for attribute: {}", value, attribute)
            }
            TableError::MissingAttribute { element, attribute } => {
                write!(f, "Missing required attribute {} on <{}>", attribute, element)
            }
            TableError::DuplicateComponent { name } => {
                write!(f, "Component {:?} is defined more than once", name)
            }
            TableError::DuplicateCode { component, code } => write!(
                f,
                "Original code {} is defined more than once in component {:?}",
                code, component
            ),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io { source, .. } => Some(source),
            TableError::XmlParsing(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors returned when resolving an original code to a tool code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No table has been loaded yet.
    NotLoaded,

    /// The table has no component with this name.
    InvalidComponent(String),

    /// The component has no entry for this original code.
    NotFound { component: String, code: u32 },
}

impl LookupError {
    /// The CLI error kind reported for this failure.
    pub fn kind(&self) -> CliErrorCode {
        match self {
            LookupError::NotLoaded => CliErrorCode::ErrorTableNotLoaded,
            LookupError::InvalidComponent(_) | LookupError::NotFound { .. } => {
                CliErrorCode::ErrorInfoNotFound
            }
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotLoaded => write!(f, "Error-code table is not loaded"),
            LookupError::InvalidComponent(name) => write!(f, "Unknown component: {}", name),
            LookupError::NotFound { component, code } => {
                write!(f, "No entry for code {} in component {}", code, component)
            }
        }
    }
}

impl std::error::Error for LookupError {}
