// crates/powerlink-rs-cli/src/table.rs

//! Public, validated representation of the error-code table.

use crate::error::TableError;
use crate::messages::Language;
use crate::model;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::BTreeMap;

/// Root element of an error-code table.
pub const TABLE_ROOT_ELEMENT: &str = "ErrorCodes";

/// One error code owned by a component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorCodeEntry {
    /// Symbolic name (`value` attribute).
    pub name: String,
    /// Code emitted by the component. `None` when the table leaves it blank.
    pub original_code: Option<u32>,
    /// Code shown to the user. `None` when the table leaves it blank.
    pub tool_code: Option<u32>,
    /// Descriptions in the languages the CLI can report in.
    pub descriptions: BTreeMap<Language, String>,
    /// Descriptions whose `lang` attribute names no supported language,
    /// keyed by the lower-cased tag.
    pub other_descriptions: BTreeMap<String, String>,
}

impl ErrorCodeEntry {
    /// Description in `language`, falling back to English and then to any
    /// available description.
    pub fn description(&self, language: Language) -> Option<&str> {
        self.descriptions
            .get(&language)
            .or_else(|| self.descriptions.get(&Language::English))
            .or_else(|| self.descriptions.values().next())
            .or_else(|| self.other_descriptions.values().next())
            .map(String::as_str)
    }
}

/// All error codes of one component, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentErrorTable {
    pub name: String,
    pub version: String,
    pub entries: Vec<ErrorCodeEntry>,
}

impl ComponentErrorTable {
    /// First entry whose original code equals `original_code`.
    pub fn find(&self, original_code: u32) -> Option<&ErrorCodeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.original_code == Some(original_code))
    }
}

/// The complete cross-reference table, keyed by component name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorCodeTable {
    components: Vec<ComponentErrorTable>,
    by_name: BTreeMap<String, usize>,
}

impl ErrorCodeTable {
    /// Components in document order.
    pub fn components(&self) -> &[ComponentErrorTable] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&ComponentErrorTable> {
        self.by_name.get(name).map(|&i| &self.components[i])
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn push(&mut self, component: ComponentErrorTable) -> Result<(), TableError> {
        if self.by_name.contains_key(&component.name) {
            return Err(TableError::DuplicateComponent {
                name: component.name,
            });
        }
        self.by_name
            .insert(component.name.clone(), self.components.len());
        self.components.push(component);
        Ok(())
    }
}

/// Parses an error-code table document.
///
/// Components and codes keep their document order. Blank numeric
/// attributes become `None`. Component names and original codes within a
/// component must be unique.
///
/// # Errors
/// Returns a `TableError` if the root element is not `<ErrorCodes>`, the
/// XML is malformed, a numeric attribute is not a decimal number, or a
/// uniqueness rule is violated.
pub fn parse_error_table(xml_content: &str) -> Result<ErrorCodeTable, TableError> {
    check_root(xml_content)?;
    let document: model::ErrorCodesDocument = quick_xml::de::from_str(xml_content)?;

    let mut table = ErrorCodeTable::default();
    for component in document.component {
        table.push(parse_component(component)?)?;
    }
    Ok(table)
}

/// The deserializer ignores the root element's name, so check it up front.
/// Syntax errors are left for the deserializer to report.
fn check_root(xml_content: &str) -> Result<(), TableError> {
    let mut reader = Reader::from_str(xml_content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == TABLE_ROOT_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(TableError::MissingElement {
                    element: TABLE_ROOT_ELEMENT,
                });
            }
            Ok(Event::Eof) => {
                return Err(TableError::MissingElement {
                    element: TABLE_ROOT_ELEMENT,
                });
            }
            Ok(_) => {}
            Err(_) => return Ok(()),
        }
    }
}

fn parse_component(model: model::Component) -> Result<ComponentErrorTable, TableError> {
    let name = model.name.trim().to_string();
    if name.is_empty() {
        return Err(TableError::MissingAttribute {
            element: "Component",
            attribute: "name",
        });
    }

    let mut entries: Vec<ErrorCodeEntry> = Vec::with_capacity(model.error_code.len());
    for code in model.error_code {
        let entry = parse_entry(code)?;
        if let Some(original) = entry.original_code {
            if entries.iter().any(|e| e.original_code == Some(original)) {
                return Err(TableError::DuplicateCode {
                    component: name,
                    code: original,
                });
            }
        }
        entries.push(entry);
    }

    Ok(ComponentErrorTable {
        name,
        version: model.version.trim().to_string(),
        entries,
    })
}

fn parse_entry(model: model::ErrorCode) -> Result<ErrorCodeEntry, TableError> {
    let mut descriptions = BTreeMap::new();
    let mut other_descriptions = BTreeMap::new();
    for description in model.description {
        match Language::from_tag(&description.lang) {
            Some(language) => {
                descriptions.insert(language, description.value);
            }
            None => {
                other_descriptions.insert(
                    description.lang.trim().to_ascii_lowercase(),
                    description.value,
                );
            }
        }
    }

    Ok(ErrorCodeEntry {
        name: model.value.trim().to_string(),
        original_code: parse_code("originalCode", &model.original_code)?,
        tool_code: parse_code("toolCode", &model.tool_code)?,
        descriptions,
        other_descriptions,
    })
}

/// Parses a decimal code attribute. A blank value means "unknown".
fn parse_code(attribute: &'static str, value: &str) -> Result<Option<u32>, TableError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TableError::InvalidNumber {
            attribute,
            value: value.to_string(),
        })
}
